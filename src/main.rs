fn main() {
    let config = match git_fixup::load_config_from_args_env_git() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };
    match git_fixup::fixup_range(&config.target_branch) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
