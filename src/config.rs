use clap::Parser;

// Env vars that provide defaults for args
const DEFAULT_BRANCH_VAR: &str = "GIT_FIXUP_DEFAULT_BRANCH";

// Other defaults
pub(crate) const FALLBACK_BRANCH: &str = "master";

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Interactively rebase the commits your branch added on top of a target branch",
    long_about = "Interactively rebase the commits your branch added on top of a target branch

When run this will:

  * Count the commits reachable from HEAD but not from the target branch
  * Launch `git rebase --interactive` scoped to exactly that many commits,
    handing you git's usual todo-list editor

The target branch is the positional argument if given, otherwise the
GIT_FIXUP_DEFAULT_BRANCH environment variable, the fixup.default-branch
gitconfig key, or `master`.
",
    max_term_width = 100
)]
struct Args {
    /// The branch to compare against when counting your commits
    ///
    /// [gitconfig: fixup.default-branch]
    #[clap(env = DEFAULT_BRANCH_VAR)]
    branch: Option<String>,
}

/// Fully configured arguments after loading from env and gitconfig
pub struct Config {
    /// The branch whose commits are excluded from the rebase range
    pub target_branch: String,
}

/// Create a Config based on arguments, env vars, and gitconfig
pub fn load_config_from_args_env_git() -> Result<Config, anyhow::Error> {
    let args = Args::parse();
    args_to_config_using_git_config(args)
}

fn args_to_config_using_git_config(args: Args) -> Result<Config, anyhow::Error> {
    let mut cfg = git2::Config::open_default()?;
    let repo = git2::Repository::discover(".")?;
    cfg.add_file(&repo.path().join("config"), git2::ConfigLevel::Local, false)?;
    Ok(Config {
        target_branch: args.branch.unwrap_or_else(|| {
            cfg.get_string("fixup.default-branch")
                .unwrap_or_else(|_| FALLBACK_BRANCH.to_string())
        }),
    })
}
