//! mod rebaser launches the interactive rebase session that git owns

use std::process::{Command, ExitStatus, Stdio};

use anyhow::Context as _;

/// Launch `git rebase --interactive` over the most recent `commit_count`
/// commits, handing the terminal to git until the session ends.
pub(crate) fn launch_interactive_rebase(commit_count: usize) -> Result<ExitStatus, anyhow::Error> {
    let mut cmd = Command::new("git");
    cmd.args(rebase_args(commit_count));
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd.status().context("spawning git rebase")
}

fn rebase_args(commit_count: usize) -> Vec<String> {
    vec![
        "rebase".to_string(),
        "--interactive".to_string(),
        format!("HEAD~{}", commit_count),
    ]
}
