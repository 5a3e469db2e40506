use anyhow::{anyhow, Context};
use console::style;
use git2::{ObjectType, Repository};

mod config;
mod rebaser;

pub use config::{load_config_from_args_env_git, Config};

/// Count the commits HEAD has that the target branch doesn't, then hand the
/// user an interactive rebase over exactly that range.
///
/// Returns the exit code for the process: the spawned rebase's own status,
/// or 0 when there is nothing to rebase.
pub fn fixup_range(target_branch: &str) -> Result<i32, anyhow::Error> {
    let repo = Repository::discover(".").context("finding a git repository")?;
    let count = commits_ahead(&repo, target_branch)?;
    if count == 0 {
        eprintln!(
            "{} has no commits that aren't on {}, nothing to rebase",
            format_ref(&repo.head()?)?,
            style(target_branch).green(),
        );
        return Ok(0);
    }
    eprintln!(
        "Rebasing the last {} commits onto where {} diverged",
        style(count).blue(),
        style(target_branch).green(),
    );
    let status = rebaser::launch_interactive_rebase(count)?;
    Ok(status.code().unwrap_or(1))
}

/// Count commits reachable from HEAD but not from `target_branch`, the
/// equivalent of `git rev-list --count HEAD ^<target>`.
fn commits_ahead(repo: &Repository, target_branch: &str) -> Result<usize, anyhow::Error> {
    let branch = repo
        .branches(None)?
        .filter_map(|branch| branch.ok().map(|(b, _type)| b))
        .find(|b| {
            b.name()
                .map(|n| n == Some(target_branch))
                .unwrap_or(false)
        })
        .ok_or_else(|| anyhow!("cannot find branch with name {:?}", target_branch))?;
    let target = branch.into_reference().peel(ObjectType::Commit)?;

    let mut walker = repo.revwalk()?;
    walker.push_head().context("finding head commit")?;
    walker.hide(target.id()).context("hiding target branch")?;
    let mut count = 0;
    for rev in walker {
        rev?;
        count += 1;
    }
    Ok(count)
}

/// Display a reference as "shorthand (short_hash)"
fn format_ref(rf: &git2::Reference<'_>) -> Result<String, anyhow::Error> {
    let shorthand = rf.shorthand().unwrap_or("<unnamed>");
    let sha = rf.peel_to_commit()?.id().to_string();
    Ok(format!("{} ({})", shorthand, &sha[..10]))
}

#[cfg(test)]
mod tests {
    use git2::{Repository, Signature};

    use super::commits_ahead;

    /// Commit the current index with `msg`, on top of HEAD if it exists
    fn commit(repo: &Repository, msg: &str) {
        let sig = Signature::now("tester", "tester@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, msg, &tree, &parent_refs)
            .unwrap();
    }

    fn repo_with_base_branch() -> (assert_fs::TempDir, Repository) {
        let td = assert_fs::TempDir::new().unwrap();
        let repo = Repository::init(td.path()).unwrap();
        commit(&repo, "a");
        commit(&repo, "b");
        {
            let head = repo.head().unwrap().peel_to_commit().unwrap();
            repo.branch("base", &head, false).unwrap();
        }
        (td, repo)
    }

    #[test]
    fn counts_commits_unique_to_head() {
        let (_td, repo) = repo_with_base_branch();
        commit(&repo, "c");
        commit(&repo, "d");
        assert_eq!(commits_ahead(&repo, "base").unwrap(), 2);
    }

    #[test]
    fn zero_when_head_is_the_target() {
        let (_td, repo) = repo_with_base_branch();
        assert_eq!(commits_ahead(&repo, "base").unwrap(), 0);
    }

    #[test]
    fn missing_branch_is_an_error() {
        let (_td, repo) = repo_with_base_branch();
        let err = commits_ahead(&repo, "gone").unwrap_err();
        assert!(err.to_string().contains("gone"), "err: {:#}", err);
    }
}
