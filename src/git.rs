use std::path::Path;
use std::process::{Command, ExitStatus};
use std::string::FromUtf8Error;

/// Failure to obtain the current branch from git.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git branch --show-current exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("git printed a branch name that is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Returns the name of the branch checked out in `cwd`.
///
/// A detached HEAD yields an empty string, which never matches a rule.
pub fn current_branch(cwd: &Path) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .current_dir(cwd)
        .output()?;

    if !output.status.success() {
        return Err(GitError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let branch = String::from_utf8(output.stdout)?.trim().to_string();
    log::debug!("current branch: '{branch}'");
    Ok(branch)
}
