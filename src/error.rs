use std::path::PathBuf;

use miette::Diagnostic;

use crate::config::ConfigError;
use crate::git::GitError;
use crate::protect::PatternError;

/// Everything that stops a run. Template problems are not here: they fall
/// back to the default format instead of failing.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error("missing commit message argument")]
    #[diagnostic(
        code(commithelper::input),
        help("pass the commit message file from a commit-msg hook, or a message string")
    )]
    MissingInput,

    #[error("failed to read commit message file {}", path.display())]
    #[diagnostic(code(commithelper::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write commit message file {}", path.display())]
    #[diagnostic(code(commithelper::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write the commit message to stdout")]
    #[diagnostic(code(commithelper::io))]
    Output(#[source] std::io::Error),

    #[error("failed to determine the working directory")]
    #[diagnostic(code(commithelper::io))]
    WorkingDir(#[source] std::io::Error),

    #[error("failed to fetch the current branch name")]
    #[diagnostic(code(commithelper::git), help("run inside a git work tree"))]
    Git(#[from] GitError),

    #[error("failed to load config")]
    #[diagnostic(code(commithelper::config))]
    Config(#[from] ConfigError),

    #[error("invalid protect list")]
    #[diagnostic(
        code(commithelper::pattern),
        help("protect entries are shell globs, e.g. \"release/*\"")
    )]
    Pattern(#[from] PatternError),

    #[error("cannot commit to protected branch '{branch}'")]
    #[diagnostic(
        code(commithelper::protected),
        help("create an issue branch such as feature/123 and commit there")
    )]
    Protected { branch: String },

    #[error("failed to serialize rules")]
    #[diagnostic(code(commithelper::show))]
    Show(#[source] serde_json::Error),
}
