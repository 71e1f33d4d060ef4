use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::message::is_already_tagged;
use crate::{git, rewrite};

/// Where the commit message comes from and where the result goes.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// An existing file, e.g. `.git/COMMIT_EDITMSG`. Rewritten in place.
    File(PathBuf),
    /// A message given on the command line. Result goes to stdout.
    Literal(String),
}

impl Input {
    fn resolve(arg: &str) -> Self {
        let path = Path::new(arg);
        if std::fs::metadata(path).is_ok() {
            Input::File(path.to_path_buf())
        } else {
            Input::Literal(arg.to_string())
        }
    }

    /// Raw message bytes. Files are not decoded, so a message in a
    /// non-UTF-8 commit encoding survives the round trip.
    fn read(&self) -> Result<Vec<u8>, Error> {
        match self {
            Input::File(path) => std::fs::read(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            }),
            Input::Literal(message) => Ok(message.clone().into_bytes()),
        }
    }

    fn write(&self, message: &[u8]) -> Result<(), Error> {
        match self {
            Input::File(path) => std::fs::write(path, message).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            }),
            Input::Literal(_) => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(message)
                    .and_then(|()| stdout.write_all(b"\n"))
                    .and_then(|()| stdout.flush())
                    .map_err(Error::Output)
            }
        }
    }
}

/// Prefix a commit message with the issue reference for the current branch.
///
/// Tagged messages are written back untouched without asking git for the
/// branch. Every failure except a broken template is returned as `Err`.
pub fn run(input: Option<&str>, config_path: Option<&Path>) -> Result<(), Error> {
    let input = Input::resolve(input.ok_or(Error::MissingInput)?);
    let message = input.read()?;

    if is_already_tagged(&message) {
        log::debug!("message already tagged, leaving it as is");
        return input.write(&message);
    }

    let cwd = super::working_dir()?;
    let branch = git::current_branch(&cwd)?;
    let config = super::load_config(config_path, &cwd)?;

    let outcome = rewrite::evaluate(&message, &branch, &config)?;
    input.write(outcome.message(&message))
}
