pub mod commit;
pub mod show;

use std::path::Path;

use crate::config::Config;
use crate::error::Error;

/// Load the config from `--config`, or from `.commithelperrc.json` in `cwd`.
///
/// Only the implicit file may be missing; an explicit path must exist.
fn load_config(config_path: Option<&Path>, cwd: &Path) -> Result<Config, Error> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(cwd)?,
    };
    Ok(config)
}

fn working_dir() -> Result<std::path::PathBuf, Error> {
    std::env::current_dir().map_err(Error::WorkingDir)
}
