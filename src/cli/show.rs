use std::path::Path;

use crate::error::Error;

/// Print the branch rules in effect as pretty JSON.
pub fn run(config_path: Option<&Path>) -> Result<(), Error> {
    let cwd = super::working_dir()?;
    let config = super::load_config(config_path, &cwd)?;
    let json = serde_json::to_string_pretty(&config.rules).map_err(Error::Show)?;
    println!("{json}");
    Ok(())
}
