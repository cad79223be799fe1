//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "foyer.toml";

/// Load the configuration.
///
/// An explicit `path` must exist. Without one, `foyer.toml` in the working
/// directory is used when present and defaults apply otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_content(&fs::read_to_string(path)?)
        }
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                parse_config_content(&fs::read_to_string(default_path)?)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
