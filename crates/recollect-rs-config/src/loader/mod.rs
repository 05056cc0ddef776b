//! Env file bootstrap.
//!
//! Loads `KEY=value` pairs into the process environment. Variables that are
//! already set always win over the file.


use crate::ConfigError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Default env file name searched for from the working directory upward.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load an env file into the process environment.
///
/// With no explicit path, `.env` is searched for in the working directory
/// and its ancestors. A missing file is not an error and yields `Ok(None)`.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(path) => {
            info!("loaded env file (path={})", path.display());
            Ok(Some(path))
        }
        Err(err) if err.not_found() => {
            debug!(
                "no env file found (path={})",
                path.map_or_else(|| DEFAULT_ENV_FILE.to_string(), |p| p.display().to_string())
            );
            Ok(None)
        }
        Err(err) => Err(ConfigError::EnvFile(err)),
    }
}
