//! Resource directory resolution

use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::config::{APP_DIR, FILENAME, RESOURCE_DIR_ENV, RESOURCE_SUBDIR};

/// Supplies the directory that holds config.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configurator {
    pub resource_dir: PathBuf,
}

impl Configurator {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
        }
    }

    /// Resolve from an explicit override, then the environment, then the
    /// platform config directory
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        Self::resolve_with(override_dir, std::env::var_os(RESOURCE_DIR_ENV))
    }

    fn resolve_with(override_dir: Option<PathBuf>, env_dir: Option<OsString>) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }

        match env_dir {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(default_resource_dir()),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.resource_dir.join(FILENAME)
    }
}

fn default_resource_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(RESOURCE_SUBDIR);
    path
}
