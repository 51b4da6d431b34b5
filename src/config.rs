// src/config.rs

//! Configuration loading utilities.
//!
//! Convenience functions the CLI uses to obtain a validated configuration
//! and to write the default one to disk.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Load configuration from a TOML file.
///
/// A missing file falls back to defaults; a file that exists but does not
/// parse or validate is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        Config::load(path)?
    } else {
        log::debug!("No config at {path:?}, using defaults");
        Config::default()
    };

    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid config {path:?}: {e}")))?;
    Ok(config)
}

/// Write the default configuration to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(AppError::config(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }
    Config::default().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("missing.toml")).unwrap();
        assert_eq!(config.extractor.sites.len(), 9);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jobtracker.toml");
        std::fs::write(&path, "[http]\nmax_concurrent = 0\n").unwrap();
        assert!(matches!(load_config(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jobtracker.toml");

        write_default_config(&path, false).unwrap();
        assert!(write_default_config(&path, false).is_err());
        assert!(write_default_config(&path, true).is_ok());
        assert!(load_config(&path).is_ok());
    }
}
