//! Configuration management for rmine.
//!
//! This module handles loading, saving, and listing the JSON settings files
//! kept in the platform config directory, one file per profile.

mod profile;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use profile::{Profile, PROFILE_ENV};
pub use settings::Settings;

/// Name of the directory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "rmine";

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("failed to create directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    #[error("failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[source] serde_json::Error),

    #[error("failed to serialize settings: {0}")]
    SerializeError(#[source] serde_json::Error),

    #[error("{0}")]
    ValidationError(String),

    #[error("no settings file for profile '{0}'")]
    ProfileNotFound(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The directory holding all settings files.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Use `rmine/` under the platform config directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(base.join(CONFIG_DIR_NAME)))
    }

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the settings file for a profile.
    pub fn path_for(&self, profile: &Profile) -> PathBuf {
        self.dir.join(profile.file_name())
    }

    /// Load and validate the settings of a profile.
    pub fn load(&self, profile: &Profile) -> Result<Settings> {
        let path = self.path_for(profile);
        if !path.exists() {
            return Err(ConfigError::ProfileNotFound(profile.display_name().to_string()));
        }

        debug!(path = %path.display(), "Loading settings");
        let settings = Settings::load_from(&path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate and write the settings of a profile, creating the directory.
    pub fn save(&self, profile: &Profile, settings: &Settings) -> Result<PathBuf> {
        profile.validate()?;
        settings.validate()?;

        fs::create_dir_all(&self.dir).map_err(ConfigError::CreateDirError)?;
        restrict_permissions(&self.dir, 0o700);

        let path = self.path_for(profile);
        settings.save_to(&path)?;

        info!(path = %path.display(), "Settings saved");
        Ok(path)
    }

    /// The raw text of a profile's settings file.
    pub fn read_raw(&self, profile: &Profile) -> Result<String> {
        fs::read_to_string(self.path_for(profile)).map_err(ConfigError::ReadError)
    }

    /// File names in the config directory, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(ConfigError::ReadError)?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(ConfigError::ReadError)?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(mode)) {
        tracing::warn!("Could not set permissions on {:?}: {}", path, e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _mode: u32) {}
