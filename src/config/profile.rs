//! Profile selection.

use super::{ConfigError, Result};

/// Environment variable naming the profile when `-p` is not given.
pub const PROFILE_ENV: &str = "RMINE_ENV";

/// A named set of settings.
///
/// The unnamed profile reads `settings.json`; a profile called `work` reads
/// `settings.work.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    name: Option<String>,
}

impl Profile {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: (!name.is_empty()).then_some(name),
        }
    }

    /// Pick the profile from the command line flag, then `RMINE_ENV`.
    pub fn select(flag: Option<&str>) -> Self {
        match flag {
            Some(name) if !name.is_empty() => Self::named(name),
            _ => Self::named(std::env::var(PROFILE_ENV).unwrap_or_default()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("default")
    }

    pub fn file_name(&self) -> String {
        match &self.name {
            Some(name) => format!("settings.{}.json", name),
            None => "settings.json".to_string(),
        }
    }

    /// Profile names end up in a file name.
    pub fn validate(&self) -> Result<()> {
        let Some(name) = &self.name else {
            return Ok(());
        };

        if name.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "profile name '{}' cannot contain whitespace",
                name
            )));
        }

        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ConfigError::ValidationError(format!(
                "profile name '{}' cannot contain path separators",
                name
            )));
        }

        Ok(())
    }
}
