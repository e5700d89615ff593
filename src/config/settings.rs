//! The settings file of one profile.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::api::{self, AuthConfig, AuthKind, Client, ClientBuilder};

fn default_auth_type() -> i32 {
    AuthKind::TokenQueryParam.code()
}

fn is_default_auth_type(kind: &i32) -> bool {
    *kind == default_auth_type()
}

/// Open `path` for writing with mode 0600 and truncate it.
///
/// An existing file keeps its mode on open, so it is tightened before
/// anything is written to it.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Connection and tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the Redmine server.
    pub endpoint: String,

    /// API key, sent as the `key` query parameter or as the Basic password.
    #[serde(default)]
    pub apikey: String,

    /// Project used by commands that do not take a project id.
    #[serde(default)]
    pub project: u32,

    /// Editor command. Falls back to `$EDITOR`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub editor: String,

    /// Accept invalid TLS certificates.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub insecure: bool,

    /// Numeric authentication kind, see [`AuthKind`].
    #[serde(default = "default_auth_type", skip_serializing_if = "is_default_auth_type")]
    pub auth_type: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    /// Page size for list requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            apikey: String::new(),
            project: 0,
            editor: String::new(),
            insecure: false,
            auth_type: default_auth_type(),
            user: String::new(),
            password: String::new(),
            limit: None,
        }
    }
}

impl Settings {
    /// Settings for `config init`.
    pub fn new(endpoint: impl Into<String>, apikey: impl Into<String>, project: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            apikey: apikey.into(),
            project,
            ..Default::default()
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        serde_json::from_str(&content).map_err(ConfigError::ParseError)
    }

    /// Write the settings, readable by the owner only.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        let mut file = open_private(path).map_err(ConfigError::WriteError)?;
        file.write_all(content.as_bytes()).map_err(ConfigError::WriteError)
    }

    /// Check the endpoint and key before anything talks to the server.
    ///
    /// The endpoint must be an `http` or `https` URL with a host and the key,
    /// when present, must be alphanumeric.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::ValidationError(format!("endpoint must be a URL: {}", e))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::ValidationError(
                "endpoint must be a URL".to_string(),
            ));
        }

        if !self.apikey.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::ValidationError(
                "apikey must be [0-9a-f] only".to_string(),
            ));
        }

        if self.limit == Some(0) {
            return Err(ConfigError::ValidationError(
                "limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured editor command, if any.
    pub fn editor(&self) -> Option<&str> {
        Some(self.editor.as_str()).filter(|e| !e.trim().is_empty())
    }

    pub fn auth(&self) -> api::Result<AuthConfig> {
        AuthConfig::from_parts(self.auth_type, &self.user, &self.password, &self.apikey)
    }

    /// Build an API client from these settings.
    pub fn to_client(&self) -> api::Result<Client> {
        let mut builder = ClientBuilder::new()
            .endpoint(self.endpoint.as_str())
            .auth(self.auth()?)
            .skip_ssl_verify(self.insecure);
        if let Some(limit) = self.limit {
            builder = builder.result_limit(limit);
        }
        builder.build()
    }
}
