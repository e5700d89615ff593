//! Authentication handling for the Redmine API.
//!
//! Redmine accepts HTTP Basic credentials, an API key passed as the `key`
//! query parameter, or the API key used as the Basic password. Exactly one
//! of those (or none) is configured per client and applied to every request.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::blocking::{Client as HttpClient, Request};
use reqwest::{header, Method};

use super::error::{ApiError, Result};
use super::query::add_query_parameter;

/// Name of the query parameter carrying the API key.
const TOKEN_PARAMETER: &str = "key";

/// Content type of every JSON request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type of file uploads.
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// The kind of authentication, with its stable numeric tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    BasicAuth,
    TokenQueryParam,
    BasicAuthWithTokenAsPassword,
    NoAuth,
}

impl AuthKind {
    /// The numeric tag used in configuration files.
    pub fn code(self) -> i32 {
        match self {
            AuthKind::BasicAuth => 0,
            AuthKind::TokenQueryParam => 1,
            AuthKind::BasicAuthWithTokenAsPassword => 2,
            AuthKind::NoAuth => 3,
        }
    }
}

impl TryFrom<i32> for AuthKind {
    type Error = ApiError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(AuthKind::BasicAuth),
            1 => Ok(AuthKind::TokenQueryParam),
            2 => Ok(AuthKind::BasicAuthWithTokenAsPassword),
            3 => Ok(AuthKind::NoAuth),
            other => Err(ApiError::InvalidConfig(format!(
                "invalid auth configuration: auth kind {} found",
                other
            ))),
        }
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthKind::BasicAuth => "BasicAuth",
            AuthKind::TokenQueryParam => "TokenQueryParam",
            AuthKind::BasicAuthWithTokenAsPassword => "BasicAuthWithTokenAsPassword",
            AuthKind::NoAuth => "NoAuth",
        };
        f.write_str(name)
    }
}

/// Authentication credentials for Redmine.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthConfig {
    /// HTTP Basic with user and password.
    BasicAuth { user: String, password: String },
    /// API key appended as `key=<token>` to every request URL.
    TokenQueryParam { token: String },
    /// HTTP Basic with the API key as password.
    BasicAuthWithTokenAsPassword { user: String, token: String },
    /// No credentials at all.
    NoAuth,
}

/// A request body together with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl RequestBody {
    pub fn json(bytes: Vec<u8>) -> Self {
        Self {
            content_type: CONTENT_TYPE_JSON,
            bytes,
        }
    }

    pub fn octet_stream(bytes: Vec<u8>) -> Self {
        Self {
            content_type: CONTENT_TYPE_OCTET_STREAM,
            bytes,
        }
    }
}

impl AuthConfig {
    pub fn basic(user: impl Into<String>, password: impl Into<String>) -> Self {
        AuthConfig::BasicAuth {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        AuthConfig::TokenQueryParam {
            token: token.into(),
        }
    }

    pub fn basic_with_token(user: impl Into<String>, token: impl Into<String>) -> Self {
        AuthConfig::BasicAuthWithTokenAsPassword {
            user: user.into(),
            token: token.into(),
        }
    }

    /// Build and validate credentials from a numeric kind and raw fields.
    ///
    /// The kind is checked first, then the fields required by that kind.
    /// Fields the kind does not use are ignored.
    pub fn from_parts(kind: i32, user: &str, password: &str, token: &str) -> Result<Self> {
        let auth = match AuthKind::try_from(kind)? {
            AuthKind::BasicAuth => AuthConfig::basic(user, password),
            AuthKind::TokenQueryParam => AuthConfig::token(token),
            AuthKind::BasicAuthWithTokenAsPassword => AuthConfig::basic_with_token(user, token),
            AuthKind::NoAuth => AuthConfig::NoAuth,
        };
        auth.validate()?;
        Ok(auth)
    }

    pub fn kind(&self) -> AuthKind {
        match self {
            AuthConfig::BasicAuth { .. } => AuthKind::BasicAuth,
            AuthConfig::TokenQueryParam { .. } => AuthKind::TokenQueryParam,
            AuthConfig::BasicAuthWithTokenAsPassword { .. } => {
                AuthKind::BasicAuthWithTokenAsPassword
            }
            AuthConfig::NoAuth => AuthKind::NoAuth,
        }
    }

    /// Check that the fields required by this kind are present.
    ///
    /// The user is checked before the token.
    pub fn validate(&self) -> Result<()> {
        let (user, token) = match self {
            AuthConfig::BasicAuth { user, .. } => (Some(user), None),
            AuthConfig::TokenQueryParam { token } => (None, Some(token)),
            AuthConfig::BasicAuthWithTokenAsPassword { user, token } => (Some(user), Some(token)),
            AuthConfig::NoAuth => (None, None),
        };

        if user.is_some_and(|u| u.is_empty()) {
            return Err(self.invalid("user must not be empty"));
        }
        if token.is_some_and(|t| t.is_empty()) {
            return Err(self.invalid("API token must not be empty"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> ApiError {
        let kind = self.kind();
        ApiError::InvalidConfig(format!(
            "invalid auth configuration for type {} ({}): {}",
            kind.code(),
            kind,
            reason
        ))
    }

    /// Build an authenticated request.
    ///
    /// Only the URL (token kind) or the headers (Basic kinds) are touched;
    /// the method and body are passed through as given.
    pub fn build_request(
        &self,
        http: &HttpClient,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<Request> {
        let url = match self {
            AuthConfig::TokenQueryParam { token } => {
                add_query_parameter(url, TOKEN_PARAMETER, token)?
            }
            _ => url.to_string(),
        };

        let context = format!("{} request", method);
        let mut builder = http
            .request(method, url)
            .header(header::ACCEPT, CONTENT_TYPE_JSON);

        if let Some(value) = self.authorization_header() {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        if let Some(body) = body {
            builder = builder
                .header(header::CONTENT_TYPE, body.content_type)
                .body(body.bytes);
        }

        builder
            .build()
            .map_err(|source| ApiError::Request { context, source })
    }

    /// The `Authorization` header value for the Basic kinds.
    fn authorization_header(&self) -> Option<String> {
        match self {
            AuthConfig::BasicAuth { user, password } => Some(build_auth_header(user, password)),
            AuthConfig::BasicAuthWithTokenAsPassword { user, token } => {
                Some(build_auth_header(user, token))
            }
            AuthConfig::TokenQueryParam { .. } | AuthConfig::NoAuth => None,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::BasicAuth { user, .. } => f
                .debug_struct("BasicAuth")
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
            AuthConfig::TokenQueryParam { .. } => f
                .debug_struct("TokenQueryParam")
                .field("token", &"<redacted>")
                .finish(),
            AuthConfig::BasicAuthWithTokenAsPassword { user, .. } => f
                .debug_struct("BasicAuthWithTokenAsPassword")
                .field("user", user)
                .field("token", &"<redacted>")
                .finish(),
            AuthConfig::NoAuth => f.write_str("NoAuth"),
        }
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "user:secret" in Base64 and prepends "Basic ".
fn build_auth_header(user: &str, secret: &str) -> String {
    let credentials = format!("{}:{}", user, secret);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
