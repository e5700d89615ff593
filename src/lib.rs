//! A blocking client for the Redmine REST API, plus the pieces of the
//! `rmine` command-line tool.
//!
//! ```no_run
//! use redmine_client::api::ClientBuilder;
//!
//! let client = ClientBuilder::new()
//!     .endpoint("https://redmine.example.com")
//!     .auth_token("0123456789abcdef")
//!     .result_limit(50)
//!     .build()?;
//!
//! for issue in client.issues_of(1)? {
//!     println!("{}", issue.title());
//! }
//! # Ok::<(), redmine_client::api::ApiError>(())
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
