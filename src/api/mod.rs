//! Redmine API client and types.
//!
//! This module provides the interface for communicating with the Redmine
//! REST API (JSON flavour).

mod auth;
mod client;
pub mod error;
mod pagination;
mod query;
mod resources;
pub mod types;

pub use auth::{AuthConfig, AuthKind, RequestBody, CONTENT_TYPE_JSON, CONTENT_TYPE_OCTET_STREAM};
pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Result};
pub use pagination::Pagination;
pub use query::{add_query_parameter, add_query_parameters, concat_parameters, Filter};
pub use resources::{
    IssueFilter, TimeEntryFilter, UserByIdFilter, UserInclude, UserStatus, UsersFilter,
};
pub use types::{
    CustomField, CustomFieldDefinition, EnabledModule, IdName, IdRef, Issue, IssueCategory,
    IssuePriority, IssueRelation, IssueStatus, Journal, JournalDetail, Membership, NewMembership,
    News, Project, ProjectInclude, TimeEntry, TimeEntryActivity, Upload, User, Version, WikiPage,
    WikiParent,
};
