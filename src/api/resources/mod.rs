//! Typed Redmine resource operations.
//!
//! Each submodule adds methods to [`Client`](super::Client) for one
//! resource. They only build paths and parameters; sending, status
//! classification and decoding live in the client pipeline.

mod categories;
mod enumerations;
mod issues;
mod memberships;
mod news;
mod projects;
mod relations;
mod time_entries;
mod uploads;
mod users;
mod versions;
mod wiki;

pub use issues::IssueFilter;
pub use time_entries::TimeEntryFilter;
pub use users::{UserByIdFilter, UserInclude, UserStatus, UsersFilter};
