//! Redmine API request and response types.
//!
//! These types mirror the JSON objects of the Redmine REST API. Related
//! entities are carried as [`IdName`] reference stubs, never as full records.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ApiError;

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_empty_slice<T>(value: &&[T]) -> bool {
    value.is_empty()
}

/// A reference to a related entity: its id and display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdName {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A reference carrying only an id (e.g. a parent issue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: u32,
}

/// The error body Redmine sends with failing requests.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A list response that may be split into pages by the server.
pub(crate) trait ListEnvelope {
    type Item;

    /// The total number of items across all pages, when the server reports it.
    fn total_count(&self) -> Option<u32>;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Declare a single-key envelope such as `{"issue": {...}}`.
macro_rules! envelope {
    ($name:ident, $key:ident) => {
        #[derive(Debug, Serialize, Deserialize)]
        pub(crate) struct $name<T> {
            pub $key: T,
        }
    };
}

/// Declare a list envelope such as `{"issues": [...], "total_count": 3}`.
macro_rules! list_envelope {
    ($name:ident, $key:ident, $item:ty) => {
        #[derive(Debug, Deserialize)]
        pub(crate) struct $name {
            #[serde(default)]
            pub $key: Vec<$item>,
            #[serde(default)]
            pub total_count: Option<u32>,
        }

        impl ListEnvelope for $name {
            type Item = $item;

            fn total_count(&self) -> Option<u32> {
                self.total_count
            }

            fn into_items(self) -> Vec<$item> {
                self.$key
            }
        }
    };
}

envelope!(IssueEnvelope, issue);
envelope!(ProjectEnvelope, project);
envelope!(UserEnvelope, user);
envelope!(MembershipEnvelope, membership);
envelope!(VersionEnvelope, version);
envelope!(WikiPageEnvelope, wiki_page);
envelope!(TimeEntryEnvelope, time_entry);
envelope!(IssueCategoryEnvelope, issue_category);
envelope!(RelationEnvelope, relation);
envelope!(UploadEnvelope, upload);

list_envelope!(IssuesPage, issues, Issue);
list_envelope!(ProjectsPage, projects, Project);
list_envelope!(UsersPage, users, User);
list_envelope!(MembershipsPage, memberships, Membership);
list_envelope!(VersionsPage, versions, Version);
list_envelope!(WikiPagesPage, wiki_pages, WikiPage);
list_envelope!(TimeEntriesPage, time_entries, TimeEntry);
list_envelope!(IssueCategoriesPage, issue_categories, IssueCategory);
list_envelope!(RelationsPage, relations, IssueRelation);
list_envelope!(NewsPage, news, News);
list_envelope!(IssueStatusesPage, issue_statuses, IssueStatus);
list_envelope!(IssuePrioritiesPage, issue_priorities, IssuePriority);
list_envelope!(TimeEntryActivitiesPage, time_entry_activities, TimeEntryActivity);
list_envelope!(TrackersPage, trackers, IdName);
list_envelope!(RolesPage, roles, IdName);
list_envelope!(CustomFieldsPage, custom_fields, CustomFieldDefinition);

/// A custom field value attached to an issue, user or time entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u32,
    #[serde(default, skip_serializing)]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub multiple: bool,
    #[serde(default)]
    pub value: serde_json::Value,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A custom field definition, as listed by `GET /custom_fields.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomFieldDefinition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub customized_type: String,
    #[serde(default)]
    pub field_format: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// One change recorded in a journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JournalDetail {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
}

/// An issue journal entry (notes and field changes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Journal {
    pub id: u32,
    #[serde(default)]
    pub user: Option<IdName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub details: Vec<JournalDetail>,
}

/// A Redmine issue.
///
/// Returned by `GET /issues/{id}.json` or as part of `GET /issues.json`.
/// The `*_id` fields are only used when sending an issue; when reading, the
/// server fills the nested references instead and the ids stay `0`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub project_id: u32,
    #[serde(default)]
    pub project: Option<IdName>,
    #[serde(default)]
    pub tracker_id: u32,
    #[serde(default)]
    pub tracker: Option<IdName>,
    #[serde(default, rename = "parent_issue_id")]
    pub parent_id: u32,
    #[serde(default)]
    pub parent: Option<IdRef>,
    #[serde(default)]
    pub status_id: u32,
    #[serde(default)]
    pub status: Option<IdName>,
    #[serde(default)]
    pub priority_id: u32,
    #[serde(default)]
    pub priority: Option<IdName>,
    #[serde(default)]
    pub author: Option<IdName>,
    #[serde(default)]
    pub fixed_version_id: u32,
    #[serde(default)]
    pub fixed_version: Option<IdName>,
    #[serde(default)]
    pub assigned_to_id: u32,
    #[serde(default)]
    pub assigned_to: Option<IdName>,
    #[serde(default)]
    pub category_id: u32,
    #[serde(default)]
    pub category: Option<IdName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub updated_on: Option<String>,
    #[serde(default)]
    pub closed_on: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub done_ratio: f32,
    #[serde(default)]
    pub estimated_hours: Option<f32>,
    #[serde(default)]
    pub spent_hours: Option<f32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploads: Vec<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub journals: Vec<Journal>,
}

impl Issue {
    /// Display title: `"<tracker> #<id>: <subject>"`.
    pub fn title(&self) -> String {
        match &self.tracker {
            Some(tracker) => format!("{} #{}: {}", tracker.name, self.id, self.subject),
            None => format!("#{}: {}", self.id, self.subject),
        }
    }

    pub fn project_name(&self) -> &str {
        name_or_empty(&self.project)
    }

    pub fn tracker_name(&self) -> &str {
        name_or_empty(&self.tracker)
    }

    pub fn status_name(&self) -> &str {
        name_or_empty(&self.status)
    }

    pub fn priority_name(&self) -> &str {
        name_or_empty(&self.priority)
    }

    pub fn author_name(&self) -> &str {
        name_or_empty(&self.author)
    }

    pub fn assignee_name(&self) -> &str {
        name_or_empty(&self.assigned_to)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

fn name_or_empty(reference: &Option<IdName>) -> &str {
    reference.as_ref().map(|r| r.name.as_str()).unwrap_or("")
}

/// Optional data that can be requested along with projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectInclude {
    /// Since Redmine 2.6.0.
    Trackers,
    /// Since Redmine 2.6.0.
    IssueCategories,
    /// Since Redmine 2.6.0.
    EnabledModules,
    /// Since Redmine 3.4.0.
    TimeEntryActivities,
}

impl ProjectInclude {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectInclude::Trackers => "trackers",
            ProjectInclude::IssueCategories => "issue_categories",
            ProjectInclude::EnabledModules => "enabled_modules",
            ProjectInclude::TimeEntryActivities => "time_entry_activities",
        }
    }

    /// The `include` parameter value: names joined by commas, in order.
    pub fn join(includes: &[ProjectInclude]) -> String {
        includes
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for ProjectInclude {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trackers" => Ok(ProjectInclude::Trackers),
            "issue_categories" => Ok(ProjectInclude::IssueCategories),
            "enabled_modules" => Ok(ProjectInclude::EnabledModules),
            "time_entry_activities" => Ok(ProjectInclude::TimeEntryActivities),
            other => Err(ApiError::UnsupportedField(other.to_string())),
        }
    }
}

/// A module enabled for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnabledModule {
    #[serde(default)]
    pub id: u32,
    pub name: String,
}

/// A Redmine project.
///
/// Fields that Redmine computes are never sent back on create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing)]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Unique, lowercase latin characters, digits, `-` and `_`.
    /// Cannot be changed after creation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    /// Left unset to use the server default on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(default, skip_serializing)]
    pub parent: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit_members: Option<bool>,
    #[serde(default, skip_serializing)]
    pub status: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracker_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_module_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue_custom_field_ids: Vec<u32>,
    #[serde(default, skip_serializing)]
    pub trackers: Vec<IdName>,
    #[serde(default, skip_serializing)]
    pub issue_categories: Vec<IdName>,
    #[serde(default, skip_serializing)]
    pub enabled_modules: Vec<EnabledModule>,
    #[serde(default, skip_serializing)]
    pub time_entry_activities: Vec<IdName>,
    #[serde(default, skip_serializing)]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing)]
    pub updated_on: Option<String>,
}

/// A Redmine user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mail: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub last_login_on: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub memberships: Vec<Membership>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<IdName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomField>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// A project membership of a user or group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Membership {
    pub id: u32,
    #[serde(default)]
    pub project: IdName,
    #[serde(default)]
    pub user: Option<IdName>,
    #[serde(default)]
    pub group: Option<IdName>,
    #[serde(default)]
    pub roles: Vec<IdName>,
}

impl Membership {
    /// The name of the member, user or group.
    pub fn principal_name(&self) -> &str {
        self.user
            .as_ref()
            .or(self.group.as_ref())
            .map(|p| p.name.as_str())
            .unwrap_or("")
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}

/// The payload for adding a member to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewMembership {
    pub user_id: u32,
    pub role_ids: Vec<u32>,
}

/// A project version (milestone).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, skip_serializing)]
    pub id: u32,
    #[serde(default, skip_serializing)]
    pub project: Option<IdName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// `open`, `locked` or `closed`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing)]
    pub updated_on: Option<String>,
}

/// The parent of a wiki page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiParent {
    pub title: String,
}

/// A wiki page. Pages from the index carry no text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    #[serde(default, skip_serializing)]
    pub title: String,
    #[serde(default, skip_serializing)]
    pub parent: Option<WikiParent>,
    /// Sets the parent page on create/update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Present on pages that exist; sent back to detect edit conflicts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing)]
    pub author: Option<IdName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: String,
    #[serde(default, skip_serializing)]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing)]
    pub updated_on: Option<String>,
}

/// Logged time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub project: IdName,
    #[serde(default)]
    pub issue: Option<IdRef>,
    #[serde(default)]
    pub user: IdName,
    #[serde(default)]
    pub activity: IdName,
    #[serde(default)]
    pub hours: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: String,
    #[serde(default)]
    pub spent_on: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub updated_on: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomField>,
}

/// A time tracking activity (e.g. "Design", "Development").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeEntryActivity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub active: Option<bool>,
}

/// A news item of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct News {
    pub id: u32,
    #[serde(default)]
    pub project: IdName,
    #[serde(default)]
    pub author: Option<IdName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_on: Option<String>,
}

/// An issue status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueStatus {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_closed: bool,
}

/// An issue priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssuePriority {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub active: Option<bool>,
}

/// An issue category of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCategory {
    #[serde(default, skip_serializing)]
    pub id: u32,
    #[serde(default, skip_serializing)]
    pub project: IdName,
    pub name: String,
    #[serde(default, skip_serializing)]
    pub assigned_to: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u32>,
}

/// A relation between two issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRelation {
    #[serde(default, skip_serializing)]
    pub id: u32,
    #[serde(default, skip_serializing)]
    pub issue_id: u32,
    pub issue_to_id: u32,
    /// `relates`, `duplicates`, `blocks`, `precedes`, ...
    pub relation_type: String,
    /// Days between `precedes`/`follows` issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i32>,
}

/// An uploaded file, referenced by token when attaching it to an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    #[serde(default, skip_serializing)]
    pub id: Option<u32>,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// The issue fields Redmine accepts on create and update.
///
/// The parent is set when a parent id is given and reset
/// (`"parent_issue_id": ""`) when the issue has no parent reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct IssuePayload<'a> {
    #[serde(skip_serializing_if = "is_zero")]
    pub project_id: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub tracker_id: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub status_id: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority_id: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub category_id: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub fixed_version_id: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub assigned_to_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_issue_id: Option<String>,
    pub subject: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub notes: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    pub is_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
    pub done_ratio: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f32>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    pub custom_fields: &'a [CustomField],
    #[serde(skip_serializing_if = "is_empty_slice")]
    pub uploads: &'a [Upload],
}

impl<'a> From<&'a Issue> for IssuePayload<'a> {
    fn from(issue: &'a Issue) -> Self {
        let parent_issue_id = if issue.parent_id > 0 {
            Some(issue.parent_id.to_string())
        } else if issue.parent.is_none() {
            Some(String::new())
        } else {
            None
        };

        Self {
            project_id: issue.project_id,
            tracker_id: issue.tracker_id,
            status_id: issue.status_id,
            priority_id: issue.priority_id,
            category_id: issue.category_id,
            fixed_version_id: issue.fixed_version_id,
            assigned_to_id: issue.assigned_to_id,
            parent_issue_id,
            subject: &issue.subject,
            description: &issue.description,
            notes: &issue.notes,
            is_private: issue.is_private,
            start_date: issue.start_date.as_deref(),
            due_date: issue.due_date.as_deref(),
            done_ratio: issue.done_ratio,
            estimated_hours: issue.estimated_hours,
            custom_fields: &issue.custom_fields,
            uploads: &issue.uploads,
        }
    }
}

/// The time entry fields Redmine accepts on create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct TimeEntryPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<u32>,
    #[serde(skip_serializing_if = "is_zero")]
    pub project_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_on: Option<&'a str>,
    pub hours: f32,
    #[serde(skip_serializing_if = "is_zero")]
    pub activity_id: u32,
    pub comments: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    pub user_id: u32,
    #[serde(skip_serializing_if = "is_empty_slice")]
    pub custom_fields: &'a [CustomField],
}

impl<'a> From<&'a TimeEntry> for TimeEntryPayload<'a> {
    fn from(entry: &'a TimeEntry) -> Self {
        Self {
            issue_id: entry.issue.map(|i| i.id),
            project_id: entry.project.id,
            spent_on: entry.spent_on.as_deref(),
            hours: entry.hours,
            activity_id: entry.activity.id,
            comments: &entry.comments,
            user_id: entry.user.id,
            custom_fields: &entry.custom_fields,
        }
    }
}
