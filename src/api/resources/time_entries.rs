//! Time entry operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::query::Filter;
use crate::api::types::{TimeEntriesPage, TimeEntry, TimeEntryEnvelope, TimeEntryPayload};

/// Filter for [`Client::time_entries_with_filter`].
///
/// Dates use Redmine's `YYYY-MM-DD` format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    filter: Filter,
}

impl TimeEntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project id or identifier.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.filter.add_pair("project_id", project);
        self
    }

    /// User id, or `me`.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.filter.add_pair("user_id", user);
        self
    }

    pub fn issue(mut self, issue_id: u32) -> Self {
        self.filter.add_pair("issue_id", issue_id.to_string());
        self
    }

    pub fn activity(mut self, activity_id: u32) -> Self {
        self.filter.add_pair("activity_id", activity_id.to_string());
        self
    }

    /// Only entries spent on or after `date`.
    pub fn spent_from(mut self, date: impl Into<String>) -> Self {
        self.filter.add_pair("from", date);
        self
    }

    /// Only entries spent on or before `date`.
    pub fn spent_to(mut self, date: impl Into<String>) -> Self {
        self.filter.add_pair("to", date);
        self
    }

    /// Any other supported filter.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.add_pair(key, value);
        self
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        self.filter.to_params()
    }
}

impl From<Filter> for TimeEntryFilter {
    fn from(filter: Filter) -> Self {
        Self { filter }
    }
}

impl Client {
    /// Time logged on a project.
    #[instrument(skip(self))]
    pub fn time_entries(&self, project_id: u32) -> Result<Vec<TimeEntry>> {
        self.drain::<TimeEntriesPage>(
            &format!("/projects/{}/time_entries.json", project_id),
            &[],
            &format!("time entries of project {}", project_id),
        )
    }

    #[instrument(skip(self))]
    pub fn time_entries_with_filter(&self, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>> {
        self.drain::<TimeEntriesPage>("/time_entries.json", &filter.to_params(), "time entries")
    }

    #[instrument(skip(self))]
    pub fn time_entry(&self, id: u32) -> Result<TimeEntry> {
        let envelope: TimeEntryEnvelope<TimeEntry> = self.get(
            &format!("/time_entries/{}.json", id),
            &[],
            &format!("time entry {}", id),
        )?;
        Ok(envelope.time_entry)
    }

    /// Log time on the issue or project referenced by `entry`.
    #[instrument(skip(self, entry), fields(hours = entry.hours))]
    pub fn create_time_entry(&self, entry: &TimeEntry) -> Result<TimeEntry> {
        let payload = TimeEntryEnvelope {
            time_entry: TimeEntryPayload::from(entry),
        };
        let envelope: TimeEntryEnvelope<TimeEntry> =
            self.create("/time_entries.json", &payload, "time entry")?;
        Ok(envelope.time_entry)
    }

    #[instrument(skip(self, entry), fields(id = entry.id))]
    pub fn update_time_entry(&self, entry: &TimeEntry) -> Result<()> {
        let payload = TimeEntryEnvelope {
            time_entry: TimeEntryPayload::from(entry),
        };
        self.update(
            &format!("/time_entries/{}.json", entry.id),
            &payload,
            &format!("time entry {}", entry.id),
        )
    }

    #[instrument(skip(self))]
    pub fn delete_time_entry(&self, id: u32) -> Result<()> {
        self.delete(
            &format!("/time_entries/{}.json", id),
            &format!("time entry {}", id),
        )
    }
}
