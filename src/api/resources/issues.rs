//! Issue operations.

use tracing::{debug, instrument};

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::query::Filter;
use crate::api::types::{Issue, IssueEnvelope, IssuePayload, IssuesPage};

/// Criteria for [`Client::issues_by_filter`].
///
/// Values are passed through as Redmine expects them, so `status_id` may be
/// `open`, `closed`, `*` or an id, and `updated_on` may carry an operator
/// such as `>=2021-01-01`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub project_id: Option<String>,
    pub subproject_id: Option<String>,
    pub tracker_id: Option<String>,
    pub status_id: Option<String>,
    pub assigned_to_id: Option<String>,
    pub updated_on: Option<String>,
    pub extra: Filter,
}

impl IssueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(mut self, value: impl Into<String>) -> Self {
        self.project_id = Some(value.into());
        self
    }

    pub fn subproject_id(mut self, value: impl Into<String>) -> Self {
        self.subproject_id = Some(value.into());
        self
    }

    pub fn tracker_id(mut self, value: impl Into<String>) -> Self {
        self.tracker_id = Some(value.into());
        self
    }

    pub fn status_id(mut self, value: impl Into<String>) -> Self {
        self.status_id = Some(value.into());
        self
    }

    pub fn assigned_to_id(mut self, value: impl Into<String>) -> Self {
        self.assigned_to_id = Some(value.into());
        self
    }

    pub fn updated_on(mut self, value: impl Into<String>) -> Self {
        self.updated_on = Some(value.into());
        self
    }

    /// Any other issue filter, e.g. a custom field `cf_1`.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.add_pair(key, value);
        self
    }

    /// The filter as query parameters. Unset and empty criteria are left out.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let named = [
            ("project_id", &self.project_id),
            ("subproject_id", &self.subproject_id),
            ("tracker_id", &self.tracker_id),
            ("status_id", &self.status_id),
            ("assigned_to_id", &self.assigned_to_id),
            ("updated_on", &self.updated_on),
        ];

        let mut params: Vec<(String, String)> = named
            .iter()
            .filter_map(|(key, value)| match value {
                Some(v) if !v.is_empty() => Some((key.to_string(), v.clone())),
                _ => None,
            })
            .collect();
        params.extend(self.extra.to_params());
        params
    }
}

impl Client {
    /// Get one issue.
    #[instrument(skip(self))]
    pub fn issue(&self, id: u32) -> Result<Issue> {
        self.issue_with_args(id, &Filter::new())
    }

    /// Get one issue with extra parameters, e.g. `include=journals`.
    #[instrument(skip(self))]
    pub fn issue_with_args(&self, id: u32, args: &Filter) -> Result<Issue> {
        let envelope: IssueEnvelope<Issue> = self.get(
            &format!("/issues/{}.json", id),
            &args.to_params(),
            &format!("issue {}", id),
        )?;
        Ok(envelope.issue)
    }

    /// All issues visible to the user (Redmine defaults to open issues).
    #[instrument(skip(self))]
    pub fn issues(&self) -> Result<Vec<Issue>> {
        self.drain::<IssuesPage>("/issues.json", &[], "issues")
    }

    /// Issues of one project.
    #[instrument(skip(self))]
    pub fn issues_of(&self, project_id: u32) -> Result<Vec<Issue>> {
        let params = vec![("project_id".to_string(), project_id.to_string())];
        self.drain::<IssuesPage>("/issues.json", &params, &format!("issues of project {}", project_id))
    }

    /// Issues matched by a saved query.
    #[instrument(skip(self))]
    pub fn issues_by_query(&self, query_id: u32) -> Result<Vec<Issue>> {
        let params = vec![("query_id".to_string(), query_id.to_string())];
        self.drain::<IssuesPage>("/issues.json", &params, &format!("issues of query {}", query_id))
    }

    #[instrument(skip(self))]
    pub fn issues_by_filter(&self, filter: &IssueFilter) -> Result<Vec<Issue>> {
        let issues = self.drain::<IssuesPage>("/issues.json", &filter.to_params(), "issues")?;
        debug!(count = issues.len(), "Filtered issues");
        Ok(issues)
    }

    /// Create an issue and return it as stored by Redmine.
    #[instrument(skip(self, issue), fields(subject = %issue.subject))]
    pub fn create_issue(&self, issue: &Issue) -> Result<Issue> {
        let payload = IssueEnvelope {
            issue: IssuePayload::from(issue),
        };
        let envelope: IssueEnvelope<Issue> = self.create("/issues.json", &payload, "issue")?;
        Ok(envelope.issue)
    }

    /// Update an issue. Set `notes` to add a journal entry.
    #[instrument(skip(self, issue), fields(id = issue.id))]
    pub fn update_issue(&self, issue: &Issue) -> Result<()> {
        let payload = IssueEnvelope {
            issue: IssuePayload::from(issue),
        };
        self.update(
            &format!("/issues/{}.json", issue.id),
            &payload,
            &format!("issue {}", issue.id),
        )
    }

    #[instrument(skip(self))]
    pub fn delete_issue(&self, id: u32) -> Result<()> {
        self.delete(&format!("/issues/{}.json", id), &format!("issue {}", id))
    }
}
