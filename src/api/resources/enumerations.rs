//! Enumerations and other lookup lists that Redmine does not paginate.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{
    CustomFieldDefinition, CustomFieldsPage, IdName, IssuePrioritiesPage, IssuePriority,
    IssueStatus, IssueStatusesPage, RolesPage, TimeEntryActivitiesPage, TimeEntryActivity,
    TrackersPage,
};

impl Client {
    #[instrument(skip(self))]
    pub fn issue_statuses(&self) -> Result<Vec<IssueStatus>> {
        self.list::<IssueStatusesPage>("/issue_statuses.json", "issue statuses")
    }

    #[instrument(skip(self))]
    pub fn issue_priorities(&self) -> Result<Vec<IssuePriority>> {
        self.list::<IssuePrioritiesPage>("/enumerations/issue_priorities.json", "issue priorities")
    }

    #[instrument(skip(self))]
    pub fn time_entry_activities(&self) -> Result<Vec<TimeEntryActivity>> {
        self.list::<TimeEntryActivitiesPage>(
            "/enumerations/time_entry_activities.json",
            "time entry activities",
        )
    }

    #[instrument(skip(self))]
    pub fn trackers(&self) -> Result<Vec<IdName>> {
        self.list::<TrackersPage>("/trackers.json", "trackers")
    }

    #[instrument(skip(self))]
    pub fn roles(&self) -> Result<Vec<IdName>> {
        self.list::<RolesPage>("/roles.json", "roles")
    }

    /// Custom field definitions. Requires administrator privileges.
    #[instrument(skip(self))]
    pub fn custom_fields(&self) -> Result<Vec<CustomFieldDefinition>> {
        self.list::<CustomFieldsPage>("/custom_fields.json", "custom fields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientBuilder;
    use crate::api::error::ApiError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> Client {
        ClientBuilder::new()
            .endpoint(uri)
            .auth_token("tok")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_issue_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/issue_statuses.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "issue_statuses": [
                    {"id": 1, "name": "New", "is_closed": false},
                    {"id": 5, "name": "Closed", "is_closed": true}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let statuses = tokio::task::spawn_blocking(move || client(&uri).issue_statuses())
            .await
            .unwrap()
            .unwrap();

        let closed: Vec<&str> = statuses
            .iter()
            .filter(|s| s.is_closed)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(closed, vec!["Closed"]);
    }

    #[tokio::test]
    async fn test_custom_fields_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/custom_fields.json"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = tokio::task::spawn_blocking(move || client(&uri).custom_fields())
            .await
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, ApiError::Remote { .. }));
        assert_eq!(err.to_string(), "Forbidden");
    }
}
