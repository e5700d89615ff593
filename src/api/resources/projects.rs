//! Project operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{Project, ProjectEnvelope, ProjectInclude, ProjectsPage};

fn include_params(includes: &[ProjectInclude]) -> Vec<(String, String)> {
    if includes.is_empty() {
        Vec::new()
    } else {
        vec![("include".to_string(), ProjectInclude::join(includes))]
    }
}

impl Client {
    #[instrument(skip(self))]
    pub fn project(&self, id: u32) -> Result<Project> {
        self.project_with_includes(id, &[])
    }

    /// Get one project along with the requested optional data.
    ///
    /// Repeated includes are passed on; Redmine ignores duplicates.
    #[instrument(skip(self))]
    pub fn project_with_includes(&self, id: u32, includes: &[ProjectInclude]) -> Result<Project> {
        let envelope: ProjectEnvelope<Project> = self.get(
            &format!("/projects/{}.json", id),
            &include_params(includes),
            &format!("project {}", id),
        )?;
        Ok(envelope.project)
    }

    #[instrument(skip(self))]
    pub fn projects(&self) -> Result<Vec<Project>> {
        self.projects_with_includes(&[])
    }

    #[instrument(skip(self))]
    pub fn projects_with_includes(&self, includes: &[ProjectInclude]) -> Result<Vec<Project>> {
        self.drain::<ProjectsPage>("/projects.json", &include_params(includes), "projects")
    }

    #[instrument(skip(self, project), fields(identifier = %project.identifier))]
    pub fn create_project(&self, project: &Project) -> Result<Project> {
        let payload = ProjectEnvelope { project };
        let envelope: ProjectEnvelope<Project> =
            self.create("/projects.json", &payload, "project")?;
        Ok(envelope.project)
    }

    #[instrument(skip(self, project), fields(id = project.id))]
    pub fn update_project(&self, project: &Project) -> Result<()> {
        let payload = ProjectEnvelope { project };
        self.update(
            &format!("/projects/{}.json", project.id),
            &payload,
            &format!("project {}", project.id),
        )
    }

    #[instrument(skip(self))]
    pub fn delete_project(&self, id: u32) -> Result<()> {
        self.delete(&format!("/projects/{}.json", id), &format!("project {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientBuilder;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> Client {
        ClientBuilder::new()
            .endpoint(uri)
            .auth_basic("admin", "admin")
            .build()
            .unwrap()
    }

    #[test]
    fn test_include_params() {
        assert!(include_params(&[]).is_empty());
        assert_eq!(
            include_params(&[ProjectInclude::Trackers, ProjectInclude::EnabledModules]),
            vec![("include".to_string(), "trackers,enabled_modules".to_string())]
        );
    }

    #[tokio::test]
    async fn test_project_with_includes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/2.json"))
            .and(query_param("include", "trackers,issue_categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "project": {
                    "id": 2,
                    "name": "Website",
                    "identifier": "web",
                    "description": null,
                    "trackers": [{"id": 1, "name": "Bug"}],
                    "issue_categories": []
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let project = tokio::task::spawn_blocking(move || {
            client(&uri).project_with_includes(
                2,
                &[ProjectInclude::Trackers, ProjectInclude::IssueCategories],
            )
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(project.identifier, "web");
        assert_eq!(project.description, "");
        assert_eq!(project.trackers.len(), 1);
    }

    #[tokio::test]
    async fn test_create_project() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects.json"))
            .and(body_json(json!({
                "project": {
                    "name": "name",
                    "identifier": "ident",
                    "description": "",
                    "homepage": ""
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "project": {"id": 5, "name": "name", "identifier": "ident"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let created = tokio::task::spawn_blocking(move || {
            let project = Project {
                name: "name".to_string(),
                identifier: "ident".to_string(),
                ..Default::default()
            };
            client(&uri).create_project(&project)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_create_project_conflict() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects.json"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "errors": ["Identifier has already been taken"]
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = tokio::task::spawn_blocking(move || {
            let project = Project {
                name: "name".to_string(),
                identifier: "ident".to_string(),
                ..Default::default()
            };
            client(&uri).create_project(&project)
        })
        .await
        .unwrap()
        .unwrap_err();

        assert_eq!(err.to_string(), "Identifier has already been taken");
    }
}
