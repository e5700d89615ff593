//! `rmine project` commands.

use std::io::Write;

use super::{list_line, or_empty, Session};
use crate::api::Project;
use crate::cli::ProjectAction;
use crate::editor::{self, ProjectText};
use crate::error::Result;

pub(super) fn execute(session: &Session<'_>, action: ProjectAction, out: &mut dyn Write) -> Result<()> {
    match action {
        ProjectAction::Add => {
            let text = editor::project_from_editor(session.editor, "new-project", None)?;
            create(session, text, out)
        }
        ProjectAction::Create {
            name,
            identifier,
            description,
        } => {
            let text = ProjectText {
                name,
                identifier,
                description: description.unwrap_or_default(),
            };
            create(session, text, out)
        }
        ProjectAction::Update { id } => update(session, id),
        ProjectAction::Show { id } => {
            let project = session.client.project(id)?;
            write!(out, "{}", report(&project))?;
            Ok(())
        }
        ProjectAction::Delete { id } => Ok(session.client.delete_project(id)?),
        ProjectAction::List => {
            for project in session.client.projects()? {
                list_line(out, project.id, &project.name)?;
            }
            Ok(())
        }
    }
}

fn create(session: &Session<'_>, text: ProjectText, out: &mut dyn Write) -> Result<()> {
    let project = Project {
        name: text.name,
        identifier: text.identifier,
        description: text.description,
        ..Default::default()
    };
    let created = session.client.create_project(&project)?;
    list_line(out, created.id, &created.name)
}

fn update(session: &Session<'_>, id: u32) -> Result<()> {
    let mut project = session.client.project(id)?;
    let current = ProjectText {
        name: project.name.clone(),
        identifier: project.identifier.clone(),
        description: project.description.clone(),
    };

    let edited = editor::project_from_editor(session.editor, &format!("project-{}", id), Some(&current))?;
    project.name = edited.name;
    project.identifier = edited.identifier;
    project.description = edited.description;

    Ok(session.client.update_project(&project)?)
}

fn report(project: &Project) -> String {
    format!(
        "Id: {}\nName: {}\nIdentifier: {}\nCreatedOn: {}\nUpdatedOn: {}\n\n{}\n",
        project.id,
        project.name,
        project.identifier,
        or_empty(&project.created_on),
        or_empty(&project.updated_on),
        project.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::commands::testing::run_command;
    use crate::editor::tests::ScriptedEditor;
    use crate::editor::EditorError;
    use crate::error::AppError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_report_layout() {
        let project = Project {
            id: 2,
            name: "Website".to_string(),
            identifier: "web".to_string(),
            description: "Public site".to_string(),
            created_on: Some("2024-02-01T00:00:00Z".to_string()),
            ..Default::default()
        };

        assert_eq!(
            report(&project),
            "Id: 2\nName: Website\nIdentifier: web\nCreatedOn: 2024-02-01T00:00:00Z\nUpdatedOn: \n\nPublic site\n"
        );
    }

    #[tokio::test]
    async fn test_add_project_with_editor() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects.json"))
            .and(body_json(json!({
                "project": {
                    "name": "Website",
                    "identifier": "web",
                    "description": "Public site",
                    "homepage": ""
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "project": {"id": 8, "name": "Website", "identifier": "web"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, output) = tokio::task::spawn_blocking(move || {
            let editor = ScriptedEditor::new("Website\nweb\nPublic site\n");
            run_command(&uri, &editor, Command::Project(ProjectAction::Add))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
        assert_eq!(output, "   8: Website\n");
    }

    #[tokio::test]
    async fn test_add_project_single_line_is_invalid() {
        let server = MockServer::start().await;

        let uri = server.uri();
        let (result, _) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new("Website"), Command::Project(ProjectAction::Add))
        })
        .await
        .unwrap();

        assert!(matches!(
            result,
            Err(AppError::Editor(EditorError::InvalidFormat(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_project() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/8.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "project": {"id": 8, "name": "Website", "identifier": "web", "description": "Old"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/projects/8.json"))
            .and(body_json(json!({
                "project": {"name": "Website", "identifier": "web", "description": "New", "homepage": ""}
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, _) = tokio::task::spawn_blocking(move || {
            let editor = ScriptedEditor::new("Website\nweb\nNew\n");
            run_command(&uri, &editor, Command::Project(ProjectAction::Update { id: 8 }))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_projects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "projects": [{"id": 1, "name": "Core"}, {"id": 8, "name": "Website"}],
                "total_count": 2
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, output) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new(""), Command::Project(ProjectAction::List))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
        assert_eq!(output, "   1: Core\n   8: Website\n");
    }
}
