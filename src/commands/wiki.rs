//! `rmine wiki` commands, on the wiki of the configured project.

use std::io::Write;

use tracing::{debug, info};

use super::{or_empty, Session};
use crate::api::WikiPage;
use crate::cli::WikiAction;
use crate::editor::{self, EditorError};
use crate::error::Result;

pub(super) fn execute(session: &Session<'_>, action: WikiAction, out: &mut dyn Write) -> Result<()> {
    let project = session.settings.project;
    match action {
        WikiAction::Show { title } => {
            let page = session.client.wiki_page(project, &title)?;
            write!(out, "{}", report(&page))?;
            Ok(())
        }
        WikiAction::List => {
            for page in session.client.wiki_pages(project)? {
                writeln!(out, "{}", page.title)?;
            }
            Ok(())
        }
        WikiAction::Edit { title } => edit(session, &title),
    }
}

/// Edit a page, creating it when it does not exist yet.
///
/// Saving the text unchanged leaves the wiki alone.
fn edit(session: &Session<'_>, title: &str) -> Result<()> {
    let project = session.settings.project;
    let mut page = match session.client.wiki_page(project, title) {
        Ok(page) => page,
        Err(e) if e.is_not_found() => {
            debug!(title, "Wiki page does not exist yet");
            WikiPage {
                title: title.to_string(),
                ..Default::default()
            }
        }
        Err(e) => return Err(e.into()),
    };

    let text = match editor::wiki_from_editor(session.editor, &format!("wiki-{}", title), &page.text) {
        Ok(text) => text,
        Err(EditorError::Canceled) => {
            info!(title, "Wiki page unchanged");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    page.text = text;

    if page.version.is_none() {
        session.client.create_wiki_page(project, &page)?;
    } else {
        session.client.update_wiki_page(project, &page)?;
    }
    Ok(())
}

fn report(page: &WikiPage) -> String {
    let author = page.author.as_ref().map(|a| a.name.as_str()).unwrap_or("");
    let version = page.version.map(|v| v.to_string()).unwrap_or_default();
    format!(
        "Title: {}\nAuthor: {}\nVersion: {}\nCreatedOn: {}\nUpdatedOn: {}\nComments: {}\n\n{}\n",
        page.title,
        author,
        version,
        or_empty(&page.created_on),
        or_empty(&page.updated_on),
        page.comments,
        page.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::commands::testing::run_command;
    use crate::editor::tests::ScriptedEditor;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn edit(title: &str) -> Command {
        Command::Wiki(WikiAction::Edit {
            title: title.to_string(),
        })
    }

    #[tokio::test]
    async fn test_show_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/1/wiki/Home.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wiki_page": {
                    "title": "Home",
                    "text": "h1. Welcome",
                    "version": 4,
                    "author": {"id": 1, "name": "Admin"},
                    "comments": "typo",
                    "created_on": "2024-01-01T00:00:00Z",
                    "updated_on": "2024-02-01T00:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, output) = tokio::task::spawn_blocking(move || {
            run_command(
                &uri,
                &ScriptedEditor::new(""),
                Command::Wiki(WikiAction::Show {
                    title: "Home".to_string(),
                }),
            )
        })
        .await
        .unwrap();

        assert!(result.is_ok());
        assert_eq!(
            output,
            "Title: Home\nAuthor: Admin\nVersion: 4\nCreatedOn: 2024-01-01T00:00:00Z\n\
             UpdatedOn: 2024-02-01T00:00:00Z\nComments: typo\n\nh1. Welcome\n"
        );
    }

    #[tokio::test]
    async fn test_list_titles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/1/wiki/index.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wiki_pages": [{"title": "Home", "version": 4}, {"title": "FAQ", "version": 1}]
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, output) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new(""), Command::Wiki(WikiAction::List))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
        assert_eq!(output, "Home\nFAQ\n");
    }

    #[tokio::test]
    async fn test_edit_missing_page_creates_it() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/1/wiki/Setup.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/projects/1/wiki/Setup.json"))
            .and(body_json(json!({"wiki_page": {"text": "h1. Setup", "comments": ""}})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "wiki_page": {"title": "Setup", "text": "h1. Setup", "version": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, _) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new("h1. Setup"), edit("Setup"))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_edit_existing_page_sends_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/1/wiki/Home.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wiki_page": {"title": "Home", "text": "old", "version": 4}
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/projects/1/wiki/Home.json"))
            .and(body_json(json!({"wiki_page": {"text": "new", "version": 4, "comments": ""}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, _) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new("new"), edit("Home"))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_edit_unchanged_page_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/1/wiki/Home.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wiki_page": {"title": "Home", "text": "same", "version": 4}
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, _) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::unchanged(), edit("Home"))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
    }
}
