//! `rmine user` commands.

use std::io::Write;

use super::{list_line, or_empty, Session};
use crate::api::User;
use crate::cli::UserAction;
use crate::error::Result;

pub(super) fn execute(session: &Session<'_>, action: UserAction, out: &mut dyn Write) -> Result<()> {
    match action {
        UserAction::Show { id } => {
            let user = session.client.user(id)?;
            write!(out, "{}", report(&user))?;
        }
        UserAction::List => {
            for user in session.client.users()? {
                list_line(out, user.id, &user.login)?;
            }
        }
    }
    Ok(())
}

fn report(user: &User) -> String {
    format!(
        "Id: {}\nLogin: {}\nFirstname: {}\nLastname: {}\nMail: {}\nCreatedOn: {}\n",
        user.id,
        user.login,
        user.firstname,
        user.lastname,
        user.mail,
        or_empty(&user.created_on),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::commands::testing::run_command;
    use crate::editor::tests::ScriptedEditor;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_show_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/3.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "id": 3,
                    "login": "jsmith",
                    "firstname": "John",
                    "lastname": "Smith",
                    "mail": "jsmith@example.net",
                    "created_on": "2023-05-01T08:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, output) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new(""), Command::User(UserAction::Show { id: 3 }))
        })
        .await
        .unwrap();

        assert!(result.is_ok());
        assert_eq!(
            output,
            "Id: 3\nLogin: jsmith\nFirstname: John\nLastname: Smith\nMail: jsmith@example.net\n\
             CreatedOn: 2023-05-01T08:00:00Z\n"
        );
    }

    #[tokio::test]
    async fn test_show_user_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/3.json"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, output) = tokio::task::spawn_blocking(move || {
            run_command(&uri, &ScriptedEditor::new(""), Command::User(UserAction::Show { id: 3 }))
        })
        .await
        .unwrap();

        assert!(output.is_empty());
        assert!(result.unwrap_err().user_message().contains("Access denied"));
    }
}
