//! Command execution for `rmine`.
//!
//! Each group of the command line has its own module. Commands write their
//! reports to the given writer so they can be checked without a terminal.

mod issue;
mod membership;
mod news;
mod project;
mod settings;
mod user;
mod version;
mod wiki;

use std::io::Write;

use tracing::info;

use crate::api::Client;
use crate::cli::{Cli, Command};
use crate::config::{ConfigStore, Profile, Settings};
use crate::editor::{ExternalEditor, TextEditor};
use crate::error::{AppError, Result};

/// Everything a command needs to talk to the server.
pub struct Session<'a> {
    pub client: &'a Client,
    pub settings: &'a Settings,
    pub editor: &'a dyn TextEditor,
}

/// Run a parsed command line.
///
/// Config commands work on the settings files directly, every other group
/// loads the selected profile and builds a client first.
pub fn run(cli: Cli, store: &ConfigStore, out: &mut dyn Write) -> Result<()> {
    let profile = Profile::select(cli.profile.as_deref());
    info!(profile = profile.display_name(), command = ?cli.command, "Running command");

    if let Command::Config(action) = cli.command {
        return settings::execute(store, &profile, action, out);
    }

    let settings = store.load(&profile)?;
    let client = settings.to_client()?;
    let editor = ExternalEditor::new(settings.editor());
    let session = Session {
        client: &client,
        settings: &settings,
        editor: &editor,
    };

    execute(&session, cli.command, out)
}

/// Run a command that needs a server session.
pub fn execute(session: &Session<'_>, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Issue(action) => issue::execute(session, action, out),
        Command::Project(action) => project::execute(session, action, out),
        Command::Membership(action) => membership::execute(session, action, out),
        Command::User(action) => user::execute(session, action, out),
        Command::News(action) => news::execute(session, action, out),
        Command::Version(action) => version::execute(session, action, out),
        Command::Wiki(action) => wiki::execute(session, action, out),
        Command::Config(_) => Err(AppError::other(
            "config commands run without a server session",
        )),
    }
}

/// One line of a listing: the id right-aligned to four columns.
fn list_line(out: &mut dyn Write, id: u32, text: &str) -> Result<()> {
    writeln!(out, "{:4}: {}", id, text)?;
    Ok(())
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
