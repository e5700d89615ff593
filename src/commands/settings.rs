//! `rmine config` commands.
//!
//! These work on the settings files only and never contact the server.

use std::io::Write;

use crate::cli::ConfigAction;
use crate::config::{ConfigStore, Profile, Settings};
use crate::editor::ExternalEditor;
use crate::error::Result;

pub(super) fn execute(
    store: &ConfigStore,
    profile: &Profile,
    action: ConfigAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ConfigAction::Init {
            endpoint,
            apikey,
            project,
        } => {
            let path = store.save(profile, &Settings::new(endpoint, apikey, project))?;
            writeln!(out, "{}", path.display())?;
        }
        ConfigAction::Edit => {
            // the file may not parse yet, so only borrow its editor when it does
            let configured = store.load(profile).ok().map(|s| s.editor);
            let editor = ExternalEditor::new(configured.as_deref());
            editor.open_file(&store.path_for(profile))?;
        }
        ConfigAction::List => {
            for name in store.list()? {
                writeln!(out, "{}", name)?;
            }
        }
        ConfigAction::Show => {
            writeln!(out, "{}", store.path_for(profile).display())?;
            let content = store.read_raw(profile)?;
            writeln!(out, "{}", content)?;
        }
    }
    Ok(())
}
