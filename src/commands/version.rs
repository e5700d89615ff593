//! `rmine version` commands.

use std::io::Write;

use super::{list_line, or_empty, Session};
use crate::api::Version;
use crate::cli::VersionAction;
use crate::error::Result;

pub(super) fn execute(session: &Session<'_>, action: VersionAction, out: &mut dyn Write) -> Result<()> {
    match action {
        VersionAction::Show { id } => {
            let version = session.client.version(id)?;
            write!(out, "{}", report(&version))?;
        }
        VersionAction::List { project_id } => {
            let project_id = project_id.unwrap_or(session.settings.project);
            for version in session.client.versions(project_id)? {
                list_line(out, version.id, &version.name)?;
            }
        }
    }
    Ok(())
}

fn report(version: &Version) -> String {
    let project = version.project.as_ref().map(|p| p.name.as_str()).unwrap_or("");
    format!(
        "Id: {}\nProject: {}\nName: {}\nDescription: {}\nStatus: {}\nDueDate: {}\nCreatedOn: {}\n",
        version.id,
        project,
        version.name,
        version.description,
        version.status,
        or_empty(&version.due_date),
        or_empty(&version.created_on),
    )
}
