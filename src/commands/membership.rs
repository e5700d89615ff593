//! `rmine membership` commands.

use std::io::Write;

use super::{list_line, Session};
use crate::api::Membership;
use crate::cli::MembershipAction;
use crate::error::Result;

pub(super) fn execute(session: &Session<'_>, action: MembershipAction, out: &mut dyn Write) -> Result<()> {
    match action {
        MembershipAction::Show { id } => {
            let membership = session.client.membership(id)?;
            write!(out, "{}", report(&membership))?;
        }
        MembershipAction::List { project_id } => {
            for membership in session.client.memberships(project_id)? {
                list_line(out, membership.id, membership.principal_name())?;
            }
        }
    }
    Ok(())
}

fn report(membership: &Membership) -> String {
    format!(
        "Id: {}\nProject: {}\nUser: {}\nRole: {}\n",
        membership.id,
        membership.project.name,
        membership.principal_name(),
        membership.role_names().join(", "),
    )
}
