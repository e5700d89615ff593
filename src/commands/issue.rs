//! `rmine issue` commands.

use std::io::Write;

use tracing::{debug, instrument};

use super::{list_line, or_empty, Session};
use crate::api::{Issue, IssueFilter};
use crate::cli::IssueAction;
use crate::editor::{self, IssueText};
use crate::error::{AppError, Result};

pub(super) fn execute(session: &Session<'_>, action: IssueAction, out: &mut dyn Write) -> Result<()> {
    match action {
        IssueAction::Add => add(session, out),
        IssueAction::Create {
            subject,
            description,
        } => create(session, IssueText { subject, description }, out),
        IssueAction::Update { id } => update(session, id),
        IssueAction::Show { id } => show(session, id, out),
        IssueAction::Delete { id } => Ok(session.client.delete_issue(id)?),
        IssueAction::Close { id } => close(session, id),
        IssueAction::Notes { id } => notes(session, id),
        IssueAction::List => list(session, None, out),
        IssueAction::Project => {
            let filter = IssueFilter::new().project_id(session.settings.project.to_string());
            list(session, Some(filter), out)
        }
        IssueAction::Mine => list(session, Some(IssueFilter::new().assigned_to_id("me")), out),
    }
}

fn add(session: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let text = editor::issue_from_editor(session.editor, "new-issue", None)?;
    create(session, text, out)
}

#[instrument(skip(session, text, out), fields(subject = %text.subject))]
fn create(session: &Session<'_>, text: IssueText, out: &mut dyn Write) -> Result<()> {
    let issue = Issue {
        project_id: session.settings.project,
        subject: text.subject,
        description: text.description,
        ..Default::default()
    };
    let created = session.client.create_issue(&issue)?;
    list_line(out, created.id, &created.subject)
}

/// The project an update is sent with: the issue's own, else the configured one.
fn project_of(session: &Session<'_>, issue: &Issue) -> u32 {
    issue
        .project
        .as_ref()
        .map(|p| p.id)
        .filter(|id| *id > 0)
        .unwrap_or(session.settings.project)
}

fn update(session: &Session<'_>, id: u32) -> Result<()> {
    let mut issue = session.client.issue(id)?;
    let current = IssueText {
        subject: issue.subject.clone(),
        description: issue.description.clone(),
    };

    let edited = editor::issue_from_editor(session.editor, &format!("issue-{}", id), Some(&current))?;
    issue.subject = edited.subject;
    issue.description = edited.description;
    issue.project_id = project_of(session, &issue);

    Ok(session.client.update_issue(&issue)?)
}

#[instrument(skip(session))]
fn close(session: &Session<'_>, id: u32) -> Result<()> {
    let mut issue = session.client.issue(id)?;
    let statuses = session.client.issue_statuses()?;
    let closed = statuses
        .iter()
        .find(|s| s.is_closed)
        .ok_or_else(|| AppError::other("Redmine has no closed issue status"))?;
    debug!(status = %closed.name, "Closing issue");

    issue.status_id = closed.id;
    issue.project_id = project_of(session, &issue);
    Ok(session.client.update_issue(&issue)?)
}

fn notes(session: &Session<'_>, id: u32) -> Result<()> {
    let mut issue = session.client.issue(id)?;
    let notes = editor::notes_from_editor(session.editor, &format!("issue-{}-notes", id), &issue.title())?;

    issue.notes = notes;
    issue.project_id = project_of(session, &issue);
    Ok(session.client.update_issue(&issue)?)
}

fn show(session: &Session<'_>, id: u32, out: &mut dyn Write) -> Result<()> {
    let issue = session.client.issue(id)?;
    write!(out, "{}", report(&issue))?;
    Ok(())
}

fn report(issue: &Issue) -> String {
    format!(
        "Id: {}\nSubject: {}\nProject: {}\nTracker: {}\nStatus: {}\nPriority: {}\nAuthor: {}\nAssigned: {}\nCreatedOn: {}\nUpdatedOn: {}\n\n{}\n",
        issue.id,
        issue.subject,
        issue.project_name(),
        issue.tracker_name(),
        issue.status_name(),
        issue.priority_name(),
        issue.author_name(),
        issue.assignee_name(),
        or_empty(&issue.created_on),
        or_empty(&issue.updated_on),
        issue.description,
    )
}

fn list(session: &Session<'_>, filter: Option<IssueFilter>, out: &mut dyn Write) -> Result<()> {
    let issues = match filter {
        Some(filter) => session.client.issues_by_filter(&filter)?,
        None => session.client.issues()?,
    };
    for issue in &issues {
        list_line(out, issue.id, &issue.subject)?;
    }
    Ok(())
}
