//! `rmine news` commands.
//!
//! Redmine has no endpoint for a single news item, so `show` looks the id up
//! in the news of the configured project.

use std::io::Write;

use super::{list_line, or_empty, Session};
use crate::api::error::ApiError;
use crate::api::News;
use crate::cli::NewsAction;
use crate::error::Result;

pub(super) fn execute(session: &Session<'_>, action: NewsAction, out: &mut dyn Write) -> Result<()> {
    let news = project_news(session)?;
    match action {
        NewsAction::Show { id } => {
            let item = news
                .iter()
                .find(|n| n.id == id)
                .ok_or_else(|| ApiError::NotFound(format!("news {}", id)))?;
            write!(out, "{}", report(item))?;
        }
        NewsAction::List => {
            for item in &news {
                list_line(out, item.id, &item.title)?;
            }
        }
    }
    Ok(())
}

/// News of the configured project, or of all projects when none is set.
fn project_news(session: &Session<'_>) -> Result<Vec<News>> {
    let news = match session.settings.project {
        0 => session.client.all_news()?,
        project => session.client.news(project)?,
    };
    Ok(news)
}

fn report(news: &News) -> String {
    format!(
        "Id: {}\nProject: {}\nTitle: {}\nSummary: {}\nCreatedOn: {}\n\n{}\n",
        news.id,
        news.project.name,
        news.title,
        news.summary,
        or_empty(&news.created_on),
        news.description,
    )
}
