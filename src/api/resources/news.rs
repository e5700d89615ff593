//! News operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{News, NewsPage};

impl Client {
    /// News of a project.
    #[instrument(skip(self))]
    pub fn news(&self, project_id: u32) -> Result<Vec<News>> {
        self.drain::<NewsPage>(
            &format!("/projects/{}/news.json", project_id),
            &[],
            &format!("news of project {}", project_id),
        )
    }

    /// News of all projects.
    #[instrument(skip(self))]
    pub fn all_news(&self) -> Result<Vec<News>> {
        self.drain::<NewsPage>("/news.json", &[], "news")
    }
}
