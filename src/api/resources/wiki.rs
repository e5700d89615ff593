//! Wiki page operations.
//!
//! Pages are addressed by title, which is percent-encoded as a path segment.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{WikiPage, WikiPageEnvelope, WikiPagesPage};

fn page_path(project_id: u32, title: &str) -> String {
    format!(
        "/projects/{}/wiki/{}.json",
        project_id,
        urlencoding::encode(title)
    )
}

impl Client {
    /// The wiki index of a project. Listed pages carry no text.
    #[instrument(skip(self))]
    pub fn wiki_pages(&self, project_id: u32) -> Result<Vec<WikiPage>> {
        self.list::<WikiPagesPage>(
            &format!("/projects/{}/wiki/index.json", project_id),
            &format!("wiki of project {}", project_id),
        )
    }

    #[instrument(skip(self))]
    pub fn wiki_page(&self, project_id: u32, title: &str) -> Result<WikiPage> {
        let envelope: WikiPageEnvelope<WikiPage> = self.get(
            &page_path(project_id, title),
            &[],
            &format!("wiki page {}", title),
        )?;
        Ok(envelope.wiki_page)
    }

    /// An old revision of a page.
    #[instrument(skip(self))]
    pub fn wiki_page_at_version(&self, project_id: u32, title: &str, version: u32) -> Result<WikiPage> {
        let path = format!(
            "/projects/{}/wiki/{}/{}.json",
            project_id,
            urlencoding::encode(title),
            version
        );
        let envelope: WikiPageEnvelope<WikiPage> = self.get(
            &path,
            &[],
            &format!("wiki page {} version {}", title, version),
        )?;
        Ok(envelope.wiki_page)
    }

    /// Create the page named by `page.title`.
    #[instrument(skip(self, page), fields(title = %page.title))]
    pub fn create_wiki_page(&self, project_id: u32, page: &WikiPage) -> Result<WikiPage> {
        let payload = WikiPageEnvelope { wiki_page: page };
        let envelope: WikiPageEnvelope<WikiPage> = self.put_create(
            &page_path(project_id, &page.title),
            &payload,
            &format!("wiki page {}", page.title),
        )?;
        Ok(envelope.wiki_page)
    }

    /// Update the page named by `page.title`.
    #[instrument(skip(self, page), fields(title = %page.title))]
    pub fn update_wiki_page(&self, project_id: u32, page: &WikiPage) -> Result<()> {
        let payload = WikiPageEnvelope { wiki_page: page };
        self.update(
            &page_path(project_id, &page.title),
            &payload,
            &format!("wiki page {}", page.title),
        )
    }

    /// Delete a page with its history and attachments.
    #[instrument(skip(self))]
    pub fn delete_wiki_page(&self, project_id: u32, title: &str) -> Result<()> {
        self.delete(&page_path(project_id, title), &format!("wiki page {}", title))
    }
}
