//! Issue category operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{IssueCategoriesPage, IssueCategory, IssueCategoryEnvelope};

impl Client {
    #[instrument(skip(self))]
    pub fn issue_categories(&self, project_id: u32) -> Result<Vec<IssueCategory>> {
        self.drain::<IssueCategoriesPage>(
            &format!("/projects/{}/issue_categories.json", project_id),
            &[],
            &format!("issue categories of project {}", project_id),
        )
    }

    #[instrument(skip(self))]
    pub fn issue_category(&self, id: u32) -> Result<IssueCategory> {
        let envelope: IssueCategoryEnvelope<IssueCategory> = self.get(
            &format!("/issue_categories/{}.json", id),
            &[],
            &format!("issue category {}", id),
        )?;
        Ok(envelope.issue_category)
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    pub fn create_issue_category(&self, project_id: u32, category: &IssueCategory) -> Result<IssueCategory> {
        let payload = IssueCategoryEnvelope {
            issue_category: category,
        };
        let envelope: IssueCategoryEnvelope<IssueCategory> = self.create(
            &format!("/projects/{}/issue_categories.json", project_id),
            &payload,
            &format!("issue category of project {}", project_id),
        )?;
        Ok(envelope.issue_category)
    }

    #[instrument(skip(self, category), fields(id = category.id))]
    pub fn update_issue_category(&self, category: &IssueCategory) -> Result<()> {
        let payload = IssueCategoryEnvelope {
            issue_category: category,
        };
        self.update(
            &format!("/issue_categories/{}.json", category.id),
            &payload,
            &format!("issue category {}", category.id),
        )
    }

    #[instrument(skip(self))]
    pub fn delete_issue_category(&self, id: u32) -> Result<()> {
        self.delete(
            &format!("/issue_categories/{}.json", id),
            &format!("issue category {}", id),
        )
    }
}
