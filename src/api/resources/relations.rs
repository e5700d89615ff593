//! Issue relation operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{IssueRelation, RelationEnvelope, RelationsPage};

impl Client {
    /// Relations of an issue.
    #[instrument(skip(self))]
    pub fn relations(&self, issue_id: u32) -> Result<Vec<IssueRelation>> {
        self.list::<RelationsPage>(
            &format!("/issues/{}/relations.json", issue_id),
            &format!("relations of issue {}", issue_id),
        )
    }

    #[instrument(skip(self))]
    pub fn relation(&self, id: u32) -> Result<IssueRelation> {
        let envelope: RelationEnvelope<IssueRelation> = self.get(
            &format!("/relations/{}.json", id),
            &[],
            &format!("relation {}", id),
        )?;
        Ok(envelope.relation)
    }

    /// Relate `issue_id` to `relation.issue_to_id`.
    #[instrument(skip(self, relation), fields(kind = %relation.relation_type))]
    pub fn create_relation(&self, issue_id: u32, relation: &IssueRelation) -> Result<IssueRelation> {
        let payload = RelationEnvelope { relation };
        let envelope: RelationEnvelope<IssueRelation> = self.create(
            &format!("/issues/{}/relations.json", issue_id),
            &payload,
            &format!("relation of issue {}", issue_id),
        )?;
        Ok(envelope.relation)
    }

    #[instrument(skip(self))]
    pub fn delete_relation(&self, id: u32) -> Result<()> {
        self.delete(&format!("/relations/{}.json", id), &format!("relation {}", id))
    }
}
