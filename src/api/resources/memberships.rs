//! Project membership operations.

use serde::Serialize;
use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{Membership, MembershipEnvelope, MembershipsPage, NewMembership};

#[derive(Debug, Serialize)]
struct RoleUpdate<'a> {
    role_ids: &'a [u32],
}

impl Client {
    /// Members of a project.
    #[instrument(skip(self))]
    pub fn memberships(&self, project_id: u32) -> Result<Vec<Membership>> {
        self.drain::<MembershipsPage>(
            &format!("/projects/{}/memberships.json", project_id),
            &[],
            &format!("memberships of project {}", project_id),
        )
    }

    #[instrument(skip(self))]
    pub fn membership(&self, id: u32) -> Result<Membership> {
        let envelope: MembershipEnvelope<Membership> = self.get(
            &format!("/memberships/{}.json", id),
            &[],
            &format!("membership {}", id),
        )?;
        Ok(envelope.membership)
    }

    /// Add a user or group to a project with the given roles.
    #[instrument(skip(self))]
    pub fn create_membership(&self, project_id: u32, membership: &NewMembership) -> Result<Membership> {
        let payload = MembershipEnvelope { membership };
        let envelope: MembershipEnvelope<Membership> = self.create(
            &format!("/projects/{}/memberships.json", project_id),
            &payload,
            &format!("membership of project {}", project_id),
        )?;
        Ok(envelope.membership)
    }

    /// Replace the roles of a membership.
    #[instrument(skip(self))]
    pub fn update_membership(&self, id: u32, role_ids: &[u32]) -> Result<()> {
        let payload = MembershipEnvelope {
            membership: RoleUpdate { role_ids },
        };
        self.update(
            &format!("/memberships/{}.json", id),
            &payload,
            &format!("membership {}", id),
        )
    }

    #[instrument(skip(self))]
    pub fn delete_membership(&self, id: u32) -> Result<()> {
        self.delete(
            &format!("/memberships/{}.json", id),
            &format!("membership {}", id),
        )
    }
}
