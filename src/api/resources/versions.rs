//! Version operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::types::{Version, VersionEnvelope, VersionsPage};

impl Client {
    /// Versions of a project, including shared versions.
    #[instrument(skip(self))]
    pub fn versions(&self, project_id: u32) -> Result<Vec<Version>> {
        self.drain::<VersionsPage>(
            &format!("/projects/{}/versions.json", project_id),
            &[],
            &format!("versions of project {}", project_id),
        )
    }

    #[instrument(skip(self))]
    pub fn version(&self, id: u32) -> Result<Version> {
        let envelope: VersionEnvelope<Version> = self.get(
            &format!("/versions/{}.json", id),
            &[],
            &format!("version {}", id),
        )?;
        Ok(envelope.version)
    }

    #[instrument(skip(self, version), fields(name = %version.name))]
    pub fn create_version(&self, project_id: u32, version: &Version) -> Result<Version> {
        let payload = VersionEnvelope { version };
        let envelope: VersionEnvelope<Version> = self.create(
            &format!("/projects/{}/versions.json", project_id),
            &payload,
            &format!("version of project {}", project_id),
        )?;
        Ok(envelope.version)
    }

    #[instrument(skip(self, version), fields(id = version.id))]
    pub fn update_version(&self, version: &Version) -> Result<()> {
        let payload = VersionEnvelope { version };
        self.update(
            &format!("/versions/{}.json", version.id),
            &payload,
            &format!("version {}", version.id),
        )
    }

    #[instrument(skip(self))]
    pub fn delete_version(&self, id: u32) -> Result<()> {
        self.delete(&format!("/versions/{}.json", id), &format!("version {}", id))
    }
}
