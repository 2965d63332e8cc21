//! Section endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{EntityId, Section, SectionRequest};

impl ApiClient {
    /// GET /api/sections/branch/:id - Sections within one branch.
    pub async fn sections_by_branch(
        &self,
        branch_id: EntityId,
    ) -> Result<Vec<Section>, ClientError> {
        self.get_json(&format!("/sections/branch/{branch_id}")).await
    }

    /// POST /api/sections - Create a section.
    pub async fn create_section(&self, request: &SectionRequest) -> Result<Section, ClientError> {
        self.post_json("/sections", request).await
    }

    /// PUT /api/sections/:id - Update a section.
    pub async fn update_section(
        &self,
        id: EntityId,
        request: &SectionRequest,
    ) -> Result<Section, ClientError> {
        self.put_json(&format!("/sections/{id}"), request).await
    }

    /// DELETE /api/sections/:id - Delete a section.
    pub async fn delete_section(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/sections/{id}")).await
    }
}
