//! Branch endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{Branch, BranchRequest, EntityId};

impl ApiClient {
    /// GET /api/branches/year/:id - Branches within one year.
    pub async fn branches_by_year(&self, year_id: EntityId) -> Result<Vec<Branch>, ClientError> {
        self.get_json(&format!("/branches/year/{year_id}")).await
    }

    /// GET /api/branches/program/:pid/year/:yid - Branches scoped to a
    /// program and year.
    pub async fn branches_by_program_and_year(
        &self,
        program_id: EntityId,
        year_id: EntityId,
    ) -> Result<Vec<Branch>, ClientError> {
        self.get_json(&format!("/branches/program/{program_id}/year/{year_id}"))
            .await
    }

    /// POST /api/branches - Create a branch.
    pub async fn create_branch(&self, request: &BranchRequest) -> Result<Branch, ClientError> {
        self.post_json("/branches", request).await
    }

    /// PUT /api/branches/:id - Update a branch.
    pub async fn update_branch(
        &self,
        id: EntityId,
        request: &BranchRequest,
    ) -> Result<Branch, ClientError> {
        self.put_json(&format!("/branches/{id}"), request).await
    }

    /// DELETE /api/branches/:id - Delete a branch.
    pub async fn delete_branch(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/branches/{id}")).await
    }
}
