//! Program endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{EntityId, Program, ProgramRequest};
use crate::validate::validate_duration_years;

impl ApiClient {
    /// GET /api/programs - List all programs.
    pub async fn list_programs(&self) -> Result<Vec<Program>, ClientError> {
        self.get_json("/programs").await
    }

    /// GET /api/programs/:id - Get a single program.
    pub async fn get_program(&self, id: EntityId) -> Result<Program, ClientError> {
        self.get_json(&format!("/programs/{id}")).await
    }

    /// POST /api/programs - Create a program. Duration is validated locally
    /// before anything goes on the wire.
    pub async fn create_program(&self, request: &ProgramRequest) -> Result<Program, ClientError> {
        if let Some(msg) = validate_duration_years(request.duration_years) {
            return Err(ClientError::Validation(msg));
        }
        self.post_json("/programs", request).await
    }

    /// PUT /api/programs/:id - Update a program.
    pub async fn update_program(
        &self,
        id: EntityId,
        request: &ProgramRequest,
    ) -> Result<Program, ClientError> {
        if let Some(msg) = validate_duration_years(request.duration_years) {
            return Err(ClientError::Validation(msg));
        }
        self.put_json(&format!("/programs/{id}"), request).await
    }

    /// DELETE /api/programs/:id - Delete a program.
    pub async fn delete_program(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/programs/{id}")).await
    }
}
