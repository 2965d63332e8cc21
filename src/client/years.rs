//! Academic year endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{AcademicYear, EntityId, YearRequest};

impl ApiClient {
    /// GET /api/years - List every year across programs.
    pub async fn list_years(&self) -> Result<Vec<AcademicYear>, ClientError> {
        self.get_json("/years").await
    }

    /// GET /api/years/program/:id - Years belonging to one program.
    pub async fn years_by_program(
        &self,
        program_id: EntityId,
    ) -> Result<Vec<AcademicYear>, ClientError> {
        self.get_json(&format!("/years/program/{program_id}")).await
    }

    /// POST /api/years - Create a year.
    pub async fn create_year(&self, request: &YearRequest) -> Result<AcademicYear, ClientError> {
        self.post_json("/years", request).await
    }

    /// PUT /api/years/:id - Update a year.
    pub async fn update_year(
        &self,
        id: EntityId,
        request: &YearRequest,
    ) -> Result<AcademicYear, ClientError> {
        self.put_json(&format!("/years/{id}"), request).await
    }

    /// DELETE /api/years/:id - Delete a year.
    pub async fn delete_year(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/years/{id}")).await
    }
}
