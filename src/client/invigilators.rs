//! Invigilator endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{EntityId, Invigilator, InvigilatorRequest};

impl ApiClient {
    /// GET /api/invigilators - List all invigilators.
    pub async fn list_invigilators(&self) -> Result<Vec<Invigilator>, ClientError> {
        self.get_json("/invigilators").await
    }

    /// POST /api/invigilators - Create an invigilator.
    pub async fn create_invigilator(
        &self,
        request: &InvigilatorRequest,
    ) -> Result<Invigilator, ClientError> {
        self.post_json("/invigilators", request).await
    }

    /// PUT /api/invigilators/:id - Update an invigilator.
    pub async fn update_invigilator(
        &self,
        id: EntityId,
        request: &InvigilatorRequest,
    ) -> Result<Invigilator, ClientError> {
        self.put_json(&format!("/invigilators/{id}"), request).await
    }

    /// DELETE /api/invigilators/:id - Delete an invigilator.
    pub async fn delete_invigilator(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/invigilators/{id}")).await
    }
}
