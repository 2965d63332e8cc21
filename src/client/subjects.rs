//! Subject endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{EntityId, Subject, SubjectRequest};

impl ApiClient {
    /// GET /api/subjects - List all subjects.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ClientError> {
        self.get_json("/subjects").await
    }

    /// POST /api/subjects - Create a subject. Code uniqueness is enforced
    /// server-side; a conflict comes back as an API error.
    pub async fn create_subject(&self, request: &SubjectRequest) -> Result<Subject, ClientError> {
        self.post_json("/subjects", request).await
    }

    /// PUT /api/subjects/:id - Update a subject.
    pub async fn update_subject(
        &self,
        id: EntityId,
        request: &SubjectRequest,
    ) -> Result<Subject, ClientError> {
        self.put_json(&format!("/subjects/{id}"), request).await
    }

    /// DELETE /api/subjects/:id - Delete a subject.
    pub async fn delete_subject(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/subjects/{id}")).await
    }
}
