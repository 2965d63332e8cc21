//! Exam scheduling endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{EntityId, Exam, ExamRequest};

impl ApiClient {
    /// GET /api/exams - List all scheduled exams.
    pub async fn list_exams(&self) -> Result<Vec<Exam>, ClientError> {
        self.get_json("/exams").await
    }

    /// GET /api/exams/:id - Get a single exam.
    pub async fn get_exam(&self, id: EntityId) -> Result<Exam, ClientError> {
        self.get_json(&format!("/exams/{id}")).await
    }

    /// POST /api/exams - Schedule an exam. Build the request through
    /// [`crate::validate::ExamForm::to_request`] so every required field and
    /// the end-after-start rule are checked first.
    pub async fn create_exam(&self, request: &ExamRequest) -> Result<Exam, ClientError> {
        self.post_json("/exams", request).await
    }

    /// PUT /api/exams/:id - Update an exam schedule.
    pub async fn update_exam(
        &self,
        id: EntityId,
        request: &ExamRequest,
    ) -> Result<Exam, ClientError> {
        self.put_json(&format!("/exams/{id}"), request).await
    }

    /// DELETE /api/exams/:id - Delete an exam.
    pub async fn delete_exam(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/exams/{id}")).await
    }
}
