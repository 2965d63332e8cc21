//! Student endpoints, including spreadsheet import/export.

use reqwest::multipart::{Form, Part};

use super::{ApiClient, MessageBody};
use crate::errors::ClientError;
use crate::models::{EntityId, Student, StudentRequest};

impl ApiClient {
    /// GET /api/students/section/:id - Students within one section.
    pub async fn students_by_section(
        &self,
        section_id: EntityId,
    ) -> Result<Vec<Student>, ClientError> {
        self.get_json(&format!("/students/section/{section_id}")).await
    }

    /// POST /api/students - Create a student.
    pub async fn create_student(&self, request: &StudentRequest) -> Result<Student, ClientError> {
        self.post_json("/students", request).await
    }

    /// PUT /api/students/:id - Update a student.
    pub async fn update_student(
        &self,
        id: EntityId,
        request: &StudentRequest,
    ) -> Result<Student, ClientError> {
        self.put_json(&format!("/students/{id}"), request).await
    }

    /// DELETE /api/students/:id - Delete a student.
    pub async fn delete_student(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/students/{id}")).await
    }

    /// POST /api/students/section/:id/import - Upload a spreadsheet of
    /// students as a multipart file.
    pub async fn import_students(
        &self,
        section_id: EntityId,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<(), ClientError> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let _: MessageBody = self
            .post_multipart(&format!("/students/section/{section_id}/import"), form)
            .await?;
        Ok(())
    }

    /// GET /api/students/section/:id/export - Download the section roster.
    pub async fn export_students(&self, section_id: EntityId) -> Result<Vec<u8>, ClientError> {
        self.get_bytes(&format!("/students/section/{section_id}/export"))
            .await
    }

    /// GET /api/students/template - Download the import template.
    pub async fn student_template(&self) -> Result<Vec<u8>, ClientError> {
        self.get_bytes("/students/template").await
    }
}
