//! Student model.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A student belonging to a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub registration_number: String,
    pub phone_number: String,
    pub section_id: EntityId,
}

/// Request body for creating or updating a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub name: String,
    pub email: String,
    pub registration_number: String,
    pub phone_number: String,
    pub section_id: EntityId,
}
