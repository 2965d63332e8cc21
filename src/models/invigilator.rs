//! Invigilator model.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A staff member eligible to invigilate exams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invigilator {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub department: String,
    pub phone_number: String,
    pub designation: String,
    pub available: bool,
}

/// Request body for creating or updating an invigilator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvigilatorRequest {
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub department: String,
    pub phone_number: String,
    pub designation: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}
