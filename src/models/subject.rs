//! Subject model.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// An examinable subject. Code uniqueness is enforced server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: EntityId,
    pub code: String,
    pub name: String,
}

/// Request body for creating or updating a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRequest {
    pub code: String,
    pub name: String,
}
