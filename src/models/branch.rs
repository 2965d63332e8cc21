//! Branch model.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A branch (e.g. CSE, ECE) within an academic year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: EntityId,
    pub branch_name: String,
    pub year_id: EntityId,
}

/// Request body for creating or updating a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRequest {
    pub branch_name: String,
    pub year_id: EntityId,
}
