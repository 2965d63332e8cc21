//! Program model, the root of the academic hierarchy.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A degree program (e.g. B.Tech, M.Tech).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: EntityId,
    pub program_name: String,
    /// Number of years (4 for B.Tech, 2 for M.Tech, etc.)
    pub duration_years: i32,
}

/// Request body for creating or updating a program.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRequest {
    pub program_name: String,
    pub duration_years: i32,
}
