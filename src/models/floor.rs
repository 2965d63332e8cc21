//! Floor model.

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::format::format_floor_label;

/// A floor within a block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: EntityId,
    pub floor_number: i32,
    pub block_id: EntityId,
}

impl Floor {
    /// Ordinal display label, e.g. `"2nd Floor"`.
    pub fn label(&self) -> String {
        format!("{} Floor", format_floor_label(self.floor_number))
    }
}

/// Request body for creating or updating a floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorRequest {
    pub floor_number: i32,
    pub block_id: EntityId,
}
