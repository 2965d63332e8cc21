//! Block model.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A physical building or wing containing floors and rooms.
///
/// Names carry a `-Block` suffix; [`crate::format::format_block_name`] is
/// applied before any write so the invariant holds server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: EntityId,
    pub name: String,
}

/// Request body for creating or updating a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRequest {
    pub name: String,
}
