//! Room model.

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::format::format_room_number;

/// Physical room layout. The variant fully determines capacity and seat grid;
/// an unknown type on the wire is a contract violation and fails to parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomType {
    #[serde(rename = "ROOM_8X8")]
    Room8x8,
    #[serde(rename = "ROOM_8X12")]
    Room8x12,
}

impl RoomType {
    /// Seating capacity derived from the layout.
    pub fn capacity(&self) -> i32 {
        match self {
            RoomType::Room8x8 => 64,
            RoomType::Room8x12 => 96,
        }
    }

    /// (rows, columns) of the seat grid.
    pub fn dimensions(&self) -> (i32, i32) {
        match self {
            RoomType::Room8x8 => (8, 8),
            RoomType::Room8x12 => (8, 12),
        }
    }
}

/// A room on a floor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: EntityId,
    pub room_number: String,
    pub room_type: RoomType,
    pub capacity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_count: Option<i32>,
    pub floor_id: EntityId,
}

/// Request body for creating or updating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub room_number: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub floor_id: EntityId,
}

impl RoomRequest {
    /// Build a request with the room number prefixed by the block code and
    /// the capacity derived from the room type.
    pub fn new(block_name: &str, raw_number: &str, room_type: RoomType, floor_id: EntityId) -> Self {
        Self {
            room_number: format_room_number(block_name, raw_number),
            room_type,
            capacity: room_type.capacity(),
            floor_id,
        }
    }
}
