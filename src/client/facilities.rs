//! Block, floor and room endpoints (the facility hierarchy).

use super::ApiClient;
use crate::errors::ClientError;
use crate::format::format_block_name;
use crate::models::{Block, BlockRequest, EntityId, Floor, FloorRequest, Room, RoomRequest};

impl ApiClient {
    /// GET /api/blocks - List all blocks.
    pub async fn list_blocks(&self) -> Result<Vec<Block>, ClientError> {
        self.get_json("/blocks").await
    }

    /// POST /api/blocks - Create a block. The `-Block` suffix is applied
    /// here so it cannot be bypassed.
    pub async fn create_block(&self, request: &BlockRequest) -> Result<Block, ClientError> {
        let request = BlockRequest {
            name: format_block_name(&request.name),
        };
        self.post_json("/blocks", &request).await
    }

    /// PUT /api/blocks/:id - Update a block.
    pub async fn update_block(
        &self,
        id: EntityId,
        request: &BlockRequest,
    ) -> Result<Block, ClientError> {
        let request = BlockRequest {
            name: format_block_name(&request.name),
        };
        self.put_json(&format!("/blocks/{id}"), &request).await
    }

    /// DELETE /api/blocks/:id - Delete a block.
    pub async fn delete_block(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/blocks/{id}")).await
    }

    /// GET /api/floors/block/:id - Floors within one block.
    pub async fn floors_by_block(&self, block_id: EntityId) -> Result<Vec<Floor>, ClientError> {
        self.get_json(&format!("/floors/block/{block_id}")).await
    }

    /// POST /api/floors - Create a floor.
    pub async fn create_floor(&self, request: &FloorRequest) -> Result<Floor, ClientError> {
        self.post_json("/floors", request).await
    }

    /// PUT /api/floors/:id - Update a floor.
    pub async fn update_floor(
        &self,
        id: EntityId,
        request: &FloorRequest,
    ) -> Result<Floor, ClientError> {
        self.put_json(&format!("/floors/{id}"), request).await
    }

    /// DELETE /api/floors/:id - Delete a floor.
    pub async fn delete_floor(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/floors/{id}")).await
    }

    /// GET /api/rooms/floor/:id - Rooms on one floor.
    pub async fn rooms_by_floor(&self, floor_id: EntityId) -> Result<Vec<Room>, ClientError> {
        self.get_json(&format!("/rooms/floor/{floor_id}")).await
    }

    /// POST /api/rooms - Create a room. Build the request with
    /// [`RoomRequest::new`] so the number carries the block prefix and the
    /// capacity matches the room type.
    pub async fn create_room(&self, request: &RoomRequest) -> Result<Room, ClientError> {
        self.post_json("/rooms", request).await
    }

    /// PUT /api/rooms/:id - Update a room.
    pub async fn update_room(
        &self,
        id: EntityId,
        request: &RoomRequest,
    ) -> Result<Room, ClientError> {
        self.put_json(&format!("/rooms/{id}"), request).await
    }

    /// DELETE /api/rooms/:id - Delete a room.
    pub async fn delete_room(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&format!("/rooms/{id}")).await
    }
}
