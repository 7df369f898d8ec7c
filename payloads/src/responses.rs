use crate::{HotelId, RoomId, UserId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub owner_id: UserId,
    pub hotel_details: crate::Hotel,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub room_details: crate::Room,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel together with all of its rooms, newest room first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl std::ops::Deref for HotelWithRooms {
    type Target = Hotel;

    fn deref(&self) -> &Self::Target {
        &self.hotel
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Storage key, also the trailing segment of `url`.
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteImageResult {
    pub success: bool,
}
