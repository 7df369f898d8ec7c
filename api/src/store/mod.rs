//! Database store for the hotel API.
//!
//! ### Identifiers
//! Ids are generated in Rust (UUID v4) and bound as 16-byte blobs through the
//! `sqlx::Type` impls on the payload id types.
//!
//! ### Time
//! Functions that write timestamps take a [`TimeSource`] so tests can freeze
//! the clock. Timestamps are stored as RFC 3339 text and read back through
//! [`DbTimestamp`].
//!
//! ### Validation
//! Hotels and rooms go through the same field rules the UI applies before
//! they are written, including after merging a patch, so a row never holds
//! an inconsistent country/state/city.

mod hotel;
mod image;
mod room;
mod user;

pub use hotel::*;
pub use image::*;
pub use room::*;
pub use user::*;

use jiff::Timestamp;
use payloads::{
    HotelId, RoomId, UserId,
    validation::{FieldErrors, HotelField, RoomField},
};
use sqlx::FromRow;

use crate::time::TimeSource;

/// A timestamp as it sits in a TEXT column.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
pub struct DbTimestamp(String);

impl From<Timestamp> for DbTimestamp {
    fn from(ts: Timestamp) -> Self {
        Self(ts.to_string())
    }
}

impl TryFrom<DbTimestamp> for Timestamp {
    type Error = jiff::Error;

    fn try_from(value: DbTimestamp) -> Result<Self, Self::Error> {
        value.0.parse()
    }
}

fn now(time_source: &TimeSource) -> DbTimestamp {
    time_source.now().into()
}

/// A complete user row that stays in the backend.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    #[sqlx(try_from = "DbTimestamp")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "DbTimestamp")]
    pub updated_at: Timestamp,
}

impl From<User> for payloads::responses::UserProfile {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Hotel {
    pub id: HotelId,
    pub owner_id: UserId,
    #[sqlx(flatten)]
    pub details: payloads::Hotel,
    #[sqlx(try_from = "DbTimestamp")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "DbTimestamp")]
    pub updated_at: Timestamp,
}

impl From<Hotel> for payloads::responses::Hotel {
    fn from(hotel: Hotel) -> Self {
        Self {
            hotel_id: hotel.id,
            owner_id: hotel.owner_id,
            hotel_details: hotel.details,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Room {
    pub id: RoomId,
    #[sqlx(flatten)]
    pub details: payloads::Room,
    #[sqlx(try_from = "DbTimestamp")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "DbTimestamp")]
    pub updated_at: Timestamp,
}

impl From<Room> for payloads::responses::Room {
    fn from(room: Room) -> Self {
        Self {
            room_id: room.id,
            room_details: room.details,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UploadedImage {
    pub image_key: String,
    pub owner_id: UserId,
    pub content_type: String,
    pub image_data: Vec<u8>,
    #[sqlx(try_from = "DbTimestamp")]
    pub created_at: Timestamp,
}

/// A hotel whose owner has been checked to be the acting user.
#[derive(Debug)]
pub struct ValidatedOwner(Hotel);

impl ValidatedOwner {
    pub fn hotel(&self) -> &Hotel {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("User not found")]
    UserNotFound,
    #[error("Hotel not found")]
    HotelNotFound,
    #[error("Room not found")]
    RoomNotFound,
    #[error("Image not found")]
    ImageNotFound,
    #[error("Only the hotel owner can do this")]
    NotHotelOwner,
    #[error("Invalid hotel: {0}")]
    InvalidHotel(FieldErrors<HotelField>),
    #[error("Invalid room: {0}")]
    InvalidRoom(FieldErrors<RoomField>),
    #[error("Image is larger than 1 MiB")]
    ImageTooLarge,
    #[error("File is not a supported image")]
    NotAnImage,
    #[error("Unique constraint violation")]
    NotUnique(#[source] sqlx::Error),
    #[error("Database error")]
    Database(#[source] sqlx::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            return StoreError::NotUnique(e);
        }
        StoreError::Database(e)
    }
}

/// Map a missing row to `not_found`, anything else through the usual
/// conversion.
fn or_not_found(not_found: StoreError) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| match e {
        sqlx::Error::RowNotFound => not_found,
        e => e.into(),
    }
}
