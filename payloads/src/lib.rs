pub mod api_client;
pub mod display;
pub mod forms;
pub mod location;
pub mod requests;
pub mod responses;
pub mod validation;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest image accepted by the upload endpoint, in bytes.
pub const MAX_IMAGE_SIZE: usize = 1_048_576;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct UserId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct HotelId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type, sqlx::FromRow))]
#[cfg_attr(feature = "use-sqlx", sqlx(transparent))]
pub struct RoomId(pub Uuid);

/// Optional features of a hotel. Every flag defaults to `false`, so a record
/// missing a flag on the wire reads as "not offered".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct HotelAmenities {
    pub gym: bool,
    pub spa: bool,
    pub bar: bool,
    pub laundry: bool,
    pub pool: bool,
    pub breakfast: bool,
    pub free_wifi: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct RoomAmenities {
    pub room_service: bool,
    pub tv: bool,
    pub balcony: bool,
    pub free_wifi: bool,
    pub city_view: bool,
    pub ocean_view: bool,
    pub forest_view: bool,
    pub mountain_view: bool,
    pub air_condition: bool,
    pub sound_proof: bool,
}

/// Hotel details as entered by the owner.
///
/// `country` and `state` are ISO codes from [`location`]; `city` is the city
/// name within that state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Hotel {
    pub title: String,
    pub description: String,
    /// URL of the uploaded image.
    pub image: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub location_description: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "use-sqlx", sqlx(flatten))]
    pub amenities: HotelAmenities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Room {
    pub hotel_id: HotelId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub bed_count: i64,
    pub guest_count: i64,
    pub bathroom_count: i64,
    pub king_bed: i64,
    pub queen_bed: i64,
    /// Price per night, in whole currency units.
    pub room_price: i64,
    #[serde(flatten)]
    #[cfg_attr(feature = "use-sqlx", sqlx(flatten))]
    pub amenities: RoomAmenities,
}

/// Derive the upload storage key from an image URL: the trailing path
/// segment, without any query string or fragment.
///
/// Returns `None` when the URL has no usable trailing segment.
pub fn image_key_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let key = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    if key.is_empty() { None } else { Some(key) }
}
