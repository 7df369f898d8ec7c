//! Field rules shared by the UI forms and the API.
//!
//! Lengths are counted in characters after trimming surrounding whitespace.

use crate::{Hotel, Room, location};

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const ADDRESS_MIN_LEN: usize = 10;
pub const LOCATION_DESCRIPTION_MIN_LEN: usize = 10;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;

/// Something a form field can be labelled as in an error message.
pub trait Field: Copy + Eq {
    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    TooShort { min: usize },
    Required,
    BelowMinimum { min: i64 },
    UnknownCountry,
    StateNotInCountry,
    CityNotInState,
}

impl FieldError {
    pub fn message(&self, label: &str) -> String {
        match self {
            Self::TooShort { min } => {
                format!("{label} must be at least {min} characters long")
            }
            Self::Required => format!("{label} is required"),
            Self::BelowMinimum { min } => {
                format!("{label} must be at least {min}")
            }
            Self::UnknownCountry => "Unknown country".into(),
            Self::StateNotInCountry => {
                "State does not belong to the selected country".into()
            }
            Self::CityNotInState => {
                "City does not belong to the selected state".into()
            }
        }
    }
}

/// Errors keyed by field, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F> {
    errors: Vec<(F, FieldError)>,
}

impl<F> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<F: Field> FieldErrors<F> {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn push(&mut self, field: F, error: FieldError) {
        self.errors.push((field, error));
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }

    /// Message to show next to `field`, if it has an error.
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(|e| e.message(field.label()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(F, FieldError)> {
        self.errors.iter()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn min_len(&mut self, field: F, value: &str, min: usize) {
        let len = value.trim().chars().count();
        if len == 0 {
            self.push(field, FieldError::Required);
        } else if len < min {
            self.push(field, FieldError::TooShort { min });
        }
    }

    fn required(&mut self, field: F, value: &str) {
        if value.trim().is_empty() {
            self.push(field, FieldError::Required);
        }
    }

    fn at_least(&mut self, field: F, value: i64, min: i64) {
        if value < min {
            self.push(field, FieldError::BelowMinimum { min });
        }
    }
}

impl<F: Field> std::fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}", error.message(field.label()))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelField {
    Title,
    Description,
    Image,
    Country,
    State,
    City,
    Address,
    LocationDescription,
}

impl Field for HotelField {
    fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Image => "Image",
            Self::Country => "Country",
            Self::State => "State",
            Self::City => "City",
            Self::Address => "Address",
            Self::LocationDescription => "Location description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomField {
    Title,
    Description,
    Image,
    BedCount,
    GuestCount,
    BathroomCount,
    KingBed,
    QueenBed,
    RoomPrice,
}

impl Field for RoomField {
    fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Image => "Image",
            Self::BedCount => "Bed count",
            Self::GuestCount => "Guest count",
            Self::BathroomCount => "Bathroom count",
            Self::KingBed => "King beds",
            Self::QueenBed => "Queen beds",
            Self::RoomPrice => "Room price",
        }
    }
}

pub fn validate_hotel(hotel: &Hotel) -> Result<(), FieldErrors<HotelField>> {
    use HotelField::*;

    let mut errors = FieldErrors::default();
    errors.min_len(Title, &hotel.title, TITLE_MIN_LEN);
    errors.min_len(Description, &hotel.description, DESCRIPTION_MIN_LEN);
    errors.required(Image, &hotel.image);
    errors.min_len(Address, &hotel.address, ADDRESS_MIN_LEN);
    errors.min_len(
        LocationDescription,
        &hotel.location_description,
        LOCATION_DESCRIPTION_MIN_LEN,
    );

    errors.required(Country, &hotel.country);
    errors.required(State, &hotel.state);
    errors.required(City, &hotel.city);

    // Only check consistency of the parts that were actually filled in.
    if !hotel.country.is_empty() {
        if location::country_by_code(&hotel.country).is_none() {
            errors.push(Country, FieldError::UnknownCountry);
        } else if !hotel.state.is_empty() {
            if location::state_by_code(&hotel.country, &hotel.state).is_none()
            {
                errors.push(State, FieldError::StateNotInCountry);
            } else if !hotel.city.is_empty()
                && location::city_by_name(
                    &hotel.country,
                    &hotel.state,
                    &hotel.city,
                )
                .is_none()
            {
                errors.push(City, FieldError::CityNotInState);
            }
        }
    }

    errors.into_result()
}

pub fn validate_room(room: &Room) -> Result<(), FieldErrors<RoomField>> {
    use RoomField::*;

    let mut errors = FieldErrors::default();
    errors.min_len(Title, &room.title, TITLE_MIN_LEN);
    errors.min_len(Description, &room.description, DESCRIPTION_MIN_LEN);
    errors.required(Image, &room.image);
    errors.at_least(BedCount, room.bed_count, 1);
    errors.at_least(GuestCount, room.guest_count, 1);
    errors.at_least(BathroomCount, room.bathroom_count, 1);
    errors.at_least(KingBed, room.king_bed, 0);
    errors.at_least(QueenBed, room.queen_bed, 0);
    errors.at_least(RoomPrice, room.room_price, 1);
    errors.into_result()
}

/// Validation result for usernames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidation {
    Valid,
    TooShort,
    TooLong,
    InvalidCharacters,
    MustStartWithLetter,
}

impl UsernameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => Some("Username must be at least 3 characters"),
            Self::TooLong => Some("Username must be at most 30 characters"),
            Self::InvalidCharacters => Some(
                "Username can only contain letters, numbers, and underscores",
            ),
            Self::MustStartWithLetter => {
                Some("Username must start with a letter")
            }
        }
    }
}

/// 3-30 ASCII letters, digits or underscores, starting with a letter.
pub fn validate_username(username: &str) -> UsernameValidation {
    if username.len() < USERNAME_MIN_LEN {
        return UsernameValidation::TooShort;
    }
    if username.len() > USERNAME_MAX_LEN {
        return UsernameValidation::TooLong;
    }

    let mut chars = username.chars();
    if let Some(first) = chars.next()
        && !first.is_ascii_alphabetic()
    {
        return UsernameValidation::MustStartWithLetter;
    }
    if chars.any(|c| !c.is_ascii_alphanumeric() && c != '_') {
        return UsernameValidation::InvalidCharacters;
    }

    UsernameValidation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HotelAmenities, HotelId, RoomAmenities};
    use uuid::Uuid;

    fn hotel() -> Hotel {
        Hotel {
            title: "Grand Budapest".into(),
            description: "A hotel high in the mountains".into(),
            image: "http://localhost:8000/api/uploads/abc.png".into(),
            country: "US".into(),
            state: "WA".into(),
            city: "Seattle".into(),
            address: "1 Pike Place Market".into(),
            location_description: "Next to the fish market".into(),
            amenities: HotelAmenities::default(),
        }
    }

    fn room() -> Room {
        Room {
            hotel_id: HotelId(Uuid::nil()),
            title: "Deluxe".into(),
            description: "Spacious room with a view".into(),
            image: "http://localhost:8000/api/uploads/def.png".into(),
            bed_count: 2,
            guest_count: 3,
            bathroom_count: 1,
            king_bed: 1,
            queen_bed: 0,
            room_price: 120,
            amenities: RoomAmenities::default(),
        }
    }

    #[test]
    fn valid_hotel_passes() {
        assert_eq!(validate_hotel(&hotel()), Ok(()));
    }

    #[test]
    fn hotel_length_rules() {
        let mut h = hotel();
        h.title = "ab".into();
        h.description = "too short".into();
        h.image = String::new();
        let errors = validate_hotel(&h).unwrap_err();
        assert_eq!(
            errors.get(HotelField::Title),
            Some(FieldError::TooShort { min: 3 })
        );
        assert_eq!(
            errors.get(HotelField::Description),
            Some(FieldError::TooShort { min: 10 })
        );
        assert_eq!(errors.get(HotelField::Image), Some(FieldError::Required));
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message(HotelField::Title).as_deref(),
            Some("Title must be at least 3 characters long")
        );
        assert_eq!(
            errors.message(HotelField::Image).as_deref(),
            Some("Image is required")
        );
    }

    #[test]
    fn hotel_lengths_count_chars_not_bytes() {
        let mut h = hotel();
        // Three characters, six bytes.
        h.title = "äöü".into();
        assert_eq!(validate_hotel(&h), Ok(()));
        h.title = "  ab  ".into();
        assert!(validate_hotel(&h).is_err());
    }

    #[test]
    fn hotel_location_must_be_consistent() {
        let mut h = hotel();
        h.state = "ON".into();
        let errors = validate_hotel(&h).unwrap_err();
        assert_eq!(
            errors.get(HotelField::State),
            Some(FieldError::StateNotInCountry)
        );

        let mut h = hotel();
        h.city = "Perth".into();
        let errors = validate_hotel(&h).unwrap_err();
        assert_eq!(
            errors.get(HotelField::City),
            Some(FieldError::CityNotInState)
        );

        let mut h = hotel();
        h.country = "XX".into();
        let errors = validate_hotel(&h).unwrap_err();
        assert_eq!(
            errors.get(HotelField::Country),
            Some(FieldError::UnknownCountry)
        );
    }

    #[test]
    fn hotel_location_required() {
        let mut h = hotel();
        h.state = String::new();
        h.city = String::new();
        let errors = validate_hotel(&h).unwrap_err();
        assert_eq!(errors.get(HotelField::State), Some(FieldError::Required));
        assert_eq!(errors.get(HotelField::City), Some(FieldError::Required));
    }

    #[test]
    fn room_count_minimums() {
        assert_eq!(validate_room(&room()), Ok(()));

        let cases: [(RoomField, fn(&mut Room)); 4] = [
            (RoomField::BedCount, |r| r.bed_count = 0),
            (RoomField::GuestCount, |r| r.guest_count = 0),
            (RoomField::BathroomCount, |r| r.bathroom_count = 0),
            (RoomField::RoomPrice, |r| r.room_price = 0),
        ];
        for (field, set) in cases {
            let mut r = room();
            set(&mut r);
            let errors = validate_room(&r).unwrap_err();
            assert_eq!(
                errors.get(field),
                Some(FieldError::BelowMinimum { min: 1 }),
                "{field:?}"
            );
        }

        let mut r = room();
        r.king_bed = -1;
        r.queen_bed = -1;
        let errors = validate_room(&r).unwrap_err();
        assert_eq!(
            errors.get(RoomField::KingBed),
            Some(FieldError::BelowMinimum { min: 0 })
        );
        assert_eq!(
            errors.get(RoomField::QueenBed),
            Some(FieldError::BelowMinimum { min: 0 })
        );

        let mut r = room();
        r.king_bed = 0;
        r.queen_bed = 0;
        assert_eq!(validate_room(&r), Ok(()));
    }

    #[test]
    fn usernames() {
        assert!(validate_username("alice_01").is_valid());
        assert_eq!(validate_username("al"), UsernameValidation::TooShort);
        assert_eq!(
            validate_username("1alice"),
            UsernameValidation::MustStartWithLetter
        );
        assert_eq!(
            validate_username("alice-b"),
            UsernameValidation::InvalidCharacters
        );
        assert_eq!(
            validate_username(&"a".repeat(31)),
            UsernameValidation::TooLong
        );
    }
}
