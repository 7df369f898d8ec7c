pub mod amenity_item;
pub mod form_fields;
pub mod hotel_card;
pub mod hotel_form;
pub mod image_upload;
pub mod layout;
pub mod location_select;
pub mod login_form;
pub mod room_card;
pub mod room_form;
pub mod toast;

pub use amenity_item::AmenityList;
pub use hotel_card::HotelCard;
pub use hotel_form::HotelFormView;
pub use image_upload::{ImageAction, ImageUpload};
pub use layout::{Header, MainLayout};
pub use location_select::LocationSelect;
pub use login_form::LoginForm;
pub use room_card::RoomCard;
pub use room_form::RoomFormView;
pub use toast::ToastContainer;
