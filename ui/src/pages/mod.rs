pub mod edit_hotel;
pub mod home;
pub mod hotel_details;
pub mod login;
pub mod my_hotels;
pub mod not_found;

pub use edit_hotel::EditHotelPage;
pub use home::HomePage;
pub use hotel_details::HotelDetailsPage;
pub use login::LoginPage;
pub use my_hotels::MyHotelsPage;
pub use not_found::NotFoundPage;
