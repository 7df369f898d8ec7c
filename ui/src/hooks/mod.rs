pub mod use_authentication;
pub mod use_busy;
pub mod use_fetch;
pub mod use_hotels;
pub mod use_logout;
pub mod use_push_route;

pub use use_authentication::use_authentication;
pub use use_busy::{BusyFlag, use_busy};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_hotels::{use_all_hotels, use_hotel, use_my_hotels};
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
