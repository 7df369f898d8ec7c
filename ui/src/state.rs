use payloads::responses;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    /// Whether the logged in user owns the hotel.
    pub fn owns(&self, hotel: &responses::Hotel) -> bool {
        self.profile()
            .is_some_and(|profile| profile.user_id == hotel.owner_id)
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
