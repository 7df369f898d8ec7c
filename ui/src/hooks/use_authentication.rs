use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Check the session once on startup and load the profile if there is one.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            let profile = match api_client.login_check().await {
                Ok(true) => api_client.user_profile().await.ok(),
                Ok(false) => None,
                Err(e) => {
                    // Network error or other issue, assume logged out
                    tracing::warn!("Login check failed: {e}");
                    None
                }
            };
            dispatch.reduce_mut(|state| match profile {
                Some(profile) => state.auth_state = AuthState::LoggedIn(profile),
                None => state.logout(),
            });
        });
    });
}
