use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{AuthState, Route, State};

const NAV_LINK: &str = "text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white";

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();

    let account = match &state.auth_state {
        AuthState::LoggedIn(profile) => html! {
            <>
                <Link<Route> to={Route::NewHotel} classes={NAV_LINK}>{"Add Hotel"}</Link<Route>>
                <Link<Route> to={Route::MyHotels} classes={NAV_LINK}>{"My Hotels"}</Link<Route>>
                <span class="text-sm text-neutral-500">{&profile.username}</span>
                <button onclick={on_logout} class={NAV_LINK}>{"Log out"}</button>
            </>
        },
        AuthState::LoggedOut => html! {
            <Link<Route> to={Route::Login} classes={NAV_LINK}>{"Sign in"}</Link<Route>>
        },
        AuthState::Unknown => html! {},
    };

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900 dark:text-white">
                        {"Hotels"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-4">
                        {account}
                    </nav>
                </div>
            </div>
        </header>
    }
}
