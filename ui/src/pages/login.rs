use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{LoginForm, login_form::AuthMode};
use crate::hooks::use_push_route;
use crate::{Route, State};

#[function_component]
pub fn LoginPage() -> Html {
    let push_route = use_push_route();
    let mode = use_state(|| AuthMode::Login);
    let (state, _) = use_store::<State>();

    // Redirect to home if already logged in
    {
        let push_route = push_route.clone();
        use_effect_with(state.is_authenticated(), move |is_auth| {
            if *is_auth {
                push_route.emit(Route::Home);
            }
        });
    }

    let on_auth_success = {
        let push_route = push_route.clone();
        Callback::from(move |_profile: responses::UserProfile| {
            push_route.emit(Route::MyHotels);
        })
    };

    let toggle_mode = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                AuthMode::Login => AuthMode::CreateAccount,
                AuthMode::CreateAccount => AuthMode::Login,
            });
        })
    };

    let (title, description, submit_text, toggle_text, toggle_link_text) =
        match *mode {
            AuthMode::Login => (
                "Sign in",
                "Sign in to manage your hotels",
                "Sign in",
                "Don't have an account?",
                "Create one",
            ),
            AuthMode::CreateAccount => (
                "Create your account",
                "List your hotels and rooms",
                "Create account",
                "Already have an account?",
                "Sign in",
            ),
        };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <LoginForm
                    {title}
                    {description}
                    {submit_text}
                    mode={*mode}
                    on_success={on_auth_success}
                />
                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {toggle_text}
                    {" "}
                    <button
                        onclick={toggle_mode}
                        class="text-neutral-900 dark:text-neutral-100 font-medium underline"
                    >
                        {toggle_link_text}
                    </button>
                </p>
            </div>
        </div>
    }
}
