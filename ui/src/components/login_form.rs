use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    CreateAccount,
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub submit_text: AttrValue,
    pub mode: AuthMode,
    pub on_success: Callback<responses::UserProfile>,
}

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
     rounded-md shadow-sm bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
     focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500";

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Checks done before anything is sent. Account creation logs in on success,
/// so both modes end with a session.
fn check_input(
    mode: AuthMode,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if username.is_empty() || password.is_empty() {
        return Err("Please enter both username and password".into());
    }
    if mode == AuthMode::CreateAccount {
        if let Some(message) =
            requests::validate_username(username).error_message()
        {
            return Err(message.into());
        }
        if password != confirm_password {
            return Err("Passwords do not match".into());
        }
        if password.len() < 6 {
            return Err("Password must be at least 6 characters".into());
        }
    }
    Ok(())
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();
        let mode = props.mode;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username = input_value(&username_ref).trim().to_string();
            let password = input_value(&password_ref);
            let confirm_password = input_value(&confirm_password_ref);

            if let Err(message) =
                check_input(mode, &username, &password, &confirm_password)
            {
                error_message.set(Some(message));
                return;
            }

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let session = match mode {
                    AuthMode::Login => {
                        api_client
                            .login(&requests::LoginCredentials {
                                username,
                                password,
                            })
                            .await
                    }
                    AuthMode::CreateAccount => {
                        api_client
                            .create_account(&requests::CreateAccount {
                                username,
                                password,
                            })
                            .await
                    }
                };

                let profile = match session {
                    Ok(()) => api_client.user_profile().await.map_err(|_| {
                        "Signed in but failed to load profile".to_string()
                    }),
                    Err(e) => Err(e.to_string()),
                };

                match profile {
                    Ok(profile) => {
                        dispatch.reduce_mut(|state| {
                            state.auth_state =
                                AuthState::LoggedIn(profile.clone());
                        });
                        on_success.emit(profile);
                    }
                    Err(message) => {
                        dispatch.reduce_mut(|state| state.logout());
                        error_message.set(Some(message));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <div class="mb-8 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {&props.title}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {&props.description}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                <div>
                    <label for="username" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Username"}
                    </label>
                    <input
                        ref={username_ref}
                        type="text"
                        id="username"
                        autocomplete="username"
                        required={true}
                        class={INPUT_CLASSES}
                        placeholder="Enter your username"
                    />
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        autocomplete={if props.mode == AuthMode::CreateAccount { "new-password" } else { "current-password" }}
                        required={true}
                        class={INPUT_CLASSES}
                        placeholder={if props.mode == AuthMode::CreateAccount { "Choose a password" } else { "Enter your password" }}
                    />
                </div>

                if props.mode == AuthMode::CreateAccount {
                    <div>
                        <label for="confirm-password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Confirm Password"}
                        </label>
                        <input
                            ref={confirm_password_ref}
                            type="password"
                            id="confirm-password"
                            autocomplete="new-password"
                            required={true}
                            class={INPUT_CLASSES}
                            placeholder="Confirm your password"
                        />
                    </div>
                }

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full flex justify-center py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200"
                >
                    if *is_loading {
                        {match props.mode {
                            AuthMode::Login => "Signing in...",
                            AuthMode::CreateAccount => "Creating account...",
                        }}
                    } else {
                        {&props.submit_text}
                    }
                </button>
            </form>
        </div>
    }
}
