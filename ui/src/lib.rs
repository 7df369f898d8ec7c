use payloads::{APIClient, HotelId};
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod state;

use components::MainLayout;
use contexts::toast::{Toast, ToastProvider, use_toast};
use pages::{
    EditHotelPage, HomePage, HotelDetailsPage, LoginPage, MyHotelsPage,
    NotFoundPage,
};
pub(crate) use state::{AuthState, State};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            // Fallback to same origin
            web_sys::window().and_then(|window| window.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppShell />
            </ToastProvider>
        </BrowserRouter>
    }
}

/// Everything inside the providers. Pages that can fail get the toast sink
/// as a prop.
#[function_component]
fn AppShell() -> Html {
    hooks::use_authentication();
    let notify = use_toast();

    html! {
        <MainLayout>
            <Switch<Route> render={move |route| switch(route, notify.clone())} />
        </MainLayout>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/my-hotels")]
    MyHotels,
    #[at("/hotel/new")]
    NewHotel,
    #[at("/hotel/:id")]
    HotelDetails { id: String },
    #[at("/hotel/:id/edit")]
    EditHotel { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn hotel(hotel_id: HotelId) -> Self {
        Self::HotelDetails {
            id: hotel_id.to_string(),
        }
    }

    pub fn edit_hotel(hotel_id: HotelId) -> Self {
        Self::EditHotel {
            id: hotel_id.to_string(),
        }
    }
}

fn parse_hotel_id(id: &str) -> Option<HotelId> {
    Uuid::parse_str(id).ok().map(HotelId)
}

fn switch(route: Route, notify: Callback<Toast>) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::MyHotels => html! { <MyHotelsPage /> },
        Route::NewHotel => html! { <EditHotelPage hotel_id={None} {notify} /> },
        Route::HotelDetails { id } => match parse_hotel_id(&id) {
            Some(hotel_id) => html! { <HotelDetailsPage {hotel_id} {notify} /> },
            None => html! { <NotFoundPage /> },
        },
        Route::EditHotel { id } => match parse_hotel_id(&id) {
            Some(hotel_id) => {
                html! { <EditHotelPage hotel_id={Some(hotel_id)} {notify} /> }
            }
            None => html! { <NotFoundPage /> },
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
