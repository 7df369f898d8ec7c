use std::rc::Rc;

use payloads::{
    HotelAmenities, HotelId,
    forms::{HotelForm, HotelSubmission, LocationSelection},
    responses,
    validation::{FieldErrors, HotelField},
};
use yew::prelude::*;

use super::form_fields::{BUTTON_DANGER, BUTTON_PRIMARY, Checkbox, TextField};
use super::{ImageAction, ImageUpload, LocationSelect};
use crate::contexts::toast::Toast;
use crate::hooks::{use_busy, use_push_route};
use crate::{Route, get_api_client};

type Flag = fn(&mut HotelAmenities) -> &mut bool;

const HOTEL_FLAGS: [(&str, Flag); 7] = [
    ("Gym", |a| &mut a.gym),
    ("Spa", |a| &mut a.spa),
    ("Bar", |a| &mut a.bar),
    ("Laundry", |a| &mut a.laundry),
    ("Pool", |a| &mut a.pool),
    ("Breakfast", |a| &mut a.breakfast),
    ("Free Wifi", |a| &mut a.free_wifi),
];

#[derive(Clone, PartialEq)]
struct FormState(HotelForm);

enum FormAction {
    Title(String),
    Description(String),
    Address(String),
    LocationDescription(String),
    Location(LocationSelection),
    Amenity(Flag, bool),
    Image(ImageAction),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Title(value) => form.title = value,
            FormAction::Description(value) => form.description = value,
            FormAction::Address(value) => form.address = value,
            FormAction::LocationDescription(value) => {
                form.location_description = value
            }
            FormAction::Location(selection) => form.location = selection,
            FormAction::Amenity(flag, on) => *flag(&mut form.amenities) = on,
            FormAction::Image(action) => action.apply(&mut form.image),
        }
        Rc::new(FormState(form))
    }
}

#[derive(Properties, PartialEq)]
pub struct HotelFormProps {
    /// The stored hotel when editing, `None` when creating.
    #[prop_or_default]
    pub hotel: Option<responses::Hotel>,
    pub notify: Callback<Toast>,
}

/// Create or edit a hotel. Saving navigates to the hotel page.
#[function_component]
pub fn HotelFormView(props: &HotelFormProps) -> Html {
    let form = {
        let hotel = props.hotel.clone();
        use_reducer(move || {
            FormState(match &hotel {
                Some(hotel) => HotelForm::from_hotel(&hotel.hotel_details),
                None => HotelForm::default(),
            })
        })
    };
    let errors = use_state(|| None::<FieldErrors<HotelField>>);
    let is_submitting = use_busy();
    let is_deleting = use_busy();
    let push_route = use_push_route();

    let existing = props.hotel.as_ref().map(|hotel| hotel.hotel_id);

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let notify = props.notify.clone();
        let push_route = push_route.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.0.image.is_busy() {
                notify.emit(Toast::error("Wait for the image to finish"));
                return;
            }

            let submission = match form.0.submission(existing) {
                Ok(submission) => submission,
                Err(field_errors) => {
                    notify.emit(Toast::error(format!("Please fix the form: {field_errors}")));
                    errors.set(Some(field_errors));
                    return;
                }
            };
            errors.set(None);
            if !is_submitting.begin() {
                return;
            }

            let is_submitting = is_submitting.clone();
            let notify = notify.clone();
            let push_route = push_route.clone();
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let saved: Result<(HotelId, &str), _> = match submission {
                    HotelSubmission::Create(hotel) => api_client
                        .create_hotel(&hotel)
                        .await
                        .map(|hotel_id| (hotel_id, "Hotel created")),
                    HotelSubmission::Update(hotel_id, patch) => api_client
                        .update_hotel(&hotel_id, &patch)
                        .await
                        .map(|hotel| (hotel.hotel_id, "Hotel updated")),
                };
                is_submitting.finish();

                match saved {
                    Ok((hotel_id, message)) => {
                        notify.emit(Toast::success(message));
                        push_route.emit(Route::hotel(hotel_id));
                    }
                    Err(e) => notify.emit(Toast::error(format!("Could not save hotel: {e}"))),
                }
            });
        })
    };

    let on_delete = {
        let is_deleting = is_deleting.clone();
        let notify = props.notify.clone();
        let push_route = push_route.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(hotel_id) = existing else {
                return;
            };
            if !is_deleting.begin() {
                return;
            }
            let is_deleting = is_deleting.clone();
            let notify = notify.clone();
            let push_route = push_route.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().delete_hotel(&hotel_id).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Hotel deleted"));
                        push_route.emit(Route::MyHotels);
                    }
                    Err(e) => {
                        notify.emit(Toast::error(format!("Could not delete hotel: {e}")));
                        is_deleting.finish();
                    }
                }
            });
        })
    };

    let text_change = |make: fn(String) -> FormAction| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(make(value)))
    };
    let on_location = {
        let form = form.clone();
        Callback::from(move |selection| form.dispatch(FormAction::Location(selection)))
    };
    let on_image = {
        let form = form.clone();
        Callback::from(move |action| form.dispatch(FormAction::Image(action)))
    };

    let error_for = |field: HotelField| {
        (*errors).as_ref().and_then(|errors| errors.message(field))
    };
    let current = &form.0;

    html! {
        <form onsubmit={on_submit} class="space-y-6 max-w-3xl">
            <TextField
                id="title"
                label="Title"
                value={current.title.clone()}
                on_change={text_change(FormAction::Title)}
                error={error_for(HotelField::Title)}
                placeholder="Beach Hotel"
            />
            <TextField
                id="description"
                label="Description"
                multiline=true
                value={current.description.clone()}
                on_change={text_change(FormAction::Description)}
                error={error_for(HotelField::Description)}
            />
            <div>
                <span class="block text-sm font-medium mb-2">{"Amenities"}</span>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-2">
                    {for HOTEL_FLAGS.iter().map(|&(label, flag)| {
                        let form = form.clone();
                        let checked = *flag(&mut current.amenities.clone());
                        html! {
                            <Checkbox
                                {label}
                                {checked}
                                on_toggle={Callback::from(move |on| form.dispatch(FormAction::Amenity(flag, on)))}
                            />
                        }
                    })}
                </div>
            </div>
            <ImageUpload
                image={current.image.clone()}
                on_action={on_image}
                notify={props.notify.clone()}
                error={error_for(HotelField::Image)}
            />
            <LocationSelect
                selection={current.location.clone()}
                on_change={on_location}
                country_error={error_for(HotelField::Country)}
                state_error={error_for(HotelField::State)}
                city_error={error_for(HotelField::City)}
            />
            <TextField
                id="address"
                label="Address"
                value={current.address.clone()}
                on_change={text_change(FormAction::Address)}
                error={error_for(HotelField::Address)}
            />
            <TextField
                id="location-description"
                label="Location description"
                multiline=true
                value={current.location_description.clone()}
                on_change={text_change(FormAction::LocationDescription)}
                error={error_for(HotelField::LocationDescription)}
                placeholder="Near the beach, ten minutes from the airport"
            />
            <div class="flex gap-3">
                <button type="submit" class={BUTTON_PRIMARY} disabled={is_submitting.is_busy()}>
                    {match (is_submitting.is_busy(), existing.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update hotel",
                        (false, false) => "Create hotel",
                    }}
                </button>
                if existing.is_some() {
                    <button type="button" class={BUTTON_DANGER} onclick={on_delete} disabled={is_deleting.is_busy()}>
                        {if is_deleting.is_busy() { "Deleting..." } else { "Delete hotel" }}
                    </button>
                }
            </div>
        </form>
    }
}
