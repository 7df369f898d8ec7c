use std::rc::Rc;

use payloads::{
    HotelId, RoomAmenities,
    forms::{RoomForm, RoomSubmission},
    responses,
    validation::{FieldErrors, RoomField},
};
use yew::prelude::*;

use super::form_fields::{BUTTON_PRIMARY, BUTTON_SECONDARY, Checkbox, NumberField, TextField};
use super::{ImageAction, ImageUpload};
use crate::contexts::toast::Toast;
use crate::get_api_client;
use crate::hooks::use_busy;

type Flag = fn(&mut RoomAmenities) -> &mut bool;

const ROOM_FLAGS: [(&str, Flag); 10] = [
    ("Room Service", |a| &mut a.room_service),
    ("TV", |a| &mut a.tv),
    ("Balcony", |a| &mut a.balcony),
    ("Free Wifi", |a| &mut a.free_wifi),
    ("City View", |a| &mut a.city_view),
    ("Ocean View", |a| &mut a.ocean_view),
    ("Forest View", |a| &mut a.forest_view),
    ("Mountain View", |a| &mut a.mountain_view),
    ("Air Condition", |a| &mut a.air_condition),
    ("Sound Proof", |a| &mut a.sound_proof),
];

type Count = fn(&mut RoomForm) -> &mut i64;

const ROOM_COUNTS: [(&str, &str, RoomField, Count); 6] = [
    ("bed-count", "Beds", RoomField::BedCount, |f| &mut f.bed_count),
    ("guest-count", "Guests", RoomField::GuestCount, |f| &mut f.guest_count),
    ("bathroom-count", "Bathrooms", RoomField::BathroomCount, |f| &mut f.bathroom_count),
    ("king-bed", "King beds", RoomField::KingBed, |f| &mut f.king_bed),
    ("queen-bed", "Queen beds", RoomField::QueenBed, |f| &mut f.queen_bed),
    ("room-price", "Price per night ($)", RoomField::RoomPrice, |f| &mut f.room_price),
];

#[derive(Clone, PartialEq)]
struct FormState(RoomForm);

enum FormAction {
    Title(String),
    Description(String),
    Count(Count, i64),
    Amenity(Flag, bool),
    Image(ImageAction),
    Reset,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Title(value) => form.title = value,
            FormAction::Description(value) => form.description = value,
            FormAction::Count(count, value) => *count(&mut form) = value,
            FormAction::Amenity(flag, on) => *flag(&mut form.amenities) = on,
            FormAction::Image(action) => action.apply(&mut form.image),
            FormAction::Reset => form = empty_room_form(),
        }
        Rc::new(FormState(form))
    }
}

fn empty_room_form() -> RoomForm {
    RoomForm {
        bed_count: 1,
        guest_count: 1,
        bathroom_count: 1,
        ..Default::default()
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomFormProps {
    pub hotel_id: HotelId,
    /// The stored room when editing, `None` when adding one.
    #[prop_or_default]
    pub room: Option<responses::Room>,
    pub notify: Callback<Toast>,
    pub on_saved: Callback<()>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn RoomFormView(props: &RoomFormProps) -> Html {
    let form = {
        let room = props.room.clone();
        use_reducer(move || {
            FormState(match &room {
                Some(room) => RoomForm::from_room(&room.room_details),
                None => empty_room_form(),
            })
        })
    };
    let errors = use_state(|| None::<FieldErrors<RoomField>>);
    let is_submitting = use_busy();

    let existing = props.room.as_ref().map(|room| room.room_id);
    let hotel_id = props.hotel_id;

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let notify = props.notify.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.0.image.is_busy() {
                notify.emit(Toast::error("Wait for the image to finish"));
                return;
            }

            let submission = match form.0.submission(hotel_id, existing) {
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

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let notify = notify.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let saved = match submission {
                    RoomSubmission::Create(room) => api_client
                        .create_room(&room)
                        .await
                        .map(|_| "Room added"),
                    RoomSubmission::Update(room_id, patch) => api_client
                        .update_room(&room_id, &patch)
                        .await
                        .map(|_| "Room updated"),
                };
                is_submitting.finish();

                match saved {
                    Ok(message) => {
                        notify.emit(Toast::success(message));
                        if existing.is_none() {
                            // ready for the next room
                            form.dispatch(FormAction::Reset);
                        }
                        on_saved.emit(());
                    }
                    Err(e) => notify.emit(Toast::error(format!("Could not save room: {e}"))),
                }
            });
        })
    };

    let text_change = |make: fn(String) -> FormAction| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(make(value)))
    };
    let on_image = {
        let form = form.clone();
        Callback::from(move |action| form.dispatch(FormAction::Image(action)))
    };

    let error_for = |field: RoomField| {
        (*errors).as_ref().and_then(|errors| errors.message(field))
    };
    let current = &form.0;

    html! {
        <form onsubmit={on_submit} class="space-y-4 p-4 border border-neutral-200 dark:border-neutral-700 rounded-lg">
            <TextField
                id="room-title"
                label="Room title"
                value={current.title.clone()}
                on_change={text_change(FormAction::Title)}
                error={error_for(RoomField::Title)}
                placeholder="Double Room"
            />
            <TextField
                id="room-description"
                label="Room description"
                multiline=true
                value={current.description.clone()}
                on_change={text_change(FormAction::Description)}
                error={error_for(RoomField::Description)}
            />
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {for ROOM_COUNTS.iter().map(|&(id, label, field, count)| {
                    let form = form.clone();
                    let value = *count(&mut current.clone());
                    html! {
                        <NumberField
                            {id}
                            {label}
                            {value}
                            on_change={Callback::from(move |value| form.dispatch(FormAction::Count(count, value)))}
                            error={error_for(field)}
                        />
                    }
                })}
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-2">
                {for ROOM_FLAGS.iter().map(|&(label, flag)| {
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
            <ImageUpload
                image={current.image.clone()}
                on_action={on_image}
                notify={props.notify.clone()}
                error={error_for(RoomField::Image)}
            />
            <div class="flex gap-3">
                <button type="submit" class={BUTTON_PRIMARY} disabled={is_submitting.is_busy()}>
                    {match (is_submitting.is_busy(), existing.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update room",
                        (false, false) => "Add room",
                    }}
                </button>
                if let Some(on_cancel) = props.on_cancel.clone() {
                    <button type="button" class={BUTTON_SECONDARY} onclick={on_cancel.reform(|_| ())}>
                        {"Cancel"}
                    </button>
                }
            </div>
        </form>
    }
}
