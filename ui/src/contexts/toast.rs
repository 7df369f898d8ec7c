//! Notifications shown in the corner of the page.
//!
//! Components never reach for the context themselves: the app shell turns it
//! into a `Callback<Toast>` with [`use_toast`] and hands that down as a prop
//! to whatever can fail.

use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(5000),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    /// Oldest first.
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

fn show(context: &ToastContext, toast: Toast) {
    let toast_id = toast.id;
    let duration = toast.duration;

    match toast.toast_type {
        ToastType::Error => tracing::warn!("{}", toast.message),
        ToastType::Success => tracing::debug!("{}", toast.message),
    }
    context.dispatch(ToastAction::Add(toast));

    if let Some(duration_ms) = duration {
        let context = context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }
}

/// The notification sink. Outside a [`ToastProvider`] toasts only go to the
/// log.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    let context = use_context::<ToastContext>();
    use_callback(context, |toast: Toast, context| match context {
        Some(context) => show(context, toast),
        None => tracing::warn!("Dropped toast: {}", toast.message),
    })
}
