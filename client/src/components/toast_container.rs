//! Stack of toasts in the top-right corner.
//!
//! Each toast removes itself after [`TOAST_DURATION_MS`] unless the user
//! closes it first.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::toast::{TOAST_DURATION_MS, ToastHandle, ToastMessage, use_toasts};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="toast-container">
            <For
                each=move || toasts.messages()
                key=|message| message.id
                children=move |message| view! { <Toast message=message/> }
            />
        </div>
    }
}

#[component]
fn Toast(message: ToastMessage) -> impl IntoView {
    let toasts = use_toasts();
    let id = message.id;
    schedule_dismiss(toasts, id);

    let class = format!(
        "toast {}{}",
        message.kind.class(),
        if message.description.is_some() { "" } else { " toast--compact" }
    );

    view! {
        <div class=class role="alert">
            <div class="toast__body">
                <strong>{message.title}</strong>
                {message.description.map(|text| view! { <p>{text}</p> })}
            </div>
            <button type="button" class="toast__close" on:click=move |_| toasts.remove(id)>
                "×"
            </button>
        </div>
    }
}

fn schedule_dismiss(toasts: ToastHandle, id: Uuid) {
    crate::util::task::spawn(async move {
        #[cfg(feature = "csr")]
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        #[cfg(not(feature = "csr"))]
        let _ = TOAST_DURATION_MS;
        toasts.remove(id);
    });
}
