//! Password recovery request page (`/forgot-password`).

use barbershop::validation::{FieldErrors, ForgotPasswordForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::SubmitButton;
use crate::components::input::TextField;
use crate::pages::feedback::failure_toast;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastMessage, use_toasts};
use crate::util::task::spawn;

pub const RECOVERY_SENT: &str = "Recovery email sent";
pub const RECOVERY_SENT_HINT: &str = "Check your inbox for the link to reset your password.";
pub const RECOVERY_FAILED: &str = "Password recovery error";
pub const RECOVERY_FAILED_HINT: &str = "An error has occurred while trying to recover your password.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match (ForgotPasswordForm { email: email.get_untracked() }).validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let auth = auth.clone();
        spawn(async move {
            match auth.forgot_password(&request).await {
                Ok(()) => {
                    toasts.push(ToastMessage::success(RECOVERY_SENT).with_description(RECOVERY_SENT_HINT));
                }
                Err(err) => {
                    log::warn!("password recovery failed: {err}");
                    toasts.push(failure_toast(RECOVERY_FAILED, RECOVERY_FAILED_HINT, &err));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <span class="logo">"Barbershop"</span>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <h1>"Recover password"</h1>
                    <TextField name="email" placeholder="E-mail" value=email errors=errors/>
                    <SubmitButton label="Recover" loading=busy/>
                </form>
                <A href="/" attr:class="auth-card__alt">
                    "Back to Log in"
                </A>
            </div>
            <div class="auth-background"></div>
        </div>
    }
}
