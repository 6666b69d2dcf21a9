//! Password reset page (`/reset-password?token=...`), reached from the
//! recovery email.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use barbershop::validation::{FieldErrors, ResetPasswordForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::button::SubmitButton;
use crate::components::input::TextField;
use crate::pages::feedback::failure_toast;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastMessage, use_toasts};
use crate::util::task::spawn;

pub const RESET_DONE: &str = "Password reset!";
pub const RESET_DONE_HINT: &str = "Sign in with your new password.";
pub const RESET_FAILED: &str = "Reset password error";
pub const RESET_FAILED_HINT: &str = "An error has occurred while resetting your password. Try again later.";
pub const RESET_TOKEN_MISSING: &str = "The reset link is missing its token. Request a new one.";

/// Token from the `token` query parameter; blank counts as missing.
pub fn reset_token(param: Option<String>) -> Option<String> {
    param.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ResetPasswordForm {
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        let Some(token) = reset_token(query.with_untracked(|q| q.get("token"))) else {
            toasts.push(ToastMessage::error(RESET_FAILED).with_description(RESET_TOKEN_MISSING));
            return;
        };
        let request = match form.validate(&token) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match auth.reset_password(&request).await {
                Ok(()) => {
                    toasts.push(ToastMessage::success(RESET_DONE).with_description(RESET_DONE_HINT));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("password reset failed: {err}");
                    toasts.push(failure_toast(RESET_FAILED, RESET_FAILED_HINT, &err));
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
                    <h1>"Reset password"</h1>
                    <TextField
                        name="password"
                        placeholder="New password"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <TextField
                        name="password_confirmation"
                        placeholder="Confirm password"
                        input_type="password"
                        value=password_confirmation
                        errors=errors
                    />
                    <SubmitButton label="Reset password" loading=busy/>
                </form>
            </div>
            <div class="auth-background"></div>
        </div>
    }
}
