//! Profile page (`/profile`): account details, password change, avatar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the form and the avatar upload replace the session user with the
//! server's answer through the auth context, so the header and the stored
//! user update together.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use barbershop::types::{AvatarUpload, User};
use barbershop::validation::{FieldErrors, ProfileForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::SubmitButton;
use crate::components::header::Avatar;
use crate::components::input::TextField;
use crate::pages::feedback::failure_toast;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastMessage, use_toasts};
use crate::util::task::spawn;

pub const PROFILE_UPDATED: &str = "Profile updated!";
pub const PROFILE_UPDATED_HINT: &str = "Your profile data has been updated successfully.";
pub const PROFILE_FAILED: &str = "Profile update error";
pub const PROFILE_FAILED_HINT: &str = "An error has occurred when updating profile. Try again later.";
pub const AVATAR_UPDATED: &str = "Avatar has been updated!";
pub const AVATAR_FAILED: &str = "Avatar update error";
pub const AVATAR_FAILED_HINT: &str = "Could not upload this image. Try another file.";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Form prefilled with the signed-in user's name and email.
pub fn profile_form_for(user: Option<&User>) -> ProfileForm {
    user.map(|u| ProfileForm { name: u.name.clone(), email: u.email.clone(), ..ProfileForm::default() })
        .unwrap_or_default()
}

/// Upload body for a picked file; browsers report an empty type for unknown
/// extensions.
pub fn avatar_upload(file_name: String, content_type: String, bytes: Vec<u8>) -> AvatarUpload {
    let content_type = if content_type.is_empty() { FALLBACK_CONTENT_TYPE.to_owned() } else { content_type };
    AvatarUpload { file_name, content_type, bytes }
}

#[cfg(feature = "csr")]
async fn read_file(file: &web_sys::File) -> Result<AvatarUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(avatar_upload(file.name(), file.type_(), bytes))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let initial = profile_form_for(auth.user().as_ref());
    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let old_password = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    let submit_auth = auth.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            old_password: old_password.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        let update = match form.validate() {
            Ok(update) => update,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let auth = submit_auth.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match auth.update_profile(&update).await {
                Ok(_) => {
                    navigate("/dashboard", NavigateOptions::default());
                    toasts.push(ToastMessage::success(PROFILE_UPDATED).with_description(PROFILE_UPDATED_HINT));
                }
                Err(err) => {
                    log::warn!("profile update failed: {err}");
                    toasts.push(failure_toast(PROFILE_FAILED, PROFILE_FAILED_HINT, &err));
                }
            }
            busy.set(false);
        });
    };

    let avatar_auth = auth.clone();
    let on_avatar_change = move |ev: leptos::ev::Event| {
        if uploading.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            let auth = avatar_auth.clone();
            spawn(async move {
                let result = match read_file(&file).await {
                    Ok(upload) => auth.update_avatar(&upload).await.map_err(|err| {
                        log::warn!("avatar upload failed: {err}");
                        failure_toast(AVATAR_FAILED, AVATAR_FAILED_HINT, &err)
                    }),
                    Err(err) => {
                        log::warn!("avatar read failed: {err}");
                        Err(ToastMessage::error(AVATAR_FAILED).with_description(AVATAR_FAILED_HINT))
                    }
                };
                match result {
                    Ok(_) => toasts.push(ToastMessage::success(AVATAR_UPDATED)),
                    Err(toast) => toasts.push(toast),
                };
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, &avatar_auth);
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <A href="/dashboard">"← Back"</A>
            </header>
            <div class="profile-page__content">
                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="avatar-input" class:avatar-input--busy=move || uploading.get()>
                        {move || auth.user().map(|user| view! { <Avatar user=user size_class="avatar--large"/> })}
                        <label for="avatar" title="Change avatar">
                            "📷"
                            <input type="file" id="avatar" accept="image/*" on:change=on_avatar_change/>
                        </label>
                    </div>
                    <h1>"My profile"</h1>
                    <TextField name="name" placeholder="Name" value=name errors=errors/>
                    <TextField name="email" placeholder="E-mail" value=email errors=errors/>
                    <div class="profile-page__passwords">
                        <TextField
                            name="old_password"
                            placeholder="Current password"
                            input_type="password"
                            value=old_password
                            errors=errors
                        />
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
                    </div>
                    <SubmitButton label="Confirm changes" loading=busy/>
                </form>
            </div>
        </div>
    }
}
