//! Toasts for failed page actions.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use barbershop::api::{ApiError, server_message};
use barbershop::session::SessionError;

use crate::state::toast::ToastMessage;

/// Error toast titled `title`.
///
/// The description prefers what the server said, then connection and
/// session problems, and otherwise falls back to the page's `fallback` text.
pub fn failure_toast(title: &str, fallback: &str, err: &SessionError) -> ToastMessage {
    let description = match err {
        SessionError::Api(ApiError::Status { body, .. }) => server_message(body).unwrap_or_else(|| fallback.to_owned()),
        SessionError::Api(ApiError::Transport(_)) | SessionError::Expired | SessionError::NotSignedIn => {
            err.user_message()
        }
        _ => fallback.to_owned(),
    };
    ToastMessage::error(title).with_description(description)
}
