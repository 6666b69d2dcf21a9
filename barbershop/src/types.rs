//! REST wire types shared by every front end.
//!
//! DESIGN
//! ======
//! Field names mirror the API's snake_case JSON exactly so the serialized user
//! written to the persistent store is the same document the server returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The signed-in account as returned by `sessions`, `profile` and `/users/avatar`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Public URL of the uploaded avatar, absent until one is uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of `POST sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Success body of `POST sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /password/forgot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /password/reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirmation: String,
    pub token: String,
}

/// Password change carried by a profile update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Body of `PUT profile`.
///
/// The password fields are only sent when the user typed their current
/// password; otherwise only name and email go over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub password: Option<PasswordChange>,
}

/// File sent as the `avatar` part of `PATCH /users/avatar`.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Query of `GET /providers/{id}/month-availability`. `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u8,
}

/// Query of `GET /appointments/me`. `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DayQuery {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// One entry of the month availability list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityItem {
    pub day: u8,
    pub available: bool,
}

/// Customer summary embedded in an appointment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A booked slot on the provider's agenda.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub user: AppointmentUser,
}
