//! REST API seam and endpoint table.
//!
//! DESIGN
//! ======
//! There is no client-wide default `Authorization` header. Every
//! authenticated call receives the session's [`Credential`] explicitly, so a
//! signed-out session has nothing left to leak into later requests.
//!
//! Implementations live with their transport: `gloo-net` in the browser
//! client, `reqwest` in the cli. Tests use hand-written mocks.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::types::{
    Appointment, AvatarUpload, Credentials, DayQuery, ForgotPasswordRequest, MonthAvailabilityItem, MonthQuery,
    ProfileUpdate, ResetPasswordRequest, SessionResponse, SignUpRequest, User,
};

pub const SESSIONS_PATH: &str = "sessions";
pub const USERS_PATH: &str = "/users";
pub const FORGOT_PASSWORD_PATH: &str = "/password/forgot";
pub const RESET_PASSWORD_PATH: &str = "/password/reset";
pub const PROFILE_PATH: &str = "profile";
pub const AVATAR_PATH: &str = "/users/avatar";
pub const DAY_APPOINTMENTS_PATH: &str = "/appointments/me";

/// Multipart field carrying the avatar file.
pub const AVATAR_FIELD: &str = "avatar";

/// Path of the month availability listing for `provider_id`.
#[must_use]
pub fn month_availability_path(provider_id: &str) -> String {
    format!("/providers/{provider_id}/month-availability")
}

/// Join `path` onto `base_url` with exactly one `/` between them.
///
/// Relative (`sessions`) and absolute (`/password/forgot`) paths both land
/// under the base URL, including any path prefix it carries.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{path}")
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered 401 to an authenticated request.
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered with any other non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    /// A 2xx body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// The request body could not be built.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Status { status, body }
        }
    }

    /// Short text suitable for a toast description.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Unauthorized => "Your session has expired. Sign in again.".to_owned(),
            Self::Status { body, .. } => server_message(body).unwrap_or_else(|| self.to_string()),
            Self::Decode(_) | Self::Encode(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

/// Pull `message` out of the API's `{"status":"error","message":"..."}` body.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.message)
}

/// Bearer credential for one signed-in session.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Value for the `Authorization` header: `Bearer <token>`.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub(crate) fn token(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(Bearer ***)")
    }
}

/// One method per REST call the front ends make.
///
/// Futures are not required to be `Send` so browser fetch futures qualify.
#[async_trait::async_trait(?Send)]
pub trait Api {
    /// `POST sessions`.
    async fn create_session(&self, credentials: &Credentials) -> Result<SessionResponse, ApiError>;

    /// `POST /users`.
    async fn create_user(&self, request: &SignUpRequest) -> Result<(), ApiError>;

    /// `POST /password/forgot`.
    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError>;

    /// `POST /password/reset`.
    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError>;

    /// `PUT profile`.
    async fn update_profile(&self, credential: &Credential, update: &ProfileUpdate) -> Result<User, ApiError>;

    /// `PATCH /users/avatar`.
    async fn update_avatar(&self, credential: &Credential, upload: &AvatarUpload) -> Result<User, ApiError>;

    /// `GET /providers/{id}/month-availability`.
    async fn month_availability(
        &self,
        credential: &Credential,
        provider_id: &str,
        query: MonthQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, ApiError>;

    /// `GET /appointments/me`.
    async fn day_appointments(&self, credential: &Credential, query: DayQuery) -> Result<Vec<Appointment>, ApiError>;
}
