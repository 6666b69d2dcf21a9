//! REST API transport for the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with a transport error,
//! since `fetch` only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::from_status` so a 401 on an
//! authenticated call reaches the session store as `Unauthorized`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use barbershop::api::{
    AVATAR_FIELD, AVATAR_PATH, Api, ApiError, Credential, DAY_APPOINTMENTS_PATH, FORGOT_PASSWORD_PATH, PROFILE_PATH,
    RESET_PASSWORD_PATH, SESSIONS_PATH, USERS_PATH, endpoint, month_availability_path,
};
use barbershop::types::{
    Appointment, AvatarUpload, Credentials, DayQuery, ForgotPasswordRequest, MonthAvailabilityItem, MonthQuery,
    ProfileUpdate, ResetPasswordRequest, SessionResponse, SignUpRequest, User,
};
#[cfg(feature = "csr")]
use gloo_net::http::{Request, Response};

/// `fetch`-backed API client rooted at a base URL.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[cfg(any(test, feature = "csr"))]
fn month_query_pairs(query: MonthQuery) -> [(&'static str, String); 2] {
    [("year", query.year.to_string()), ("month", query.month.to_string())]
}

#[cfg(any(test, feature = "csr"))]
fn day_query_pairs(query: DayQuery) -> [(&'static str, String); 3] {
    [("year", query.year.to_string()), ("month", query.month.to_string()), ("day", query.day.to_string())]
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("fetch is only available in the browser".to_owned())
}

#[cfg(feature = "csr")]
async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = error_body(response.text().await);
    log::warn!("{} answered {status}", response.url());
    Err(ApiError::from_status(status, body))
}

/// Body of a rejected request; an unreadable body counts as empty.
#[cfg(any(test, feature = "csr"))]
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|err| {
        log::debug!("rejected response body unreadable: {err}");
        String::new()
    })
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build the multipart body for an avatar upload.
#[cfg(feature = "csr")]
fn avatar_form(upload: &AvatarUpload) -> Result<web_sys::FormData, ApiError> {
    let encode = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(encode)?;
    let form = web_sys::FormData::new().map_err(encode)?;
    form.append_with_blob_and_filename(AVATAR_FIELD, &blob, &upload.file_name)
        .map_err(encode)?;
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl Api for BrowserApi {
    async fn create_session(&self, credentials: &Credentials) -> Result<SessionResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = send(Request::post(&self.url(SESSIONS_PATH)).json(credentials)).await?;
            decode(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(SESSIONS_PATH), credentials);
            Err(unavailable())
        }
    }

    async fn create_user(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            send(Request::post(&self.url(USERS_PATH)).json(request)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(USERS_PATH), request);
            Err(unavailable())
        }
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            send(Request::post(&self.url(FORGOT_PASSWORD_PATH)).json(request)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(FORGOT_PASSWORD_PATH), request);
            Err(unavailable())
        }
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            send(Request::post(&self.url(RESET_PASSWORD_PATH)).json(request)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(RESET_PASSWORD_PATH), request);
            Err(unavailable())
        }
    }

    async fn update_profile(&self, credential: &Credential, update: &ProfileUpdate) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = Request::put(&self.url(PROFILE_PATH))
                .header("Authorization", &credential.header_value())
                .json(update);
            decode(send(request).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(PROFILE_PATH), credential, update);
            Err(unavailable())
        }
    }

    async fn update_avatar(&self, credential: &Credential, upload: &AvatarUpload) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let form = avatar_form(upload)?;
            let request = Request::patch(&self.url(AVATAR_PATH))
                .header("Authorization", &credential.header_value())
                .body(form);
            decode(send(request).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(AVATAR_PATH), AVATAR_FIELD, credential, upload);
            Err(unavailable())
        }
    }

    async fn month_availability(
        &self,
        credential: &Credential,
        provider_id: &str,
        query: MonthQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, ApiError> {
        let url = self.url(&month_availability_path(provider_id));
        #[cfg(feature = "csr")]
        {
            let request = Request::get(&url)
                .header("Authorization", &credential.header_value())
                .query(month_query_pairs(query))
                .build();
            decode(send(request).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, credential, query);
            Err(unavailable())
        }
    }

    async fn day_appointments(&self, credential: &Credential, query: DayQuery) -> Result<Vec<Appointment>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = Request::get(&self.url(DAY_APPOINTMENTS_PATH))
                .header("Authorization", &credential.header_value())
                .query(day_query_pairs(query))
                .build();
            decode(send(request).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(DAY_APPOINTMENTS_PATH), credential, query);
            Err(unavailable())
        }
    }
}
