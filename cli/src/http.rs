//! `reqwest` transport for the barbershop REST API.
//!
//! ERROR HANDLING
//! ==============
//! Connection failures map to `ApiError::Transport`; non-2xx answers go
//! through `ApiError::from_status` so a 401 surfaces as `Unauthorized` and
//! the session store can sign out.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use barbershop::api::{
    AVATAR_FIELD, AVATAR_PATH, Api, ApiError, Credential, DAY_APPOINTMENTS_PATH, FORGOT_PASSWORD_PATH, PROFILE_PATH,
    RESET_PASSWORD_PATH, SESSIONS_PATH, USERS_PATH, endpoint, month_availability_path,
};
use barbershop::types::{
    Appointment, AvatarUpload, Credentials, DayQuery, ForgotPasswordRequest, MonthAvailabilityItem, MonthQuery,
    ProfileUpdate, ResetPasswordRequest, SessionResponse, SignUpRequest, User,
};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().clone();
    let body = error_body(response.text().await);
    tracing::warn!(%url, status = status.as_u16(), "request rejected");
    Err(ApiError::from_status(status.as_u16(), body))
}

/// Body of a rejected request; an unreadable body counts as empty.
fn error_body(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|err| {
        tracing::debug!(error = %err, "rejected response body unreadable");
        String::new()
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn avatar_form(upload: &AvatarUpload) -> Result<Form, ApiError> {
    let part = Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&upload.content_type)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(Form::new().part(AVATAR_FIELD, part))
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn create_session(&self, credentials: &Credentials) -> Result<SessionResponse, ApiError> {
        let response = send(self.client.post(self.url(SESSIONS_PATH)).json(credentials)).await?;
        decode(response).await
    }

    async fn create_user(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        send(self.client.post(self.url(USERS_PATH)).json(request)).await?;
        Ok(())
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        send(self.client.post(self.url(FORGOT_PASSWORD_PATH)).json(request)).await?;
        Ok(())
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        send(self.client.post(self.url(RESET_PASSWORD_PATH)).json(request)).await?;
        Ok(())
    }

    async fn update_profile(&self, credential: &Credential, update: &ProfileUpdate) -> Result<User, ApiError> {
        let request = self
            .client
            .put(self.url(PROFILE_PATH))
            .header(AUTHORIZATION, credential.header_value())
            .json(update);
        decode(send(request).await?).await
    }

    async fn update_avatar(&self, credential: &Credential, upload: &AvatarUpload) -> Result<User, ApiError> {
        let request = self
            .client
            .patch(self.url(AVATAR_PATH))
            .header(AUTHORIZATION, credential.header_value())
            .multipart(avatar_form(upload)?);
        decode(send(request).await?).await
    }

    async fn month_availability(
        &self,
        credential: &Credential,
        provider_id: &str,
        query: MonthQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, ApiError> {
        let request = self
            .client
            .get(self.url(&month_availability_path(provider_id)))
            .header(AUTHORIZATION, credential.header_value())
            .query(&query);
        decode(send(request).await?).await
    }

    async fn day_appointments(&self, credential: &Credential, query: DayQuery) -> Result<Vec<Appointment>, ApiError> {
        let request = self
            .client
            .get(self.url(DAY_APPOINTMENTS_PATH))
            .header(AUTHORIZATION, credential.header_value())
            .query(&query);
        decode(send(request).await?).await
    }
}
