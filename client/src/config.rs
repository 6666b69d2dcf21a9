//! Build-time client configuration.

/// API used when `BARBERSHOP_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Base URL of the booking API, baked in at compile time.
pub fn api_base_url() -> &'static str {
    option_env!("BARBERSHOP_API_URL").unwrap_or(DEFAULT_API_URL)
}
