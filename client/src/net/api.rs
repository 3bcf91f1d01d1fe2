//! REST API helpers for the Ratio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Transport failures, bad bodies
//! and `errors` envelopes all land in the same `Err` arm so pages can funnel
//! them into one notification path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::envelope::ApiError;
use super::types::{Mission, Operator};

/// Base URL of the REST backend as seen by the browser.
///
/// Defaults to the same-origin `/api` prefix proxied by `ratio-server`;
/// override at build time with `RATIO_API_BASE`.
pub const API_BASE: &str = match option_env!("RATIO_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Header carrying the access token on authenticated requests.
pub const AUTH_HEADER: &str = "ratio-auth";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn operator_path(personnel_id: &str) -> String {
    format!("/staff/{personnel_id}?children=staff_type|shift_type")
}

#[cfg(any(test, feature = "hydrate"))]
fn missions_path(personnel_id: &str) -> String {
    format!("/mission?staffId={personnel_id}&sort=-createdAt")
}

#[cfg(any(test, feature = "hydrate"))]
fn personnel_list_path() -> &'static str {
    "/staff?children=staff_type|shift_type"
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_operator_path(id: &str) -> String {
    format!("/staff/{id}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(API_BASE, path);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    super::envelope::decode_envelope(&body)
}

/// Fetch one operator with `staff_type` and `shift_type` expanded.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, bad body, or error envelope.
pub async fn fetch_operator(personnel_id: &str) -> Result<Operator, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&operator_path(personnel_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = personnel_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch an operator's missions, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, bad body, or error envelope.
pub async fn fetch_missions(personnel_id: &str) -> Result<Vec<Mission>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&missions_path(personnel_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = personnel_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every operator for the personnel list.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, bad body, or error envelope.
pub async fn fetch_personnel_list() -> Result<Vec<Operator>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(personnel_list_path()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Delete an operator via `DELETE /staff/{id}` with the `ratio-auth` header.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or error envelope.
pub async fn delete_operator(id: &str, access_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(API_BASE, &delete_operator_path(id));
        let resp = gloo_net::http::Request::delete(&url)
            .header(AUTH_HEADER, access_token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        super::envelope::decode_ack(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, access_token);
        Err(ApiError::Unavailable)
    }
}
