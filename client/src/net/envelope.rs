//! Response envelope decoding for the Ratio REST backend.
//!
//! The backend signals failure by returning a JSON object with an `errors`
//! key, often with a 2xx status. Every response body is run through
//! [`decode_envelope`] so callers match on a `Result` instead of probing
//! for the key themselves.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an `{ "errors": ... }` envelope.
    #[error("server returned errors: {errors}")]
    Server { errors: serde_json::Value },

    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The body was not JSON or did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// REST calls only run in the browser; SSR renders the loading state.
    #[error("not available on server")]
    Unavailable,
}

/// Decode a response body, mapping an `errors` envelope to [`ApiError::Server`].
///
/// # Errors
///
/// Returns [`ApiError::Server`] when the body carries an `errors` key and
/// [`ApiError::Decode`] when it is not valid JSON for `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(errors) = error_envelope(&value) {
        return Err(ApiError::Server { errors: errors.clone() });
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response whose payload is not needed (DELETE).
///
/// An empty body counts as success; otherwise only the envelope is checked.
///
/// # Errors
///
/// Same as [`decode_envelope`].
pub fn decode_ack(body: &str) -> Result<(), ApiError> {
    if body.trim().is_empty() {
        return Ok(());
    }
    decode_envelope::<serde_json::Value>(body).map(|_| ())
}

fn error_envelope(value: &serde_json::Value) -> Option<&serde_json::Value> {
    let errors = value.as_object()?.get("errors")?;
    // `errors: null` and `errors: false` show up on some success payloads.
    match errors {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        _ => Some(errors),
    }
}
