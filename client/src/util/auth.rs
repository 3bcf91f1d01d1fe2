//! Access-token lookup for authenticated requests.
//!
//! The login flow (outside this app) stores the token in `localStorage`;
//! requests read it fresh each time so a re-login in another tab is picked
//! up without a reload. Requires a browser environment.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// `localStorage` key holding the current access token.
pub const ACCESS_TOKEN_KEY: &str = "ratio_access_token";

/// Read the current access token.
///
/// Returns an empty string when no token is stored or off-browser; the
/// backend rejects the request and the caller's error path takes over.
pub fn access_token() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(ACCESS_TOKEN_KEY).ok().flatten())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
