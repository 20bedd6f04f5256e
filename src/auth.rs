//! OAuth token acquisition
//!
//! The reporting API uses the client-credentials grant: one form-encoded
//! POST exchanges the configured id/secret for a short-lived bearer token.
//! There is no refresh path; a run that outlives its token simply fails
//! per-item.

use crate::config::Config;
use crate::error::{Error, Result};
use serde::Deserialize;
use tracing::debug;

/// Token endpoint response body
///
/// Only `access_token` matters to this tool; expiry and scope fields are
/// ignored since the token is used immediately and discarded.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Exchange client credentials for a bearer token
///
/// # Errors
///
/// Returns [`Error::Auth`] if the endpoint rejects the grant or the response
/// carries no usable access token. Transport failures propagate as
/// [`Error::Network`]. Either way the caller must abort: no later call can
/// proceed without the token.
pub async fn acquire_token(client: &reqwest::Client, config: &Config) -> Result<String> {
    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
    ];

    let response = client
        .post(config.auth_endpoint())
        .form(&params)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Auth(format!(
            "token endpoint returned HTTP {}",
            status.as_u16()
        )));
    }

    let body: TokenResponse = response
        .json()
        .await
        .map_err(|e| Error::Auth(format!("token response was not valid JSON: {}", e)))?;

    match body.access_token {
        Some(token) if !token.is_empty() => {
            // The token itself stays out of the log.
            debug!(endpoint = %config.auth_endpoint(), "access token acquired");
            Ok(token)
        }
        _ => Err(Error::Auth(
            "access token could not be retrieved, please check your credentials".to_string(),
        )),
    }
}
