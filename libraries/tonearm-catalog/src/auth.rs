//! Authentication against the catalog.

use crate::error::{CatalogError, Result};
use crate::types::{LoginRequest, LoginResponse};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the catalog.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username and password.
    ///
    /// Returns the access token on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(url = %url, username = %username, "Requesting catalog token");

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(CatalogError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let login_response: LoginResponse = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse login response: {}", e))
            })?;

            info!(
                expires_in = login_response.expires_in,
                "Logged into catalog"
            );

            Ok(login_response)
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Catalog login rejected");
            Err(CatalogError::AuthFailed(
                "Invalid username or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
