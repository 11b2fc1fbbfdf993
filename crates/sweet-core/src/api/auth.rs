use serde::Deserialize;

use super::error::ApiError;
use crate::config::Config;
use crate::session::Role;

/// Token grant returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    pub access_token: String,
    pub role: Role,
}

/// Client for the auth endpoints.
///
/// Issues login and register requests; it never stores anything. Persisting
/// the grant is the session store's job.
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates an auth client from the configuration.
    pub fn new(config: &Config) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http: builder.build().unwrap_or_default(),
        }
    }

    /// Registers a new account.
    ///
    /// A duplicate username comes back as a `Validation` error carrying the
    /// server's message.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/auth/register", self.base_url);
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "role": role.to_string(),
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Exchanges credentials for a token grant.
    ///
    /// The backend takes an OAuth2 password form, so this is form-encoded
    /// rather than JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ApiError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let form = [("username", username), ("password", password)];

        let response = self.http.post(&url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        response
            .json::<LoginGrant>()
            .await
            .map_err(|e| ApiError::parse(format!("Invalid login response: {e}")))
    }
}
