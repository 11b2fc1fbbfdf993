use super::error::ApiError;
use crate::catalog::{CatalogItem, ItemUpdate};
use crate::config::Config;

/// Client for the catalog endpoints.
///
/// All catalog endpoints require a bearer token; the token is captured at
/// construction and a new client is built whenever the session changes.
/// Admin-only gating (update/delete) stays server-side; this client just
/// surfaces the 403.
pub struct CatalogClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Creates a catalog client for the given session token.
    pub fn new(config: &Config, token: &str) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http: builder.build().unwrap_or_default(),
        }
    }

    /// Lists catalog items, optionally scoped by a search term.
    ///
    /// An empty term means an unscoped listing; the server matches the term
    /// against name and category. Zero matches is a normal empty list.
    pub async fn list(&self, search: &str) -> Result<Vec<CatalogItem>, ApiError> {
        let url = format!("{}/api/sweets", self.base_url);
        let mut request = self.http.get(&url).bearer_auth(&self.token);
        if !search.is_empty() {
            request = request.query(&[("search", search)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        response
            .json::<Vec<CatalogItem>>()
            .await
            .map_err(|e| ApiError::parse(format!("Invalid catalog response: {e}")))
    }

    /// Purchases one unit of an item.
    ///
    /// The server is the authority on stock; out-of-stock races come back as
    /// failures here rather than being prevented client-side.
    pub async fn purchase(&self, item_id: u64) -> Result<(), ApiError> {
        let url = format!("{}/api/sweets/{item_id}/purchase", self.base_url);
        let response = self.http.post(&url).bearer_auth(&self.token).send().await?;
        Self::check(response).await
    }

    /// Partially updates a catalog item (admin only).
    pub async fn update(&self, item_id: u64, update: &ItemUpdate) -> Result<(), ApiError> {
        let url = format!("{}/api/sweets/{item_id}", self.base_url);
        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(update)
            .send()
            .await?;
        Self::check(response).await
    }

    /// Deletes a catalog item (admin only).
    pub async fn delete(&self, item_id: u64) -> Result<(), ApiError> {
        let url = format!("{}/api/sweets/{item_id}", self.base_url);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn check(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::http_status(status.as_u16(), &body))
        }
    }
}
