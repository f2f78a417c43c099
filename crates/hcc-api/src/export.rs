//! Recommendation export endpoint.
//!
//! The one endpoint that does not answer JSON: the service renders the CSV
//! server-side and this client returns the text as-is. Formatting stays a
//! service concern.

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Download the recommendations export as CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the body cannot be read as text.
    pub async fn export_recommendations_csv(
        &self,
        strategy: Option<&str>,
    ) -> Result<String, ApiError> {
        let url = format!("{}/export/recommendations/csv", self.base_url());
        let (username, password) = self.credentials();

        let mut request = self.http().get(&url).basic_auth(username, Some(password));
        if let Some(strategy) = strategy {
            request = request.query(&[("strategy", strategy)]);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, "recommendation export failed");
                return Err(ApiError::Http(error));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "recommendation export returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|error| ApiError::Parse(error.to_string()))
    }
}
