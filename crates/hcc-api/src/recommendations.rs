//! Recommendation endpoints.

use crate::{ApiClient, ApiError, Recommendation, RecommendationFilter, first_item, items};

impl ApiClient {
    /// List compression recommendations matching `filter`.
    ///
    /// The filter is applied server-side; parameters are transmitted
    /// unmodified and this client does no post-filtering of its own.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![
            ("min_savings_pct", filter.min_savings_pct.to_string()),
            ("limit", filter.limit.to_string()),
        ];
        if let Some(strategy) = &filter.strategy {
            query.push(("strategy", strategy.clone()));
        }

        let value = self.get("recommendations", &query).await?;
        items(value)
    }

    /// Fetch one recommendation in full.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn recommendation_details(
        &self,
        recommendation_id: i64,
    ) -> Result<Recommendation, ApiError> {
        let value = self
            .get(&format!("recommendations/{recommendation_id}"), &[])
            .await?;
        first_item(value)
    }
}
