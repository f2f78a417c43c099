//! Compression strategy endpoints.

use crate::{
    ApiClient, ApiError, StrategyComparison, StrategyDetails, StrategyOverview, first_item, items,
};

impl ApiClient {
    /// List all compression strategies with their rollup statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn strategies(&self) -> Result<Vec<StrategyOverview>, ApiError> {
        let value = self.get("strategies", &[]).await?;
        items(value)
    }

    /// Fetch descriptive detail for one strategy.
    ///
    /// Strategy names contain spaces (`QUERY HIGH`), so the path segment is
    /// URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn strategy_details(&self, strategy_name: &str) -> Result<StrategyDetails, ApiError> {
        let endpoint = format!("strategies/{}", urlencoding::encode(strategy_name));
        let value = self.get(&endpoint, &[]).await?;
        first_item(value)
    }

    /// Compare every strategy's estimate for one table.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn compare_strategies(
        &self,
        owner: &str,
        table_name: &str,
    ) -> Result<Vec<StrategyComparison>, ApiError> {
        let endpoint = format!(
            "strategies/compare/{}/{}",
            urlencoding::encode(owner),
            urlencoding::encode(table_name)
        );
        let value = self.get(&endpoint, &[]).await?;
        items(value)
    }
}
