//! Statistics endpoints.

use crate::{ApiClient, ApiError, CompressionStatistics, StrategySavings, first_item, items};

impl ApiClient {
    /// Fetch fleet-wide compression aggregates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn compression_statistics(&self) -> Result<CompressionStatistics, ApiError> {
        let value = self.get("statistics/compression", &[]).await?;
        first_item(value)
    }

    /// Fetch the savings breakdown per strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn savings_by_strategy(&self) -> Result<Vec<StrategySavings>, ApiError> {
        let value = self.get("statistics/savings-by-strategy", &[]).await?;
        items(value)
    }

    /// Fetch service-side statistics for one table.
    ///
    /// The payload shape is owned by the service, so the raw JSON object is
    /// returned for the caller to render.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn table_statistics(
        &self,
        owner: &str,
        table_name: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let endpoint = format!(
            "statistics/table/{}/{}",
            urlencoding::encode(owner),
            urlencoding::encode(table_name)
        );
        self.get(&endpoint, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self, serve_capture};
    use pretty_assertions::assert_eq;

    const STATS_FIXTURE: &str = r#"{
        "items": [
            {
                "total_tables": 1240,
                "total_size_gb": 900.5,
                "compressed_size_gb": 310.0,
                "avg_savings_pct": 65.6
            }
        ]
    }"#;

    const SAVINGS_FIXTURE: &str = r#"{
        "items": [
            {"strategy": "QUERY LOW", "avg_savings_pct": 42.1},
            {"strategy": "QUERY HIGH", "avg_savings_pct": 63.8},
            {"strategy": "ARCHIVE LOW", "avg_savings_pct": 78.0},
            {"strategy": "ARCHIVE HIGH", "avg_savings_pct": 85.3}
        ]
    }"#;

    #[test]
    fn parse_compression_statistics() {
        let value: serde_json::Value = serde_json::from_str(STATS_FIXTURE).unwrap();
        let stats: CompressionStatistics = first_item(value).unwrap();
        assert_eq!(stats.total_tables, 1240);
        assert!((stats.avg_savings_pct - 65.6).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_savings_by_strategy() {
        let value: serde_json::Value = serde_json::from_str(SAVINGS_FIXTURE).unwrap();
        let savings: Vec<StrategySavings> = items(value).unwrap();
        assert_eq!(savings.len(), 4);
        assert_eq!(savings[1].strategy, "QUERY HIGH");
    }

    #[tokio::test]
    async fn table_statistics_encodes_path_segments() {
        let (base, captured) = serve_capture(200, r#"{"items": []}"#);
        let client = ApiClient::new(&test_support::config(&base));

        client
            .table_statistics("SALES", "ORDER LINES")
            .await
            .expect("payload");

        let request = captured.recv().expect("request captured");
        assert_eq!(request.url, "/statistics/table/SALES/ORDER%20LINES");
    }
}
