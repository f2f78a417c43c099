//! Analysis endpoints.

use crate::{AnalysisSummary, ApiClient, ApiError, first_item};

impl ApiClient {
    /// Queue a compression analysis over tables at least `min_size_mb` large.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn start_analysis(&self, min_size_mb: f64) -> Result<AnalysisSummary, ApiError> {
        let body = serde_json::json!({"min_size_mb": min_size_mb});
        let value = self.post("analysis/start", &body).await?;
        first_item(value)
    }

    /// Fetch the status of one analysis run.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn analysis_status(&self, analysis_id: i64) -> Result<AnalysisSummary, ApiError> {
        let value = self
            .get(&format!("analysis/{analysis_id}/status"), &[])
            .await?;
        first_item(value)
    }

    /// Fetch the most recent analysis run.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn latest_analysis(&self) -> Result<AnalysisSummary, ApiError> {
        let value = self.get("analysis/latest", &[]).await?;
        first_item(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self, serve, serve_capture};
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "items": [
            {
                "analysis_id": 42,
                "status": "COMPLETED",
                "tables_analyzed": 317,
                "total_current_size_gb": 512.4,
                "total_compressed_size_gb": 148.9
            }
        ]
    }"#;

    #[test]
    fn parse_analysis_summary() {
        let value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        let summary: AnalysisSummary = first_item(value).unwrap();

        assert_eq!(summary.analysis_id, 42);
        assert_eq!(summary.status, "COMPLETED");
        assert_eq!(summary.tables_analyzed, 317);
    }

    #[tokio::test]
    async fn start_analysis_posts_threshold() {
        let (base, captured) = serve_capture(200, FIXTURE);
        let client = ApiClient::new(&test_support::config(&base));

        let summary = client.start_analysis(250.0).await.expect("started");
        assert_eq!(summary.analysis_id, 42);

        let request = captured.recv().expect("request captured");
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "/analysis/start");
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({"min_size_mb": 250.0}));
    }

    #[tokio::test]
    async fn latest_analysis_with_no_runs_is_a_parse_error() {
        let base = serve(200, r#"{"items": []}"#);
        let client = ApiClient::new(&test_support::config(&base));

        let err = client.latest_analysis().await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
