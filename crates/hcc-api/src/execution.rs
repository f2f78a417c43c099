//! Compression execution endpoints.

use crate::{
    ApiClient, ApiError, ExecutionOptions, ExecutionRecord, ExecutionStarted, HistoryQuery,
    first_item, items,
};

impl ApiClient {
    /// Submit one recommendation for execution.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn execute_compression(
        &self,
        recommendation_id: i64,
        options: ExecutionOptions,
    ) -> Result<ExecutionStarted, ApiError> {
        let body = serde_json::json!({
            "recommendation_id": recommendation_id,
            "dry_run": options.dry_run,
            "parallel_degree": options.parallel_degree,
        });
        let value = self.post("compression/execute", &body).await?;
        first_item(value)
    }

    /// Submit several recommendations as one batch request.
    ///
    /// The batch goes out as a single call; the service owns any
    /// partial-failure semantics across its members, so the raw
    /// acknowledgement payload is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn batch_execute(
        &self,
        recommendation_ids: &[i64],
        options: ExecutionOptions,
    ) -> Result<serde_json::Value, ApiError> {
        let body = serde_json::json!({
            "recommendation_ids": recommendation_ids,
            "dry_run": options.dry_run,
            "parallel_degree": options.parallel_degree,
        });
        self.post("compression/batch", &body).await
    }

    /// Fetch the status of one execution.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn execution_status(&self, execution_id: i64) -> Result<ExecutionRecord, ApiError> {
        let value = self
            .get(&format!("compression/execution/{execution_id}"), &[])
            .await?;
        first_item(value)
    }

    /// List past executions, optionally bounded by date range.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn execution_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<ExecutionRecord>, ApiError> {
        let mut params: Vec<(&str, String)> = vec![("limit", query.limit.to_string())];
        if let Some(start) = query.start_date {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = query.end_date {
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }

        let value = self.get("compression/history", &params).await?;
        items(value)
    }
}
