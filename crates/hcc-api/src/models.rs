//! Typed payloads for the analysis service endpoints.
//!
//! Field names follow the service's JSON keys one-to-one. Numeric fields the
//! service may omit while work is still queued default to zero rather than
//! failing the whole payload.

use serde::{Deserialize, Serialize};

/// One analysis run: identity, progress, and aggregate sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub analysis_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tables_analyzed: u64,
    #[serde(default)]
    pub total_current_size_gb: f64,
    #[serde(default)]
    pub total_compressed_size_gb: f64,
}

/// One compression recommendation for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_id: i64,
    pub table_owner: String,
    pub table_name: String,
    #[serde(default)]
    pub current_size_mb: f64,
    #[serde(default)]
    pub recommended_strategy: String,
    #[serde(default)]
    pub estimated_size_mb: f64,
    #[serde(default)]
    pub savings_pct: f64,
    #[serde(default)]
    pub compression_ratio: f64,
    #[serde(default)]
    pub estimated_rows: u64,
    /// Compression already applied to the table, if any.
    #[serde(default)]
    pub current_compression: Option<String>,
}

/// Server-side filter for the recommendations listing.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationFilter {
    /// Restrict to one strategy (e.g. `QUERY HIGH`); `None` lists all.
    pub strategy: Option<String>,
    /// Minimum estimated savings percentage.
    pub min_savings_pct: f64,
    /// Result cap.
    pub limit: u32,
}

impl Default for RecommendationFilter {
    fn default() -> Self {
        Self {
            strategy: None,
            min_savings_pct: 10.0,
            limit: 100,
        }
    }
}

/// Knobs shared by single and batch compression execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Estimate only; no DDL runs server-side.
    pub dry_run: bool,
    /// Parallel degree the service applies to the move.
    pub parallel_degree: u32,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            dry_run: true,
            parallel_degree: 4,
        }
    }
}

/// Acknowledgement for a newly submitted execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStarted {
    pub execution_id: i64,
    #[serde(default)]
    pub status: String,
}

/// One row of execution status or history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub execution_id: i64,
    #[serde(default)]
    pub recommendation_id: Option<i64>,
    pub table_owner: String,
    pub table_name: String,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub status: String,
    /// Submission timestamp as the service renders it.
    #[serde(default)]
    pub executed_at: String,
    #[serde(default)]
    pub savings_pct: Option<f64>,
    #[serde(default)]
    pub dry_run: Option<bool>,
    #[serde(default)]
    pub parallel_degree: Option<u32>,
    #[serde(default)]
    pub progress_pct: Option<f64>,
}

/// Bounds for the execution history listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub limit: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            limit: 100,
        }
    }
}

/// Fleet-wide compression aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionStatistics {
    #[serde(default)]
    pub total_tables: u64,
    #[serde(default)]
    pub total_size_gb: f64,
    #[serde(default)]
    pub compressed_size_gb: f64,
    #[serde(default)]
    pub avg_savings_pct: f64,
}

/// Savings aggregate for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySavings {
    pub strategy: String,
    #[serde(default)]
    pub avg_savings_pct: f64,
}

/// Per-strategy rollup in the strategies listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOverview {
    pub strategy: String,
    #[serde(default)]
    pub table_count: u64,
    #[serde(default)]
    pub avg_savings_pct: f64,
    #[serde(default)]
    pub avg_compression_ratio: f64,
    #[serde(default)]
    pub total_size_gb: f64,
    #[serde(default)]
    pub total_savings_gb: f64,
}

/// Descriptive detail for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDetails {
    pub strategy_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_for: String,
    #[serde(default)]
    pub compression_level: String,
    #[serde(default)]
    pub performance_impact: String,
    #[serde(default)]
    pub avg_compression_ratio: f64,
    #[serde(default)]
    pub avg_savings_pct: f64,
}

/// One strategy's estimate when comparing all strategies for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub strategy: String,
    #[serde(default)]
    pub current_size_mb: Option<f64>,
    #[serde(default)]
    pub estimated_size_mb: f64,
    #[serde(default)]
    pub savings_pct: f64,
    #[serde(default)]
    pub compression_ratio: f64,
    #[serde(default)]
    pub estimated_blocks: Option<u64>,
    #[serde(default)]
    pub row_count: Option<u64>,
}
