use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::models::Report;

#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert_report(&self, report: Report) -> AppResult<()>;

    /// Unresolved reports, oldest first.
    async fn list_pending_reports(&self, limit: usize) -> AppResult<Vec<Report>>;

    /// Stamps the report with a resolution. Returns the number of
    /// documents modified.
    async fn resolve_report(
        &self,
        report_id: &str,
        status: &str,
        resolved_at: DateTime<Utc>,
    ) -> AppResult<u64>;
}
