use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::database::Storage;
use crate::error::{AppError, AppResult};
use crate::models::Report;

pub struct NewReport {
    pub reported_user_id: Option<String>,
    pub reported_photo_id: Option<String>,
    pub reason: String,
}

/// Adds `blocked_id` to the user's blocked set. Idempotent.
pub async fn block_user(store: &dyn Storage, user_id: &str, blocked_id: &str) -> AppResult<()> {
    store.add_blocked_user(user_id, blocked_id).await?;
    info!(user = user_id, blocked = blocked_id, "user blocked");
    Ok(())
}

/// Removes `blocked_id` from the user's blocked set. Idempotent.
pub async fn unblock_user(store: &dyn Storage, user_id: &str, blocked_id: &str) -> AppResult<()> {
    store.remove_blocked_user(user_id, blocked_id).await
}

/// Files a report against a user and/or a photo.
pub async fn report_content(
    store: &dyn Storage,
    reporter_id: &str,
    new_report: NewReport,
) -> AppResult<Report> {
    let report = Report {
        id: Uuid::new_v4().to_string(),
        reporter_id: reporter_id.to_string(),
        reported_user_id: new_report.reported_user_id,
        reported_photo_id: new_report.reported_photo_id,
        reason: new_report.reason,
        status: Report::PENDING.to_string(),
        created_at: Utc::now(),
        resolved_at: None,
    };
    store.insert_report(report.clone()).await?;
    Ok(report)
}

/// Unresolved reports awaiting review, oldest first.
pub async fn pending_reports(store: &dyn Storage, config: &Config) -> AppResult<Vec<Report>> {
    store.list_pending_reports(config.user_scan_limit).await
}

/// Stamps a report with a reviewer action (e.g. "dismissed").
pub async fn resolve_report(store: &dyn Storage, report_id: &str, action: &str) -> AppResult<()> {
    let modified = store.resolve_report(report_id, action, Utc::now()).await?;
    if modified == 0 {
        return Err(AppError::not_found("report"));
    }
    Ok(())
}
