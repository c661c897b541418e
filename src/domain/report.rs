use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Administrative record attached to exactly one sighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub sighting_id: Uuid,
    pub title: String,
    /// Open value set ("open", "investigating", whatever the dashboard
    /// writes). Which statuses are allowed is a product decision left to
    /// callers; nothing here validates them.
    pub status: String,
    pub admin_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// One row of the append-only audit trail for a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportUpdate {
    pub id: Uuid,
    pub report_id: Uuid,
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One row of the admin triage queue: the sighting, its report when one
/// exists, and the submitting user when the sighting is attributed.
#[derive(Debug, Clone, Serialize)]
pub struct AdminReportRow {
    pub sighting_id: Uuid,
    pub species: String,
    pub confidence: f64,
    pub condition: String,
    pub image_path: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sighted_at: OffsetDateTime,
    pub report_id: Option<Uuid>,
    pub report_title: Option<String>,
    pub status: Option<String>,
    pub admin_notes: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}
