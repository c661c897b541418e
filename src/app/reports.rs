use sqlx::postgres::PgRow;
use sqlx::{Acquire, Row};
use uuid::Uuid;

use crate::domain::report::{AdminReportRow, Report, ReportUpdate};
use crate::infra::db::{Db, DbError};

/// Hard cap on the admin triage listing. There is no cursor past it.
const ADMIN_REPORT_LIMIT: i64 = 100;

pub enum ReportCreation {
    Created(Report),
    DuplicateReport,
    UnknownSighting,
}

#[derive(Clone)]
pub struct ReportService {
    db: Db,
}

impl ReportService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn create_report(
        &self,
        sighting_id: Uuid,
        title: &str,
    ) -> Result<ReportCreation, DbError> {
        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM sightings WHERE id = $1")
            .bind(sighting_id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|err| DbError::log("check sighting before report", err))?;

        if exists.is_none() {
            return Ok(ReportCreation::UnknownSighting);
        }

        // UNIQUE on sighting_id enforces the zero-or-one report invariant;
        // DO NOTHING turns the second attempt into an empty result.
        let row = sqlx::query(
            "INSERT INTO reports (sighting_id, title) \
             VALUES ($1, $2) \
             ON CONFLICT (sighting_id) DO NOTHING \
             RETURNING id, sighting_id, title, status, admin_notes, created_at, updated_at",
        )
        .bind(sighting_id)
        .bind(title)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|err| DbError::log("create report", err))?;

        match row {
            Some(row) => Ok(ReportCreation::Created(report_from_row(&row))),
            None => Ok(ReportCreation::DuplicateReport),
        }
    }

    /// Audit rows for a report, newest first. Empty when the report has no
    /// history (or does not exist).
    pub async fn report_updates(&self, report_id: Uuid) -> Result<Vec<ReportUpdate>, DbError> {
        let rows = sqlx::query(
            "SELECT id, report_id, title, description, author, created_at \
             FROM report_updates \
             WHERE report_id = $1 \
             ORDER BY created_at DESC",
        )
        .bind(report_id)
        .fetch_all(self.db.pool())
        .await
        .map_err(|err| DbError::log("list report updates", err))?;

        let mut updates = Vec::with_capacity(rows.len());
        for row in rows {
            updates.push(ReportUpdate {
                id: row.get("id"),
                report_id: row.get("report_id"),
                title: row.get("title"),
                description: row.get("description"),
                author: row.get("author"),
                created_at: row.get("created_at"),
            });
        }

        Ok(updates)
    }

    /// The admin triage queue: the most recent sightings joined with their
    /// report and submitter, unfiltered by ownership. Capped at 100 rows.
    pub async fn admin_reports(&self) -> Result<Vec<AdminReportRow>, DbError> {
        let rows = sqlx::query(
            "SELECT s.id AS sighting_id, s.species, s.confidence, s.condition, s.image_path, \
                    s.created_at AS sighted_at, \
                    r.id AS report_id, r.title AS report_title, r.status, r.admin_notes, \
                    u.name AS user_name, u.email AS user_email \
             FROM sightings s \
             LEFT JOIN reports r ON r.sighting_id = s.id \
             LEFT JOIN users u ON u.id = s.user_id \
             ORDER BY s.created_at DESC \
             LIMIT $1",
        )
        .bind(ADMIN_REPORT_LIMIT)
        .fetch_all(self.db.pool())
        .await
        .map_err(|err| DbError::log("list admin reports", err))?;

        let mut reports = Vec::with_capacity(rows.len());
        for row in rows {
            reports.push(AdminReportRow {
                sighting_id: row.get("sighting_id"),
                species: row.get("species"),
                confidence: row.get("confidence"),
                condition: row.get("condition"),
                image_path: row.get("image_path"),
                sighted_at: row.get("sighted_at"),
                report_id: row.get("report_id"),
                report_title: row.get("report_title"),
                status: row.get("status"),
                admin_notes: row.get("admin_notes"),
                user_name: row.get("user_name"),
                user_email: row.get("user_email"),
            });
        }

        Ok(reports)
    }

    /// Set a report's status and notes, then append an audit row.
    ///
    /// The update carries no row-count check: a non-existent id is a silent
    /// no-op and still reports success. Callers that care must look the
    /// report up first.
    ///
    /// The audit insert is best-effort. It runs inside a savepoint so a
    /// failure there (the report_updates table is not provisioned in every
    /// deployment) cannot abort the status update itself; the failure is
    /// logged and the primary write still commits.
    pub async fn update_report_status(
        &self,
        report_id: Uuid,
        status: &str,
        admin_notes: Option<&str>,
    ) -> Result<(), DbError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|err| DbError::log("begin status update", err))?;

        sqlx::query(
            "UPDATE reports \
             SET status = $2, admin_notes = $3, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(report_id)
        .bind(status)
        .bind(admin_notes)
        .execute(&mut *tx)
        .await
        .map_err(|err| DbError::log("update report status", err))?;

        match tx.begin().await {
            Ok(mut audit_tx) => {
                let description = describe_status_change(status, admin_notes);
                let inserted = sqlx::query(
                    "INSERT INTO report_updates (report_id, title, description, author) \
                     VALUES ($1, 'Status Updated', $2, 'Admin')",
                )
                .bind(report_id)
                .bind(&description)
                .execute(&mut *audit_tx)
                .await;

                match inserted {
                    Ok(_) => {
                        if let Err(err) = audit_tx.commit().await {
                            tracing::warn!(
                                error = %err,
                                %report_id,
                                "audit row lost; status update proceeds"
                            );
                        }
                    }
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            %report_id,
                            "audit row insert failed; status update proceeds"
                        );
                        if let Err(err) = audit_tx.rollback().await {
                            tracing::warn!(error = %err, "audit savepoint rollback failed");
                        }
                    }
                }
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    %report_id,
                    "audit savepoint unavailable; skipping audit row"
                );
            }
        }

        tx.commit()
            .await
            .map_err(|err| DbError::log("commit status update", err))?;

        Ok(())
    }
}

fn report_from_row(row: &PgRow) -> Report {
    Report {
        id: row.get("id"),
        sighting_id: row.get("sighting_id"),
        title: row.get("title"),
        status: row.get("status"),
        admin_notes: row.get("admin_notes"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn describe_status_change(status: &str, admin_notes: Option<&str>) -> String {
    match admin_notes {
        Some(notes) if !notes.is_empty() => {
            format!("Report status changed to \"{}\". Admin notes: {}", status, notes)
        }
        _ => format!("Report status changed to \"{}\"", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_change_description_includes_notes() {
        let description = describe_status_change("resolved", Some("animal relocated"));
        assert_eq!(
            description,
            "Report status changed to \"resolved\". Admin notes: animal relocated"
        );
    }

    #[test]
    fn status_change_description_without_notes() {
        assert_eq!(
            describe_status_change("dismissed", None),
            "Report status changed to \"dismissed\""
        );
    }

    #[test]
    fn empty_notes_are_treated_as_absent() {
        assert_eq!(
            describe_status_change("open", Some("")),
            "Report status changed to \"open\""
        );
    }
}
