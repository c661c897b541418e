use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::sighting::{Sighting, SightingWithReport};
use crate::infra::db::{Db, DbError};

#[derive(Clone)]
pub struct SightingService {
    db: Db,
}

impl SightingService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn create_sighting(
        &self,
        species: &str,
        confidence: f64,
        condition: &str,
        image_path: &str,
        user_id: Option<Uuid>,
    ) -> Result<Sighting, DbError> {
        let row = sqlx::query(
            "INSERT INTO sightings (species, confidence, condition, image_path, user_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, species, confidence, condition, image_path, user_id, created_at",
        )
        .bind(species)
        .bind(confidence)
        .bind(condition)
        .bind(image_path)
        .bind(user_id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|err| DbError::log("create sighting", err))?;

        Ok(Sighting {
            id: row.get("id"),
            species: row.get("species"),
            confidence: row.get("confidence"),
            condition: row.get("condition"),
            image_path: row.get("image_path"),
            user_id: row.get("user_id"),
            created_at: row.get("created_at"),
        })
    }

    /// All sightings submitted by a user, newest first. Report fields ride
    /// along via LEFT JOIN and are null for untriaged sightings.
    pub async fn user_sightings(&self, user_id: Uuid) -> Result<Vec<SightingWithReport>, DbError> {
        let rows = sqlx::query(
            "SELECT s.id, s.species, s.confidence, s.condition, s.image_path, s.created_at, \
                    r.id AS report_id, r.title AS report_title, r.status AS report_status, \
                    r.admin_notes, r.updated_at AS report_updated_at \
             FROM sightings s \
             LEFT JOIN reports r ON r.sighting_id = s.id \
             WHERE s.user_id = $1 \
             ORDER BY s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await
        .map_err(|err| DbError::log("list user sightings", err))?;

        let mut sightings = Vec::with_capacity(rows.len());
        for row in rows {
            sightings.push(sighting_with_report(&row));
        }

        Ok(sightings)
    }

    /// A single sighting, filtered on both ids so a user can only read
    /// their own records. `None` when no row matches; absence is not an
    /// error at this layer.
    pub async fn sighting_detail(
        &self,
        sighting_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SightingWithReport>, DbError> {
        let row = sqlx::query(
            "SELECT s.id, s.species, s.confidence, s.condition, s.image_path, s.created_at, \
                    r.id AS report_id, r.title AS report_title, r.status AS report_status, \
                    r.admin_notes, r.updated_at AS report_updated_at \
             FROM sightings s \
             LEFT JOIN reports r ON r.sighting_id = s.id \
             WHERE s.id = $1 AND s.user_id = $2",
        )
        .bind(sighting_id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|err| DbError::log("fetch sighting detail", err))?;

        Ok(row.map(|row| sighting_with_report(&row)))
    }
}

fn sighting_with_report(row: &PgRow) -> SightingWithReport {
    SightingWithReport {
        id: row.get("id"),
        species: row.get("species"),
        confidence: row.get("confidence"),
        condition: row.get("condition"),
        image_path: row.get("image_path"),
        created_at: row.get("created_at"),
        report_id: row.get("report_id"),
        report_title: row.get("report_title"),
        report_status: row.get("report_status"),
        admin_notes: row.get("admin_notes"),
        report_updated_at: row.get("report_updated_at"),
    }
}
