use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A raw observation record. Sightings are append-only; nothing in the
/// service mutates one after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sighting {
    pub id: Uuid,
    pub species: String,
    /// Detector confidence in the species classification, 0 to 1.
    pub confidence: f64,
    pub condition: String,
    pub image_path: String,
    pub user_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A sighting joined with its report, when one exists. All report fields
/// are null for sightings nobody has triaged yet.
#[derive(Debug, Clone, Serialize)]
pub struct SightingWithReport {
    pub id: Uuid,
    pub species: String,
    pub confidence: f64,
    pub condition: String,
    pub image_path: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub report_id: Option<Uuid>,
    pub report_title: Option<String>,
    pub report_status: Option<String>,
    pub admin_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub report_updated_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untriaged_sighting_serializes_null_report_fields() {
        let row = SightingWithReport {
            id: Uuid::new_v4(),
            species: "red fox".into(),
            confidence: 0.92,
            condition: "healthy".into(),
            image_path: "/captures/fox-0012.jpg".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            report_id: None,
            report_title: None,
            report_status: None,
            admin_notes: None,
            report_updated_at: None,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert!(value["report_id"].is_null());
        assert!(value["report_status"].is_null());
        assert!(value["report_updated_at"].is_null());
        assert_eq!(value["species"], "red fox");
    }
}
