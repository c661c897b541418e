use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::reports::{ReportCreation, ReportService};
use crate::app::sightings::SightingService;
use crate::app::users::UserService;
use crate::domain::directory::{EndangeredSpecies, Veterinarian};
use crate::domain::report::{AdminReportRow, Report, ReportUpdate};
use crate::domain::sighting::{Sighting, SightingWithReport};
use crate::domain::user::User;
use crate::http::{AdminToken, AppError};
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = if state.db.ping().await.is_ok() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse { status })
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let name = payload.name.trim();
    let email = payload.email.trim();

    if name.is_empty() || email.is_empty() {
        return Err(AppError::bad_request("name and email are required"));
    }
    if !email.contains('@') {
        return Err(AppError::bad_request("email is not valid"));
    }

    let service = UserService::new(state.db.clone());
    match service.create_user(name, email).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::conflict("email already registered")),
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let service = UserService::new(state.db.clone());
    let user = service.get_user(user_id).await?;

    match user {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::not_found("user not found")),
    }
}

// ---------------------------------------------------------------------------
// Sightings
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreateSightingRequest {
    pub species: String,
    pub confidence: f64,
    pub condition: String,
    pub image_path: String,
    pub user_id: Option<Uuid>,
}

pub async fn create_sighting(
    State(state): State<AppState>,
    Json(payload): Json<CreateSightingRequest>,
) -> Result<Json<Sighting>, AppError> {
    if payload.species.trim().is_empty() {
        return Err(AppError::bad_request("species is required"));
    }
    if !(0.0..=1.0).contains(&payload.confidence) {
        return Err(AppError::bad_request("confidence must be between 0 and 1"));
    }
    if payload.image_path.trim().is_empty() {
        return Err(AppError::bad_request("image_path is required"));
    }

    let service = SightingService::new(state.db.clone());
    let sighting = service
        .create_sighting(
            payload.species.trim(),
            payload.confidence,
            payload.condition.trim(),
            payload.image_path.trim(),
            payload.user_id,
        )
        .await?;

    Ok(Json(sighting))
}

pub async fn list_user_sightings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<SightingWithReport>>, AppError> {
    let service = SightingService::new(state.db.clone());
    let sightings = service.user_sightings(user_id).await?;

    Ok(Json(sightings))
}

pub async fn get_sighting(
    State(state): State<AppState>,
    Path((user_id, sighting_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SightingWithReport>, AppError> {
    let service = SightingService::new(state.db.clone());
    let sighting = service.sighting_detail(sighting_id, user_id).await?;

    match sighting {
        Some(sighting) => Ok(Json(sighting)),
        None => Err(AppError::not_found("sighting not found")),
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub title: String,
}

pub async fn create_report(
    State(state): State<AppState>,
    Path(sighting_id): Path<Uuid>,
    Json(payload): Json<CreateReportRequest>,
) -> Result<Json<Report>, AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title is required"));
    }

    let service = ReportService::new(state.db.clone());
    match service.create_report(sighting_id, title).await? {
        ReportCreation::Created(report) => Ok(Json(report)),
        ReportCreation::DuplicateReport => {
            Err(AppError::conflict("sighting already has a report"))
        }
        ReportCreation::UnknownSighting => Err(AppError::not_found("sighting not found")),
    }
}

pub async fn list_report_updates(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<Vec<ReportUpdate>>, AppError> {
    let service = ReportService::new(state.db.clone());
    let updates = service.report_updates(report_id).await?;

    Ok(Json(updates))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

pub async fn list_admin_reports(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminReportRow>>, AppError> {
    let service = ReportService::new(state.db.clone());
    let reports = service.admin_reports().await?;

    Ok(Json(reports))
}

#[derive(Deserialize)]
pub struct UpdateReportStatusRequest {
    pub status: String,
    pub admin_notes: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateReportStatusResponse {
    pub success: bool,
}

pub async fn update_report_status(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Json(payload): Json<UpdateReportStatusRequest>,
) -> Result<Json<UpdateReportStatusResponse>, AppError> {
    if payload.status.trim().is_empty() {
        return Err(AppError::bad_request("status is required"));
    }

    // Status values are an open set; which ones are meaningful is a product
    // decision made by the dashboard, not enforced here.
    let service = ReportService::new(state.db.clone());
    service
        .update_report_status(
            report_id,
            payload.status.trim(),
            payload.admin_notes.as_deref(),
        )
        .await?;

    Ok(Json(UpdateReportStatusResponse { success: true }))
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct VetQuery {
    pub species: Option<String>,
}

pub async fn find_veterinarians(
    State(state): State<AppState>,
    Query(query): Query<VetQuery>,
) -> Json<Vec<Veterinarian>> {
    Json(state.vets.find(query.species.as_deref()))
}

#[derive(Deserialize)]
pub struct SpeciesQuery {
    pub q: Option<String>,
}

pub async fn search_endangered_species(
    State(state): State<AppState>,
    Query(query): Query<SpeciesQuery>,
) -> Json<Vec<EndangeredSpecies>> {
    Json(state.species.search(query.q.as_deref()))
}
