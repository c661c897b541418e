use axum::{routing::get, routing::patch, routing::post, Router};

use crate::http::handlers;
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn users() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::create_user))
        .route("/users/:id", get(handlers::get_user))
        .route("/users/:id/sightings", get(handlers::list_user_sightings))
        .route(
            "/users/:id/sightings/:sighting_id",
            get(handlers::get_sighting),
        )
}

pub fn sightings() -> Router<AppState> {
    Router::new()
        .route("/sightings", post(handlers::create_sighting))
        .route("/sightings/:id/report", post(handlers::create_report))
}

pub fn reports() -> Router<AppState> {
    Router::new().route("/reports/:id/updates", get(handlers::list_report_updates))
}

pub fn admin() -> Router<AppState> {
    Router::new()
        .route("/admin/reports", get(handlers::list_admin_reports))
        .route("/admin/reports/:id", patch(handlers::update_report_status))
}

pub fn directory() -> Router<AppState> {
    Router::new()
        .route(
            "/directory/veterinarians",
            get(handlers::find_veterinarians),
        )
        .route(
            "/directory/endangered-species",
            get(handlers::search_endangered_species),
        )
}
