pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;

use std::sync::Arc;

use crate::app::directory::{SpeciesIndex, VetDirectory};
use crate::infra::db::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub admin_token: Option<String>,
    pub vets: Arc<dyn VetDirectory>,
    pub species: Arc<dyn SpeciesIndex>,
}
