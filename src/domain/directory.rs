use serde::Serialize;

/// A veterinarian practice from the referral directory.
#[derive(Debug, Clone, Serialize)]
pub struct Veterinarian {
    pub name: String,
    pub clinic: String,
    pub city: String,
    pub phone: String,
    /// Species groups the practice accepts ("raptor", "deer", ...).
    pub treats: Vec<String>,
}

/// An entry from the endangered-species index.
#[derive(Debug, Clone, Serialize)]
pub struct EndangeredSpecies {
    pub common_name: String,
    pub scientific_name: String,
    /// IUCN Red List category, e.g. "Endangered" or "Vulnerable".
    pub status: String,
    pub region: String,
}
