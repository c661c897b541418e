//! Referral directories backed by static datasets.
//!
//! Both lookups sit behind traits so the handlers stay decoupled from
//! where the data eventually lives; today's providers are the bundled
//! datasets below.

use crate::domain::directory::{EndangeredSpecies, Veterinarian};

pub trait VetDirectory: Send + Sync {
    /// Practices that accept the given species group; everything when no
    /// species filter is supplied. Matching is case-insensitive.
    fn find(&self, species: Option<&str>) -> Vec<Veterinarian>;
}

pub trait SpeciesIndex: Send + Sync {
    /// Entries whose common or scientific name contains the query,
    /// case-insensitively; the whole index when no query is supplied.
    fn search(&self, query: Option<&str>) -> Vec<EndangeredSpecies>;
}

pub struct StaticVetDirectory {
    entries: Vec<Veterinarian>,
}

impl StaticVetDirectory {
    pub fn new() -> Self {
        Self {
            entries: builtin_vets(),
        }
    }
}

impl Default for StaticVetDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl VetDirectory for StaticVetDirectory {
    fn find(&self, species: Option<&str>) -> Vec<Veterinarian> {
        match species {
            Some(species) => {
                let needle = species.to_lowercase();
                self.entries
                    .iter()
                    .filter(|vet| vet.treats.iter().any(|s| s.to_lowercase() == needle))
                    .cloned()
                    .collect()
            }
            None => self.entries.clone(),
        }
    }
}

pub struct StaticSpeciesIndex {
    entries: Vec<EndangeredSpecies>,
}

impl StaticSpeciesIndex {
    pub fn new() -> Self {
        Self {
            entries: builtin_species(),
        }
    }
}

impl Default for StaticSpeciesIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeciesIndex for StaticSpeciesIndex {
    fn search(&self, query: Option<&str>) -> Vec<EndangeredSpecies> {
        match query {
            Some(query) => {
                let needle = query.to_lowercase();
                self.entries
                    .iter()
                    .filter(|entry| {
                        entry.common_name.to_lowercase().contains(&needle)
                            || entry.scientific_name.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
            None => self.entries.clone(),
        }
    }
}

fn vet(name: &str, clinic: &str, city: &str, phone: &str, treats: &[&str]) -> Veterinarian {
    Veterinarian {
        name: name.into(),
        clinic: clinic.into(),
        city: city.into(),
        phone: phone.into(),
        treats: treats.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_vets() -> Vec<Veterinarian> {
    vec![
        vet(
            "Dr. Maren Holt",
            "Northwood Wildlife Clinic",
            "Bellingham",
            "+1 360 555 0141",
            &["raptor", "songbird", "owl"],
        ),
        vet(
            "Dr. Tomas Reyes",
            "Cascade Exotic & Wildlife",
            "Everett",
            "+1 425 555 0118",
            &["deer", "elk", "coyote"],
        ),
        vet(
            "Dr. Priya Nair",
            "Salish Shore Animal Hospital",
            "Anacortes",
            "+1 360 555 0177",
            &["seal", "otter", "heron"],
        ),
        vet(
            "Dr. Elena Vasquez",
            "Foothills Veterinary Group",
            "Issaquah",
            "+1 425 555 0126",
            &["black bear", "raccoon", "coyote"],
        ),
        vet(
            "Dr. Owen McAllister",
            "Riverbend Wild Care",
            "Snohomish",
            "+1 360 555 0109",
            &["beaver", "otter", "songbird"],
        ),
    ]
}

fn species(common: &str, scientific: &str, status: &str, region: &str) -> EndangeredSpecies {
    EndangeredSpecies {
        common_name: common.into(),
        scientific_name: scientific.into(),
        status: status.into(),
        region: region.into(),
    }
}

fn builtin_species() -> Vec<EndangeredSpecies> {
    vec![
        species(
            "Northern Spotted Owl",
            "Strix occidentalis caurina",
            "Near Threatened",
            "Pacific Northwest",
        ),
        species(
            "Gray Wolf",
            "Canis lupus",
            "Least Concern",
            "North America",
        ),
        species(
            "Woodland Caribou",
            "Rangifer tarandus caribou",
            "Endangered",
            "Selkirk Mountains",
        ),
        species(
            "Oregon Spotted Frog",
            "Rana pretiosa",
            "Vulnerable",
            "Cascadia wetlands",
        ),
        species(
            "Marbled Murrelet",
            "Brachyramphus marmoratus",
            "Endangered",
            "Pacific coast",
        ),
        species(
            "Fisher",
            "Pekania pennanti",
            "Least Concern",
            "Boreal forests",
        ),
        species(
            "Streaked Horned Lark",
            "Eremophila alpestris strigata",
            "Endangered",
            "Puget lowlands",
        ),
        species(
            "Western Pond Turtle",
            "Actinemys marmorata",
            "Vulnerable",
            "Columbia River Gorge",
        ),
    ]
}
