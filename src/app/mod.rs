pub mod directory;
pub mod reports;
pub mod sightings;
pub mod users;
