use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOwner {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    /// Index into the accompanying `SeedBatch::owners`; resolved to a real
    /// owner id only after the owners have been inserted.
    pub owner_idx: usize,
}

/// Full replacement payload for the owners/pets tables. Generation is kept
/// separate from persistence so tests can build explicit fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBatch {
    pub owners: Vec<NewOwner>,
    pub pets: Vec<NewPet>,
}
