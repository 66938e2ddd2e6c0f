use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbOwner {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbPet {
    pub id: i64,
    pub name: String,
    /// Free-form text; the fixed species set is a seeder artifact, not a
    /// data-layer constraint.
    pub species: String,
    pub owner_id: i64,
}

/// Result of the `pets JOIN owners` point lookup behind `GET /pets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct PetDetail {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub owner_name: String,
}

/// An owner row together with all pets referencing it, ordered by pet id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerWithPets {
    pub owner: DbOwner,
    pub pets: Vec<DbPet>,
}
