//! Synthetic data generation for the owners/pets tables.
//!
//! Generation (`generate`) is pure over the supplied RNG; persistence goes
//! through `DbHandle::replace_all`, which swaps the full table contents in a
//! single transaction. `run` ties the two together for the `seed` binary.

use crate::db::{DbHandle, NewOwner, NewPet, SeedBatch};
use crate::error::PetdexError;
use rand::Rng;
use tracing::info;

pub const OWNER_COUNT: usize = 50;
pub const PET_COUNT: usize = 100;

/// Species pool used by the seeder. Not a data-layer constraint.
pub const SPECIES: [&str; 5] = ["Dog", "Cat", "Chicken", "Hamster", "Turtle"];

const FIRST_NAMES: [&str; 40] = [
    "Ben", "Alice", "Marcus", "Sofia", "Liam", "Noah", "Emma", "Olivia", "Ava", "Ethan", "Mia",
    "Lucas", "Amelia", "Mason", "Harper", "Logan", "Evelyn", "James", "Abigail", "Jack", "Emily",
    "Henry", "Ella", "Owen", "Scarlett", "Leo", "Grace", "Ruby", "Felix", "Clara", "Oscar",
    "Hazel", "Theo", "Ivy", "Milo", "Nora", "Jasper", "Luna", "Hugo", "Stella",
];

const LAST_NAMES: [&str; 30] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Walker",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES))
}

/// Generates 50 owners with random human names and 100 pets, each with a
/// random first name, a species uniform over [`SPECIES`], and an owner drawn
/// uniformly (with replacement) from the generated owners.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> SeedBatch {
    let owners = (0..OWNER_COUNT)
        .map(|_| NewOwner {
            name: full_name(rng),
        })
        .collect();

    let pets = (0..PET_COUNT)
        .map(|_| NewPet {
            name: pick(rng, &FIRST_NAMES).to_string(),
            species: pick(rng, &SPECIES).to_string(),
            owner_idx: rng.random_range(0..OWNER_COUNT),
        })
        .collect();

    SeedBatch { owners, pets }
}

/// Replaces the database contents with a freshly generated batch and logs the
/// resulting row counts.
pub async fn run(db: &DbHandle) -> Result<(), PetdexError> {
    let batch = generate(&mut rand::rng());
    db.replace_all(batch).await?;

    let (owners, pets) = db.counts().await?;
    info!(owners, pets, "Seed complete; tables fully replaced.");
    Ok(())
}
