use petdex::seed::{self, OWNER_COUNT, PET_COUNT, SPECIES};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

fn temp_database_url(tag: &str) -> (std::path::PathBuf, String) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!("petdex-{tag}-{}-{nanos}.sqlite", std::process::id()));
    let url = format!("sqlite:{}", path.display());
    (path, url)
}

async fn cleanup(path: &std::path::Path) {
    let wal = std::path::PathBuf::from(format!("{}-wal", path.to_string_lossy()));
    let shm = std::path::PathBuf::from(format!("{}-shm", path.to_string_lossy()));
    let _ = fs::remove_file(&wal).await;
    let _ = fs::remove_file(&shm).await;
    let _ = fs::remove_file(path).await;
}

#[tokio::test]
async fn seeder_populates_fifty_owners_and_one_hundred_pets() {
    let (path, url) = temp_database_url("seed-once");
    let db = petdex::db::spawn(&url).await;

    seed::run(&db).await.unwrap();

    let (owners, pets) = db.counts().await.unwrap();
    assert_eq!(owners as usize, OWNER_COUNT);
    assert_eq!(pets as usize, PET_COUNT);

    // Table was emptied inside the seeding transaction, so SQLite assigns
    // owner ids 1..=50. Every pet must reference one of them; summing each
    // owner's pets accounts for all 100.
    let mut total_pets = 0;
    for id in 1..=OWNER_COUNT as i64 {
        let detail = db
            .get_owner_with_pets(id)
            .await
            .unwrap()
            .expect("seeded owner id missing");
        for pet in &detail.pets {
            assert_eq!(pet.owner_id, id);
            assert!(SPECIES.contains(&pet.species.as_str()));
        }
        total_pets += detail.pets.len();
    }
    assert_eq!(total_pets, PET_COUNT);

    cleanup(&path).await;
}

#[tokio::test]
async fn reseeding_replaces_rather_than_accumulates() {
    let (path, url) = temp_database_url("seed-twice");
    let db = petdex::db::spawn(&url).await;

    seed::run(&db).await.unwrap();
    seed::run(&db).await.unwrap();

    let (owners, pets) = db.counts().await.unwrap();
    assert_eq!(owners as usize, OWNER_COUNT);
    assert_eq!(pets as usize, PET_COUNT);

    cleanup(&path).await;
}
