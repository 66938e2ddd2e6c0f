use petdex::db::{NewOwner, NewPet, SeedBatch};
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
async fn fresh_database_is_empty() {
    let (path, url) = temp_database_url("db-fresh");
    let db = petdex::db::spawn(&url).await;

    assert_eq!(db.counts().await.unwrap(), (0, 0));
    assert!(db.get_pet_detail(1).await.unwrap().is_none());
    assert!(db.get_owner_with_pets(1).await.unwrap().is_none());

    cleanup(&path).await;
}

#[tokio::test]
async fn replace_all_inserts_and_lookups_resolve() {
    let (path, url) = temp_database_url("db-replace");
    let db = petdex::db::spawn(&url).await;

    let batch = SeedBatch {
        owners: vec![
            NewOwner {
                name: "Ben Archer".to_string(),
            },
            NewOwner {
                name: "Pat Lee".to_string(),
            },
        ],
        pets: vec![
            NewPet {
                name: "Ben".to_string(),
                species: "Dog".to_string(),
                owner_idx: 0,
            },
            NewPet {
                name: "Luna".to_string(),
                species: "Cat".to_string(),
                owner_idx: 0,
            },
        ],
    };
    db.replace_all(batch).await.unwrap();

    assert_eq!(db.counts().await.unwrap(), (2, 2));

    // Pet lookup joins the owner's name.
    let pet = db.get_pet_detail(1).await.unwrap().unwrap();
    assert_eq!(pet.name, "Ben");
    assert_eq!(pet.species, "Dog");
    assert_eq!(pet.owner_name, "Ben Archer");

    // Owner 1 has both pets, ordered by pet id.
    let detail = db.get_owner_with_pets(1).await.unwrap().unwrap();
    assert_eq!(detail.owner.name, "Ben Archer");
    assert_eq!(detail.pets.len(), 2);
    assert_eq!(detail.pets[0].name, "Ben");
    assert_eq!(detail.pets[1].name, "Luna");
    assert!(detail.pets.iter().all(|p| p.owner_id == detail.owner.id));

    // Owner 2 exists with zero pets.
    let detail = db.get_owner_with_pets(2).await.unwrap().unwrap();
    assert_eq!(detail.owner.name, "Pat Lee");
    assert!(detail.pets.is_empty());

    // Ids outside the stored range find nothing.
    assert!(db.get_pet_detail(1000).await.unwrap().is_none());
    assert!(db.get_owner_with_pets(1000).await.unwrap().is_none());

    cleanup(&path).await;
}

#[tokio::test]
async fn invalid_owner_index_aborts_the_whole_batch() {
    let (path, url) = temp_database_url("db-abort");
    let db = petdex::db::spawn(&url).await;

    let good = SeedBatch {
        owners: vec![NewOwner {
            name: "Ben Archer".to_string(),
        }],
        pets: vec![NewPet {
            name: "Ben".to_string(),
            species: "Dog".to_string(),
            owner_idx: 0,
        }],
    };
    db.replace_all(good).await.unwrap();
    assert_eq!(db.counts().await.unwrap(), (1, 1));

    // Second batch references a non-existent owner index; the transaction
    // must roll back and leave the first batch untouched.
    let bad = SeedBatch {
        owners: vec![NewOwner {
            name: "Alex Doe".to_string(),
        }],
        pets: vec![NewPet {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            owner_idx: 5,
        }],
    };
    let err = db.replace_all(bad).await.unwrap_err();
    assert!(matches!(err, petdex::PetdexError::InvalidOwnerIndex(5)));

    assert_eq!(db.counts().await.unwrap(), (1, 1));
    let pet = db.get_pet_detail(1).await.unwrap().unwrap();
    assert_eq!(pet.owner_name, "Ben Archer");

    cleanup(&path).await;
}
