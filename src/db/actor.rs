use crate::db::batch::SeedBatch;
use crate::db::models::{DbOwner, DbPet, OwnerWithPets, PetDetail};
use crate::db::schema::SQLITE_INIT;
use crate::error::PetdexError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Debug)]
pub enum DbMessage {
    /// Point lookup of a pet by id, joined with its owner's name.
    GetPetDetail(i64, RpcReplyPort<Result<Option<PetDetail>, PetdexError>>),

    /// Point lookup of an owner by id together with all of its pets.
    GetOwnerWithPets(i64, RpcReplyPort<Result<Option<OwnerWithPets>, PetdexError>>),

    /// Replace the full owners/pets contents in one transaction.
    ReplaceAll(SeedBatch, RpcReplyPort<Result<(), PetdexError>>),

    /// Row counts as (owners, pets).
    Counts(RpcReplyPort<Result<(i64, i64), PetdexError>>),
}

#[derive(Clone)]
pub struct DbHandle {
    actor: ActorRef<DbMessage>,
}

impl DbHandle {
    pub async fn get_pet_detail(&self, id: i64) -> Result<Option<PetDetail>, PetdexError> {
        ractor::call!(self.actor, DbMessage::GetPetDetail, id)
            .map_err(|e| PetdexError::ActorError(format!("DbActor GetPetDetail RPC failed: {e}")))?
    }

    pub async fn get_owner_with_pets(&self, id: i64) -> Result<Option<OwnerWithPets>, PetdexError> {
        ractor::call!(self.actor, DbMessage::GetOwnerWithPets, id).map_err(|e| {
            PetdexError::ActorError(format!("DbActor GetOwnerWithPets RPC failed: {e}"))
        })?
    }

    pub async fn replace_all(&self, batch: SeedBatch) -> Result<(), PetdexError> {
        ractor::call!(self.actor, DbMessage::ReplaceAll, batch)
            .map_err(|e| PetdexError::ActorError(format!("DbActor ReplaceAll RPC failed: {e}")))?
    }

    pub async fn counts(&self) -> Result<(i64, i64), PetdexError> {
        ractor::call!(self.actor, DbMessage::Counts)
            .map_err(|e| PetdexError::ActorError(format!("DbActor Counts RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbMessage::GetPetDetail(id, reply) => {
                let res = self.get_pet_detail(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbMessage::GetOwnerWithPets(id, reply) => {
                let res = self.get_owner_with_pets(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbMessage::ReplaceAll(batch, reply) => {
                let res = self.replace_all(&state.pool, batch).await;
                let _ = reply.send(res);
            }
            DbMessage::Counts(reply) => {
                let res = self.counts(&state.pool).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn get_pet_detail(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<PetDetail>, PetdexError> {
        let row = sqlx::query_as::<_, PetDetail>(
            r#"
        SELECT pets.id, pets.name, pets.species, owners.name AS owner_name
        FROM pets
        JOIN owners ON owners.id = pets.owner_id
        WHERE pets.id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn get_owner_with_pets(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<OwnerWithPets>, PetdexError> {
        let owner = sqlx::query_as::<_, DbOwner>(
            r#"
        SELECT id, name
        FROM owners
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some(owner) = owner else {
            return Ok(None);
        };

        let pets = sqlx::query_as::<_, DbPet>(
            r#"
        SELECT id, name, species, owner_id
        FROM pets
        WHERE owner_id = ?
        ORDER BY id
        "#,
        )
        .bind(owner.id)
        .fetch_all(pool)
        .await?;

        Ok(Some(OwnerWithPets { owner, pets }))
    }

    /// Total replacement of both tables. Pets are deleted before owners so the
    /// foreign key never dangles, and everything runs inside one transaction:
    /// any failure rolls the whole batch back.
    async fn replace_all(&self, pool: &SqlitePool, batch: SeedBatch) -> Result<(), PetdexError> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM pets").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM owners").execute(&mut *tx).await?;

        let mut owner_ids = Vec::with_capacity(batch.owners.len());
        for owner in &batch.owners {
            let id: i64 = sqlx::query_scalar(
                r#"
            INSERT INTO owners (name)
            VALUES (?)
            RETURNING id
            "#,
            )
            .bind(&owner.name)
            .fetch_one(&mut *tx)
            .await?;
            owner_ids.push(id);
        }

        for pet in &batch.pets {
            let owner_id = owner_ids
                .get(pet.owner_idx)
                .copied()
                .ok_or(PetdexError::InvalidOwnerIndex(pet.owner_idx))?;

            sqlx::query(
                r#"
            INSERT INTO pets (name, species, owner_id)
            VALUES (?, ?, ?)
            "#,
            )
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn counts(&self, pool: &SqlitePool) -> Result<(i64, i64), PetdexError> {
        let owners: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owners")
            .fetch_one(pool)
            .await?;
        let pets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
            .fetch_one(pool)
            .await?;

        Ok((owners, pets))
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> DbHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .expect("failed to spawn DbActor");

    DbHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), PetdexError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
