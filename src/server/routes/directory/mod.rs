pub mod handlers;

use crate::server::router::PetdexState;
use handlers::{index_handler, owner_by_id_handler, pet_by_id_handler};

use axum::{Router, routing::get};

pub fn router() -> Router<PetdexState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/pets/{id}", get(pet_by_id_handler))
        .route("/owner/{id}", get(owner_by_id_handler))
}
