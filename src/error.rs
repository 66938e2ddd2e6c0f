use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PetdexError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    ActorError(String),

    #[error("Seed batch references owner index {0} outside the generated owner set")]
    InvalidOwnerIndex(usize),
}

impl IntoResponse for PetdexError {
    fn into_response(self) -> axum::response::Response {
        // "Not found" is handled at the lookup site; everything that reaches
        // here is a generic server failure.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>500 internal server error</h1>"),
        )
            .into_response()
    }
}
