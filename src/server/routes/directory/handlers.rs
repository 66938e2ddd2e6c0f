use crate::error::PetdexError;
use crate::server::router::PetdexState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt::Write as _;
use tracing::debug;

pub(super) async fn index_handler() -> Html<&'static str> {
    Html("<h1>Welcome to the pet/owner directory!</h1>")
}

pub(super) async fn pet_by_id_handler(
    State(state): State<PetdexState>,
    Path(id): Path<i64>,
) -> Result<Response, PetdexError> {
    let Some(pet) = state.db.get_pet_detail(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Html("<h1>404 pet not found</h1>".to_string()),
        )
            .into_response());
    };

    debug!(pet_id = pet.id, species = %pet.species, "Pet lookup hit");

    let body = format!(
        "<h1>Information for {}</h1><h2>Pet Species is {}</h2><h2>Pet Owner is {}</h2>",
        pet.name, pet.species, pet.owner_name
    );

    Ok((StatusCode::OK, Html(body)).into_response())
}

pub(super) async fn owner_by_id_handler(
    State(state): State<PetdexState>,
    Path(id): Path<i64>,
) -> Result<Response, PetdexError> {
    let Some(detail) = state.db.get_owner_with_pets(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Html("<h1>404 owner not found</h1>".to_string()),
        )
            .into_response());
    };

    debug!(owner_id = detail.owner.id, pets = detail.pets.len(), "Owner lookup hit");

    let mut body = format!("<h1>Information for {}</h1>", detail.owner.name);

    if detail.pets.is_empty() {
        body.push_str("<h2>Has no pets at this time.</h2>");
    } else {
        for pet in &detail.pets {
            // write! into a String cannot fail.
            let _ = write!(body, "<h2>Has pet {} named {}.</h2>", pet.species, pet.name);
        }
    }

    Ok((StatusCode::OK, Html(body)).into_response())
}
