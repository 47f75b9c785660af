use crate::error::{ApiError, ErrorResponse};
use crate::extract::AppJson;
use crate::models::{CatFactPublic, CatFactUpdate};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PATCH /cat_facts/{id} handler - Partially update a cat fact
///
/// Only fields present in the body are written; the id never changes.
#[utoipa::path(
    patch,
    path = routes::CAT_FACT_ITEM,
    params(
        ("id" = String, Path, description = "Id of the cat fact")
    ),
    request_body = CatFactUpdate,
    responses(
        (status = 200, description = "Cat fact updated", body = CatFactPublic),
        (status = 404, description = "Cat fact not found", body = ErrorResponse),
        (status = 422, description = "Request body failed validation", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "cat_facts"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(changes): AppJson<CatFactUpdate>,
) -> Result<(StatusCode, Json<CatFactPublic>), ApiError> {
    let fact = state
        .store
        .update(&id, changes)
        .await?
        .ok_or_else(|| {
            tracing::info!("Cat fact not found for update with id: {}", id);
            ApiError::NotFound
        })?;

    tracing::info!("Updated cat fact with id: {}", fact.id);
    Ok((StatusCode::OK, Json(fact.into())))
}
