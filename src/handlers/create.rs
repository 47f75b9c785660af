use crate::error::{ApiError, ErrorResponse};
use crate::extract::AppJson;
use crate::models::{CatFactCreate, CatFactPublic};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /cat_facts/ handler - Store a new cat fact
///
/// The id is generated server-side; the response carries it back.
#[utoipa::path(
    post,
    path = routes::CAT_FACTS,
    request_body = CatFactCreate,
    responses(
        (status = 200, description = "Cat fact created", body = CatFactPublic),
        (status = 422, description = "Request body failed validation", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "cat_facts"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CatFactCreate>,
) -> Result<(StatusCode, Json<CatFactPublic>), ApiError> {
    let fact = state.store.create(payload.description).await?;

    tracing::info!("Created cat fact with id: {}", fact.id);
    Ok((StatusCode::OK, Json(fact.into())))
}
