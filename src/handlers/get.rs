use crate::error::{ApiError, ErrorResponse};
use crate::models::CatFactPublic;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /cat_facts/{id} handler - Retrieve one cat fact
#[utoipa::path(
    get,
    path = routes::CAT_FACT_ITEM,
    params(
        ("id" = String, Path, description = "Id of the cat fact")
    ),
    responses(
        (status = 200, description = "Cat fact found", body = CatFactPublic),
        (status = 404, description = "Cat fact not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "cat_facts"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<CatFactPublic>), ApiError> {
    match state.store.get(&id).await? {
        Some(fact) => {
            tracing::info!("Successfully retrieved cat fact with id: {}", id);
            Ok((StatusCode::OK, Json(fact.into())))
        }
        None => {
            tracing::info!("Cat fact not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
