use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /cat_facts/{id} handler - Permanently remove a cat fact
#[utoipa::path(
    delete,
    path = routes::CAT_FACT_ITEM,
    params(
        ("id" = String, Path, description = "Id of the cat fact")
    ),
    responses(
        (status = 200, description = "Cat fact deleted", body = DeleteResponse),
        (status = 404, description = "Cat fact not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "cat_facts"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    if !state.store.delete(&id).await? {
        tracing::info!("Cat fact not found for delete with id: {}", id);
        return Err(ApiError::NotFound);
    }

    tracing::info!("Deleted cat fact with id: {}", id);
    Ok((StatusCode::OK, Json(DeleteResponse { ok: true })))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorResponse;
    use crate::handlers::testing::{create_fact, read_json, send, setup_test_app};
    use crate::models::CatFactPublic;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_endpoint_success() {
        let app = setup_test_app().await;
        let id = create_fact(&app, "Cats are great!").await;

        let response = send(&app, "DELETE", &format!("/cat_facts/{}", id), None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body, json!({"ok": true}));

        let response = send(&app, "GET", &format!("/cat_facts/{}", id), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.detail, "Cat fact not found");
    }

    #[tokio::test]
    async fn test_delete_endpoint_not_found() {
        let app = setup_test_app().await;

        let response = send(&app, "DELETE", "/cat_facts/nonexistent_id", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.detail, "Cat fact not found");
    }

    #[tokio::test]
    async fn test_delete_endpoint_twice() {
        let app = setup_test_app().await;
        let id = create_fact(&app, "Cats are great!").await;

        let first = send(&app, "DELETE", &format!("/cat_facts/{}", id), None).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = send(&app, "DELETE", &format!("/cat_facts/{}", id), None).await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cat_fact_lifecycle() {
        let app = setup_test_app().await;

        let payload = json!({"description": "Cats are great!"});
        let created = send(&app, "POST", "/cat_facts/", Some(payload)).await;
        assert_eq!(created.status(), StatusCode::OK);
        let created: CatFactPublic = read_json(created).await;
        assert_eq!(created.description, "Cats are great!");

        create_fact(&app, "Cats are awesome!").await;

        let listed: Vec<CatFactPublic> =
            read_json(send(&app, "GET", "/cat_facts/", None).await).await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].description, "Cats are great!");
        assert_eq!(listed[1].description, "Cats are awesome!");

        let deleted = send(&app, "DELETE", &format!("/cat_facts/{}", created.id), None).await;
        let body: serde_json::Value = read_json(deleted).await;
        assert_eq!(body, json!({"ok": true}));

        let gone = send(&app, "GET", &format!("/cat_facts/{}", created.id), None).await;
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(gone).await;
        assert_eq!(body.detail, "Cat fact not found");

        let listed: Vec<CatFactPublic> =
            read_json(send(&app, "GET", "/cat_facts/", None).await).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "Cats are awesome!");
    }
}
