use crate::error::{ApiError, ErrorResponse};
use crate::models::CatFactPublic;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /cat_facts/ handler - List every cat fact in creation order
#[utoipa::path(
    get,
    path = routes::CAT_FACTS,
    responses(
        (status = 200, description = "All cat facts, oldest first", body = Vec<CatFactPublic>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "cat_facts"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<CatFactPublic>>), ApiError> {
    let facts: Vec<CatFactPublic> = state
        .store
        .list()
        .await?
        .into_iter()
        .map(CatFactPublic::from)
        .collect();

    tracing::info!("Listed {} cat facts", facts.len());
    Ok((StatusCode::OK, Json(facts)))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorResponse;
    use crate::handlers::testing::{
        create_fact, read_json, send, setup_closed_store_app, setup_test_app,
    };
    use crate::models::CatFactPublic;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let app = setup_test_app().await;

        let response = send(&app, "GET", "/cat_facts/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<CatFactPublic> = read_json(response).await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_list_endpoint_with_data() {
        let app = setup_test_app().await;

        let first = create_fact(&app, "Cats are great!").await;
        let second = create_fact(&app, "Cats are awesome!").await;

        let response = send(&app, "GET", "/cat_facts/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<CatFactPublic> = read_json(response).await;
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].description, "Cats are great!");
        assert_eq!(body[0].id, first);
        assert_eq!(body[1].description, "Cats are awesome!");
        assert_eq!(body[1].id, second);
    }

    #[tokio::test]
    async fn test_list_endpoint_returns_exactly_created_count() {
        let app = setup_test_app().await;

        let mut ids = Vec::new();
        for n in 0..10 {
            ids.push(create_fact(&app, &format!("fact #{}", n)).await);
        }

        let response = send(&app, "GET", "/cat_facts/", None).await;
        let body: Vec<CatFactPublic> = read_json(response).await;
        let listed: Vec<String> = body.into_iter().map(|fact| fact.id).collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_list_endpoint_no_conflict_with_get() {
        let app = setup_test_app().await;
        let id = create_fact(&app, "Cats have whiskers").await;

        let list_response = send(&app, "GET", "/cat_facts/", None).await;
        let body: serde_json::Value = read_json(list_response).await;
        assert!(body.is_array());

        let get_response = send(&app, "GET", &format!("/cat_facts/{}", id), None).await;
        let body: serde_json::Value = read_json(get_response).await;
        assert!(body.is_object());
        assert_eq!(body["id"], id);
    }

    #[tokio::test]
    async fn test_list_endpoint_database_error() {
        let app = setup_closed_store_app().await;

        let response = send(&app, "GET", "/cat_facts/", None).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.detail, "Internal server error");
    }
}
