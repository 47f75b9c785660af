use axum::{
    response::Redirect,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const CAT_FACTS: &str = "/cat_facts/";
pub const CAT_FACTS_NO_SLASH: &str = "/cat_facts";
pub const CAT_FACT_ITEM: &str = "/cat_facts/{id}";
pub const DOCS: &str = "/docs";
pub const OPENAPI_JSON: &str = "/openapi.json";

/// Build the full application router over the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(
            CAT_FACTS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        // 307 keeps the method and body
        .route(
            CAT_FACTS_NO_SLASH,
            any(|| async { Redirect::temporary(CAT_FACTS) }),
        )
        .route(
            CAT_FACT_ITEM,
            get(handlers::get_handler)
                .patch(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(DOCS).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
