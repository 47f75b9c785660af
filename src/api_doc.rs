use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{CatFactCreate, CatFactPublic, CatFactUpdate, DeleteResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cat-facts API",
        version = "1.0.0",
        description = "Store and retrieve short facts about cats, backed by SQLite"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            CatFactPublic,
            CatFactCreate,
            CatFactUpdate,
            DeleteResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "cat_facts", description = "Cat fact operations")
    )
)]
pub struct ApiDoc;
