//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libcat API",
        version = "0.1.0",
        description = "Library catalog book details and creation API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_book_details,
        books::create_book,
    ),
    components(
        schemas(
            crate::models::BookId,
            crate::models::Book,
            crate::models::BookSummary,
            crate::models::BookDetailsRequest,
            crate::models::BookInstance,
            crate::models::BookInstanceStatus,
            crate::models::Author,
            crate::models::Genre,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book details and creation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
