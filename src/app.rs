use crate::docs::openapi::ApiDoc;
use crate::handlers;
use crate::service::Service;
use axum::routing::{get, post, put};
use axum::Router;

use tower_http::trace::TraceLayer;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

fn todo_routes() -> OpenApiRouter<Service> {
    OpenApiRouter::new()
        .route("/", get(handlers::todo::get_all))
        .route("/", post(handlers::todo::add))
        .route("/{id}", get(handlers::todo::get))
        .route("/{id}", put(handlers::todo::update))
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service) -> Router {
    let app_router = OpenApiRouter::new()
        .nest("/todos", todo_routes())
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(app_router)
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
