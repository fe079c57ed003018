use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::container::Container;
use super::controller::{health_controller, query_controller};

/// Build the HTTP router: the liveness endpoint, the query-processing
/// endpoint, and a permissive CORS layer so browser frontends can call the
/// API directly.
pub fn build_router(container: Arc<Container>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_controller::liveness))
        .route("/process-query", post(query_controller::process_query))
        .layer(cors)
        .with_state(container)
}
