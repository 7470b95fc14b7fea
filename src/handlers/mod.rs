pub mod analyze;

pub use analyze::*;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::logging_middleware;
use crate::services::ContractAnalyzer;

/// Builds the application router around the given analyzer.
pub fn create_router<A: ContractAnalyzer>(state: AppState<A>) -> Router {
    let body_limit = state.limits.max_body_bytes;

    Router::new()
        .route("/analyze", post(analyze_handler::<A>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(logging_middleware))
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
