use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn create_router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(crate::api::handlers::health::health))
        .route("/guides", get(crate::api::handlers::health::list_guides));

    Router::new()
        .nest("/api", api_routes)
        .fallback(crate::api::handlers::assets::serve_asset)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
