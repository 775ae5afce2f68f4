// src/routes.rs

use axum::{Router, http::Method, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::reports, state::AppState, utils::jwt::auth_middleware};

/// Assembles the main application router.
///
/// * Every report route requires a session.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (upstream source, config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let report_routes = Router::new()
        .route("/me", get(reports::get_me))
        .route("/tests/{test_id}", get(reports::list_reports))
        .route("/{result_id}", get(reports::get_report))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/reports", report_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
