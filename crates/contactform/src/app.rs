use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{
        health::{livez, readyz},
        submissions::{create_submission, get_submission, list_submissions},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Result<Router> {
    let origin = HeaderValue::from_str(&config.cors_origin)
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    // Browsers may only call the API from the configured origin
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/contact", get(list_submissions).post(create_submission))
        .route("/contact/{id}", get(get_submission))
        .layer(cors);

    Ok(Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state))
}
