//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::config::EngineConfig;

/// The full router: API routes, static files for everything else, tracing and CORS.
pub fn router(app: Arc<App>, config: &EngineConfig) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }
    router
}

fn cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    if origins.is_empty() {
        return None;
    }
    Some(cors.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_needs_an_origin() {
        assert!(cors_layer(None).is_none());
        assert!(cors_layer(Some("  ")).is_none());
        assert!(cors_layer(Some("*")).is_some());
        assert!(cors_layer(Some("http://localhost:3000, http://example.test")).is_some());
    }
}
