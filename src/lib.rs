pub mod api;
pub mod catalog;
pub mod config;
pub mod frontend;
pub mod metrics;
pub mod store;

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::config::ApplicationSettings;

pub use crate::config::Settings;
pub use store::{StoreError, TemplateStore};

/// JSON API, UI pages and static assets over one store.
pub fn create_app(store: Arc<TemplateStore>) -> Router {
    Router::new()
        .merge(api::create_router(Arc::clone(&store)))
        .merge(frontend::create_frontend_router(store))
}

/// Adds a CORS layer for `application.cors_allow_origin`. Without a configured
/// origin the router is returned as is and browsers get no CORS headers.
pub fn with_cors(app: Router, application: &ApplicationSettings) -> Router {
    let Some(origin) = application.cors_allow_origin.as_deref() else {
        return app;
    };
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        match origin.trim().parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(e) => {
                warn!("Ignoring invalid application.cors_allow_origin {:?}: {}", origin, e);
                return app;
            }
        }
    };

    let methods = application
        .cors_allow_methods
        .split(',')
        .filter_map(|m| m.trim().parse::<Method>().ok())
        .collect::<Vec<_>>();
    let headers = application
        .cors_allow_headers
        .split(',')
        .filter_map(|h| HeaderName::from_bytes(h.trim().as_bytes()).ok())
        .collect::<Vec<_>>();

    info!("CORS enabled for origin {}", origin);
    app.layer(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(methods)
            .allow_headers(headers),
    )
}
