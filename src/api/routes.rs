use axum::{
    routing::{get, post},
    Router,
};
use serde_json::json;
use axum::Json;
use std::sync::Arc;

use super::handlers;
use crate::store::TemplateStore;

pub fn create_router(store: Arc<TemplateStore>) -> Router {
    Router::new()
        .route("/api", get(|| async {
            Json(json!({
                "message": "Email Template Manager API is running"
            }))
        }))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/templates", get(handlers::list_all_templates))
        .route("/api/templates/:category", get(handlers::list_templates))
        .route(
            "/api/templates/:category/:template_id",
            get(handlers::get_template)
                .put(handlers::save_template)
                .delete(handlers::delete_template),
        )
        .route("/api/catalog", post(handlers::build_catalog))
        .with_state(store)
}
