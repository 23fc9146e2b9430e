mod handlers;
mod markup;
pub mod state;
pub mod static_files;
mod views;


use axum::{response::Redirect, routing::get, Router};
use std::sync::Arc;

use crate::store::TemplateStore;

pub use state::{Flash, FlashKind, ManageTab, Mode, Selection, ViewState};

pub fn create_frontend_router(store: Arc<TemplateStore>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/browse") }))
        .route("/browse", get(handlers::browse))
        .route("/download", get(handlers::download))
        .route("/add", get(handlers::add_form).post(handlers::add_template))
        .route(
            "/manage/update",
            get(handlers::update_form).post(handlers::update_template),
        )
        .route(
            "/manage/delete",
            get(handlers::delete_form).post(handlers::delete_template),
        )
        .with_state(store)
        .merge(static_files::create_static_router())
}
