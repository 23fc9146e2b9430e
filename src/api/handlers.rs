use axum::{
    extract::{Path, State},
    Json,
};
use std::{collections::BTreeMap, sync::Arc};
use tracing::info;

use super::types::{
    ApiError, CategoriesResponse, DeleteResponse, SaveTemplateRequest, TemplateRecord,
};
use crate::catalog::{self, CatalogReport, UI_CATEGORIES};
use crate::store::{normalize_template_id, validate_segment, NameKind, TemplateStore};

pub async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: UI_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}

pub async fn list_all_templates(
    State(store): State<Arc<TemplateStore>>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, ApiError> {
    Ok(Json(store.list_all()?))
}

pub async fn list_templates(
    State(store): State<Arc<TemplateStore>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(store.list(&category)?))
}

pub async fn get_template(
    State(store): State<Arc<TemplateStore>>,
    Path((category, template_id)): Path<(String, String)>,
) -> Result<Json<TemplateRecord>, ApiError> {
    let template_id = normalize_template_id(&template_id);
    let content = store
        .read(&category, &template_id)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(TemplateRecord {
        category,
        template_id,
        content,
    }))
}

pub async fn save_template(
    State(store): State<Arc<TemplateStore>>,
    Path((category, template_id)): Path<(String, String)>,
    Json(request): Json<SaveTemplateRequest>,
) -> Result<Json<TemplateRecord>, ApiError> {
    let template_id = normalize_template_id(&template_id);
    store.save(&category, &template_id, &request.content)?;

    Ok(Json(TemplateRecord {
        category,
        template_id,
        content: request.content,
    }))
}

pub async fn delete_template(
    State(store): State<Arc<TemplateStore>>,
    Path((category, template_id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let template_id = normalize_template_id(&template_id);
    // Reject bad names as 400 before the store folds them into `false`.
    validate_segment(NameKind::Category, &category)?;
    validate_segment(NameKind::Template, &template_id)?;

    if !store.delete(&category, &template_id) {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteResponse { deleted: true }))
}

pub async fn build_catalog(
    State(store): State<Arc<TemplateStore>>,
) -> Result<Json<CatalogReport>, ApiError> {
    info!("Catalog build requested through the API");
    let report = tokio::task::spawn_blocking(move || catalog::build_catalog(&store))
        .await
        .map_err(|e| anyhow::anyhow!("Catalog build task failed: {}", e))?;

    Ok(Json(report))
}
