use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::state::{Flash, ManageTab, Mode, Selection, ViewState};
use super::views::{
    self, file_name, AddFormView, AddPage, BrowsePage, DeletePage, EditorView, TemplateView,
    UpdatePage,
};
use crate::catalog::UI_CATEGORIES;
use crate::store::{normalize_template_id, StoreError, TemplateStore};

#[derive(Debug, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditAction {
    Update,
    Preview,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub category: String,
    pub template: String,
    #[serde(default)]
    pub content: String,
    pub action: EditAction,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub category: String,
    pub template: String,
}

fn posted_selection(category: &str, template: Option<&str>) -> Selection {
    Selection {
        category: Some(category.to_string()),
        template: template.map(str::to_string),
    }
}

/// Browsers submit textarea lines as CRLF; the store keeps the LF text it was given.
fn posted_content(raw: &str) -> String {
    raw.replace("\r\n", "\n")
}

fn unknown_category(category: &str) -> Flash {
    Flash::error(format!("Unknown category: {}", category))
}

fn store_failure(action: &str, e: &StoreError) -> Flash {
    match e {
        StoreError::InvalidName { .. } => Flash::error(e.to_string()),
        _ => {
            error!("Failed to {} template: {}", action, e);
            Flash::error(format!("Failed to {} template: {}", action, e))
        }
    }
}

/// Lists the selected category, settles on a template and reads it.
/// Problems end up as a flash message on the page rather than an error page.
fn load_selection(store: &TemplateStore, state: &mut ViewState) -> (Vec<String>, Option<String>) {
    let templates = match store.list(&state.category) {
        Ok(templates) => templates,
        Err(e) => {
            state.flash.get_or_insert(store_failure("list", &e));
            Vec::new()
        }
    };
    state.select_template(&templates);

    let Some(template) = state.template.as_deref() else {
        return (templates, None);
    };
    match store.read(&state.category, template) {
        Ok(current) => (templates, current),
        Err(e) => {
            state.flash.get_or_insert(store_failure("read", &e));
            (templates, None)
        }
    }
}

pub async fn browse(
    State(store): State<Arc<TemplateStore>>,
    Query(selection): Query<Selection>,
) -> BrowsePage {
    let mut state = ViewState::new(Mode::Browse, &selection);

    let ids = store.list(&state.category).unwrap_or_else(|e| {
        state.flash = Some(store_failure("list", &e));
        Vec::new()
    });

    let mut templates = Vec::with_capacity(ids.len());
    for id in ids {
        match store.read(&state.category, &id) {
            Ok(Some(content)) => templates.push(TemplateView { id, content }),
            // Removed between listing and reading
            Ok(None) => {}
            Err(e) => warn!("Skipping unreadable template {}/{}: {}", state.category, id, e),
        }
    }

    views::render_browse(&state, &templates)
}

pub async fn download(
    State(store): State<Arc<TemplateStore>>,
    Query(selection): Query<Selection>,
) -> Response {
    let state = ViewState::new(Mode::Browse, &selection);
    let template = state.template.clone().unwrap_or_default();

    match store.read(&state.category, &template) {
        Ok(Some(content)) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                file_name(&template).replace('"', "")
            );
            (
                [
                    (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                content,
            )
                .into_response()
        }
        Ok(None) | Err(_) => (
            StatusCode::NOT_FOUND,
            views::render_not_found(&state, &template),
        )
            .into_response(),
    }
}

pub async fn add_form(Query(selection): Query<Selection>) -> AddPage {
    let state = ViewState::new(Mode::Add, &selection);
    views::render_add(&state, &AddFormView::default())
}

pub async fn add_template(
    State(store): State<Arc<TemplateStore>>,
    Form(form): Form<AddForm>,
) -> AddPage {
    let state = ViewState::new(Mode::Add, &posted_selection(&form.category, None));
    let content = posted_content(&form.content);
    let echo = AddFormView {
        template_name: &form.template_name,
        content: &content,
        saved: None,
    };

    if !UI_CATEGORIES.contains(&form.category.as_str()) {
        return views::render_add(&state.with_flash(unknown_category(&form.category)), &echo);
    }

    let template_id = normalize_template_id(&form.template_name);
    if template_id.is_empty() || content.trim().is_empty() {
        let state = state.with_flash(Flash::error("Please provide both template name and content"));
        return views::render_add(&state, &echo);
    }

    match store.save(&state.category, &template_id, &content) {
        Ok(()) => {
            info!("Added template {}/{} from the UI", state.category, template_id);
            let state = state.with_flash(Flash::success(format!(
                "Template {} saved successfully!",
                file_name(&template_id)
            )));
            let saved = AddFormView {
                saved: Some(&content),
                ..AddFormView::default()
            };
            views::render_add(&state, &saved)
        }
        Err(e) => views::render_add(&state.with_flash(store_failure("save", &e)), &echo),
    }
}

pub async fn update_form(
    State(store): State<Arc<TemplateStore>>,
    Query(selection): Query<Selection>,
) -> UpdatePage {
    let mut state = ViewState::manage(ManageTab::Update, &selection);
    let (templates, current) = load_selection(&store, &mut state);

    let editor = EditorView {
        current: current.as_deref(),
        ..EditorView::default()
    };
    views::render_update(&state, &templates, &editor)
}

pub async fn update_template(
    State(store): State<Arc<TemplateStore>>,
    Form(form): Form<UpdateForm>,
) -> UpdatePage {
    let mut state = ViewState::manage(
        ManageTab::Update,
        &posted_selection(&form.category, Some(&form.template)),
    );
    if !UI_CATEGORIES.contains(&form.category.as_str()) {
        state.flash = Some(unknown_category(&form.category));
        return views::render_update(&state, &[], &EditorView::default());
    }
    let content = posted_content(&form.content);

    match form.action {
        EditAction::Preview => {
            let (templates, current) = load_selection(&store, &mut state);
            let editor = EditorView {
                current: current.as_deref(),
                draft: Some(&content),
                show_changes: true,
            };
            views::render_update(&state, &templates, &editor)
        }
        EditAction::Update => {
            let template = state.template.clone().unwrap_or_default();
            let saved = store.save(&state.category, &template, &content);
            state.flash = Some(match &saved {
                Ok(()) => Flash::success(format!(
                    "Template {} updated successfully!",
                    file_name(&template)
                )),
                Err(e) => store_failure("update", e),
            });

            let (templates, current) = load_selection(&store, &mut state);
            let editor = EditorView {
                current: current.as_deref(),
                draft: saved.is_err().then_some(content.as_str()),
                show_changes: false,
            };
            views::render_update(&state, &templates, &editor)
        }
    }
}

pub async fn delete_form(
    State(store): State<Arc<TemplateStore>>,
    Query(selection): Query<Selection>,
) -> DeletePage {
    let mut state = ViewState::manage(ManageTab::Delete, &selection);
    let (templates, current) = load_selection(&store, &mut state);
    views::render_delete(&state, &templates, current.as_deref())
}

pub async fn delete_template(
    State(store): State<Arc<TemplateStore>>,
    Form(form): Form<DeleteForm>,
) -> DeletePage {
    let mut state = ViewState::manage(
        ManageTab::Delete,
        &posted_selection(&form.category, Some(&form.template)),
    );
    if !UI_CATEGORIES.contains(&form.category.as_str()) {
        state.flash = Some(unknown_category(&form.category));
        return views::render_delete(&state, &[], None);
    }

    let template = state.template.take().unwrap_or_default();
    state.flash = Some(if store.delete(&state.category, &template) {
        Flash::success(format!("Template {} deleted successfully!", file_name(&template)))
    } else {
        Flash::info(format!("Template {} not found", file_name(&template)))
    });

    let (templates, current) = load_selection(&store, &mut state);
    views::render_delete(&state, &templates, current.as_deref())
}
