use askama::Template;

use super::markup::{display_title, link};
use super::state::{Flash, ManageTab, Mode, ViewState};
use crate::catalog::UI_CATEGORIES;
use crate::store::TEMPLATE_EXTENSION;

/// A template loaded for display.
pub struct TemplateView {
    pub id: String,
    pub content: String,
}

/// Fields of the Add form, echoed back when validation fails.
#[derive(Debug, Default)]
pub struct AddFormView<'a> {
    pub template_name: &'a str,
    pub content: &'a str,
    pub saved: Option<&'a str>,
}

/// Current and pending content of the Update tab.
#[derive(Debug, Default)]
pub struct EditorView<'a> {
    pub current: Option<&'a str>,
    pub draft: Option<&'a str>,
    pub show_changes: bool,
}

pub fn file_name(template_id: &str) -> String {
    format!("{}.{}", template_id, TEMPLATE_EXTENSION)
}

fn category_link(path: &str, state: &ViewState) -> String {
    link(path, &[("category", state.category.as_str())])
}

pub struct NavLink {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

pub struct Choice {
    pub value: String,
    pub selected: bool,
}

fn choices<S: AsRef<str>>(values: &[S], selected: Option<&str>) -> Vec<Choice> {
    values
        .iter()
        .map(|value| Choice {
            value: value.as_ref().to_string(),
            selected: Some(value.as_ref()) == selected,
        })
        .collect()
}

/// Heading, navigation and flash message shared by every page.
pub struct Chrome {
    pub heading: &'static str,
    pub nav: Vec<NavLink>,
    pub flash: Option<Flash>,
}

impl Chrome {
    fn new(heading: &'static str, state: &ViewState) -> Self {
        let nav = [
            (Mode::Browse, "/browse", "Browse Templates"),
            (Mode::Add, "/add", "Add New Template"),
            (Mode::Manage, "/manage/update", "Manage Templates"),
        ]
        .into_iter()
        .map(|(mode, path, label)| NavLink {
            href: category_link(path, state),
            label,
            active: mode == state.mode,
        })
        .collect();

        Self {
            heading,
            nav,
            flash: state.flash.clone(),
        }
    }
}

/// GET form that re-renders the page for another category (and template).
pub struct Picker {
    pub action: &'static str,
    pub categories: Vec<Choice>,
    pub template_label: &'static str,
    pub templates: Vec<Choice>,
}

impl Picker {
    fn new(action: &'static str, state: &ViewState, templates: &[String], template_label: &'static str) -> Self {
        Self {
            action,
            categories: choices(UI_CATEGORIES, Some(state.category.as_str())),
            template_label,
            templates: choices(templates, state.template.as_deref()),
        }
    }
}

fn manage_tabs(state: &ViewState) -> Vec<NavLink> {
    [
        (ManageTab::Update, "/manage/update", "Update Templates"),
        (ManageTab::Delete, "/manage/delete", "Delete Templates"),
    ]
    .into_iter()
    .map(|(tab, path, label)| NavLink {
        href: category_link(path, state),
        label,
        active: tab == state.manage_tab,
    })
    .collect()
}

pub struct TemplateCard {
    pub title: String,
    pub download_href: String,
    pub file_name: String,
    pub content: String,
    pub lines: Vec<String>,
}

#[derive(Template)]
#[template(path = "browse.html")]
pub struct BrowsePage {
    pub chrome: Chrome,
    pub picker: Picker,
    pub category: String,
    pub cards: Vec<TemplateCard>,
}

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddPage {
    pub chrome: Chrome,
    pub categories: Vec<Choice>,
    pub template_name: String,
    pub content: String,
    pub saved: Option<String>,
}

pub struct Editor {
    pub template: String,
    pub current: String,
    pub draft: String,
    pub show_changes: bool,
}

#[derive(Template)]
#[template(path = "manage_update.html")]
pub struct UpdatePage {
    pub chrome: Chrome,
    pub tabs: Vec<NavLink>,
    pub picker: Picker,
    pub category: String,
    pub editor: Option<Editor>,
}

pub struct SelectedTemplate {
    pub template: String,
    pub content: String,
}

#[derive(Template)]
#[template(path = "manage_delete.html")]
pub struct DeletePage {
    pub chrome: Chrome,
    pub tabs: Vec<NavLink>,
    pub picker: Picker,
    pub category: String,
    pub selected: Option<SelectedTemplate>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub chrome: Chrome,
    pub category: String,
    pub file_name: String,
    pub back_href: String,
}

pub fn render_browse(state: &ViewState, templates: &[TemplateView]) -> BrowsePage {
    let cards = templates
        .iter()
        .map(|template| TemplateCard {
            title: display_title(&template.id),
            download_href: link(
                "/download",
                &[("category", state.category.as_str()), ("template", template.id.as_str())],
            ),
            file_name: file_name(&template.id),
            content: template.content.clone(),
            lines: template.content.lines().map(str::to_string).collect(),
        })
        .collect();

    BrowsePage {
        chrome: Chrome::new("Browse Templates by Category", state),
        picker: Picker::new("/browse", state, &[], ""),
        category: state.category.clone(),
        cards,
    }
}

pub fn render_add(state: &ViewState, form: &AddFormView<'_>) -> AddPage {
    AddPage {
        chrome: Chrome::new("Add New Template", state),
        categories: choices(UI_CATEGORIES, Some(state.category.as_str())),
        template_name: form.template_name.to_string(),
        content: form.content.to_string(),
        saved: form.saved.map(str::to_string),
    }
}

pub fn render_update(state: &ViewState, templates: &[String], editor: &EditorView<'_>) -> UpdatePage {
    let editor = match (state.template.as_deref(), editor.current) {
        (Some(template), Some(current)) => Some(Editor {
            template: template.to_string(),
            current: current.to_string(),
            draft: editor.draft.unwrap_or(current).to_string(),
            show_changes: editor.show_changes,
        }),
        _ => None,
    };

    UpdatePage {
        chrome: Chrome::new("Manage Templates", state),
        tabs: manage_tabs(state),
        picker: Picker::new("/manage/update", state, templates, "Select Template to Update"),
        category: state.category.clone(),
        editor,
    }
}

pub fn render_delete(state: &ViewState, templates: &[String], current: Option<&str>) -> DeletePage {
    let selected = match (state.template.as_deref(), current) {
        (Some(template), Some(content)) => Some(SelectedTemplate {
            template: template.to_string(),
            content: content.to_string(),
        }),
        _ => None,
    };

    DeletePage {
        chrome: Chrome::new("Manage Templates", state),
        tabs: manage_tabs(state),
        picker: Picker::new("/manage/delete", state, templates, "Select Template to Delete"),
        category: state.category.clone(),
        selected,
    }
}

pub fn render_not_found(state: &ViewState, template_id: &str) -> NotFoundPage {
    NotFoundPage {
        chrome: Chrome::new("Template Not Found", state),
        category: state.category.clone(),
        file_name: file_name(template_id),
        back_href: link("/browse", &[("category", state.category.as_str())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::state::Selection;

    fn state(mode: Mode, category: &str) -> ViewState {
        ViewState::new(
            mode,
            &Selection {
                category: Some(category.to_string()),
                template: None,
            },
        )
    }

    #[test]
    fn test_browse_lists_each_template_with_views() {
        let templates = vec![
            TemplateView { id: "christmas_special".into(), content: "<h1>Xmas</h1>".into() },
            TemplateView { id: "easter".into(), content: "<h1 class=\"x\">Easter</h1>\n<p>Eggs</p>".into() },
        ];
        let html = render_browse(&state(Mode::Browse, "holiday"), &templates).render().unwrap();

        assert!(html.contains("Found 2 templates in holiday category"));
        assert!(html.contains("<h3>Christmas Special</h3>"));
        assert!(html.contains("/download?category=holiday&amp;template=easter"));
        assert!(html.contains(r#"download="easter.html""#));
        assert_eq!(html.matches("<iframe").count(), 2);
        assert!(html.contains(r#"srcdoc="&lt;h1 class=&quot;x&quot;&gt;Easter&lt;/h1&gt;"#));
        assert_eq!(html.matches(r#"<span class="line">"#).count(), 3);
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_browse_empty_category_shows_info() {
        let html = render_browse(&state(Mode::Browse, "notification"), &[]).render().unwrap();
        assert!(html.contains("No templates found in notification category"));
        assert!(!html.contains("<select id=\"template\""));
    }

    #[test]
    fn test_nav_marks_current_mode() {
        let html = render_add(&state(Mode::Add, "holiday"), &AddFormView::default())
            .render()
            .unwrap();
        assert!(html.contains(r#"<a href="/add?category=holiday" class="active">Add New Template</a>"#));
        assert!(html.contains(r#"<option value="holiday" selected>holiday</option>"#));
        assert!(!html.contains("<h3>Preview</h3>"));
    }

    #[test]
    fn test_flash_message_is_escaped() {
        let view = state(Mode::Add, "holiday").with_flash(Flash::error("bad <name>"));
        let html = render_add(&view, &AddFormView::default()).render().unwrap();
        assert!(html.contains(r#"<div class="flash error">bad &lt;name&gt;</div>"#));
    }

    #[test]
    fn test_update_shows_draft_and_changes_preview() {
        let mut view = ViewState::manage(ManageTab::Update, &Selection::default());
        view.template = Some("promo".into());
        let editor = EditorView {
            current: Some("<p>old</p>"),
            draft: Some("<p>new</p>"),
            show_changes: true,
        };

        let html = render_update(&view, &["promo".to_string()], &editor).render().unwrap();

        assert!(html.contains("Current Version"));
        assert!(html.contains("rows=\"20\">\n&lt;p&gt;new&lt;/p&gt;</textarea>"));
        assert!(html.contains("Preview of Changes"));
        assert!(html.contains(r#"<a class="tab active" href="/manage/update?category=black_friday">"#));
        assert!(html.contains(r#"<option value="promo" selected>promo</option>"#));
    }

    #[test]
    fn test_textarea_keeps_leading_newline_of_content() {
        let mut view = ViewState::manage(ManageTab::Update, &Selection::default());
        view.template = Some("promo".into());
        let editor = EditorView {
            current: Some("\n<p>body</p>"),
            ..EditorView::default()
        };

        let html = render_update(&view, &["promo".to_string()], &editor).render().unwrap();

        // The parser drops the first newline after <textarea>, leaving the content intact.
        assert!(html.contains("rows=\"20\">\n\n&lt;p&gt;body&lt;/p&gt;</textarea>"));
    }

    #[test]
    fn test_delete_without_templates_shows_info() {
        let view = ViewState::manage(ManageTab::Delete, &Selection::default());
        let html = render_delete(&view, &[], None).render().unwrap();
        assert!(html.contains("No templates found in black_friday category"));
        assert!(!html.contains("Delete Template</button>"));
    }

    #[test]
    fn test_not_found_links_back_to_category() {
        let html = render_not_found(&state(Mode::Browse, "ecommerce"), "ghost")
            .render()
            .unwrap();
        assert!(html.contains("Template ecommerce/ghost.html not found"));
        assert!(html.contains(r#"<a href="/browse?category=ecommerce">Back to ecommerce</a>"#));
    }
}
