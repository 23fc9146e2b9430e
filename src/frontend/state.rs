//! View model for the UI pages. Everything a page needs to know about the
//! operator's current selection lives here and travels in query strings or
//! form fields; the server keeps no session.

use serde::{Deserialize, Serialize};

use crate::catalog::UI_CATEGORIES;
use crate::store::normalize_template_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Browse,
    Add,
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManageTab {
    #[default]
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Info,
    Error,
}

impl FlashKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Info => "info",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Error, message: message.into() }
    }
}

/// Category/template picked in the current request, as sent by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    pub category: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: Mode,
    pub manage_tab: ManageTab,
    pub category: String,
    pub template: Option<String>,
    pub flash: Option<Flash>,
}

impl ViewState {
    pub fn new(mode: Mode, selection: &Selection) -> Self {
        Self {
            mode,
            manage_tab: ManageTab::default(),
            category: resolve_category(selection.category.as_deref()),
            template: selection
                .template
                .as_deref()
                .map(normalize_template_id)
                .filter(|id| !id.is_empty()),
            flash: None,
        }
    }

    pub fn manage(tab: ManageTab, selection: &Selection) -> Self {
        Self {
            manage_tab: tab,
            ..Self::new(Mode::Manage, selection)
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }

    /// Keeps the requested template if it is still listed, otherwise picks the first.
    pub fn select_template(&mut self, available: &[String]) {
        let keep = self
            .template
            .as_ref()
            .is_some_and(|t| available.contains(t));
        if !keep {
            self.template = available.first().cloned();
        }
    }
}

/// Unknown or missing categories fall back to the first picker entry.
pub fn resolve_category(requested: Option<&str>) -> String {
    requested
        .filter(|c| UI_CATEGORIES.contains(c))
        .unwrap_or(UI_CATEGORIES[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(category: Option<&str>, template: Option<&str>) -> Selection {
        Selection {
            category: category.map(String::from),
            template: template.map(String::from),
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_first() {
        let state = ViewState::new(Mode::Browse, &selection(Some("../etc"), None));
        assert_eq!(state.category, "black_friday");

        let state = ViewState::new(Mode::Browse, &selection(Some("holiday"), None));
        assert_eq!(state.category, "holiday");
    }

    #[test]
    fn test_template_is_normalized() {
        let state = ViewState::new(Mode::Manage, &selection(None, Some("promo.html")));
        assert_eq!(state.template.as_deref(), Some("promo"));

        let state = ViewState::new(Mode::Manage, &selection(None, Some("  ")));
        assert_eq!(state.template, None);
    }

    #[test]
    fn test_select_template_prefers_requested_then_first() {
        let available = vec!["a".to_string(), "b".to_string()];

        let mut state = ViewState::manage(ManageTab::Delete, &selection(None, Some("b")));
        state.select_template(&available);
        assert_eq!(state.template.as_deref(), Some("b"));

        let mut state = ViewState::manage(ManageTab::Delete, &selection(None, Some("gone")));
        state.select_template(&available);
        assert_eq!(state.template.as_deref(), Some("a"));

        state.select_template(&[]);
        assert_eq!(state.template, None);
    }

    #[test]
    fn test_state_serializes_with_snake_case_modes() {
        let state = ViewState::manage(ManageTab::Delete, &selection(Some("holiday"), None))
            .with_flash(Flash::success("done"));
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["mode"], "manage");
        assert_eq!(json["manage_tab"], "delete");
        assert_eq!(json["flash"]["kind"], "success");

        let back: ViewState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
