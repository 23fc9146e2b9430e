//! Validation of the two path segments that address a template on disk.

use std::fmt;

use super::StoreError;

pub const TEMPLATE_EXTENSION: &str = "html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Category,
    Template,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Category => write!(f, "category"),
            NameKind::Template => write!(f, "template"),
        }
    }
}

/// Rejects anything that could escape the category directory or hide a file.
pub fn validate_segment(kind: NameKind, name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);

    if invalid {
        return Err(StoreError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Trims user input and strips a trailing `.html`, so both spellings
/// address the same file.
pub fn normalize_template_id(input: &str) -> String {
    let trimmed = input.trim();
    let suffix = format!(".{}", TEMPLATE_EXTENSION);
    trimmed
        .strip_suffix(suffix.as_str())
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_valid() {
        assert!(validate_segment(NameKind::Category, "black_friday").is_ok());
        assert!(validate_segment(NameKind::Template, "Spring Promo-2").is_ok());
    }

    #[test]
    fn test_traversal_and_separators_are_rejected() {
        for name in ["", ".", "..", "../etc", "a/b", "a\\b", ".hidden", "tab\there"] {
            assert!(
                validate_segment(NameKind::Template, name).is_err(),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_strips_extension_once() {
        assert_eq!(normalize_template_id("promo"), "promo");
        assert_eq!(normalize_template_id(" promo.html "), "promo");
        assert_eq!(normalize_template_id("promo.html.html"), "promo.html");
        assert_eq!(normalize_template_id(".html"), "");
    }
}
