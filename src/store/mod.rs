mod names;
mod template_store;

pub use names::{normalize_template_id, validate_segment, NameKind, TEMPLATE_EXTENSION};
pub use template_store::{StoreError, TemplateStore};
