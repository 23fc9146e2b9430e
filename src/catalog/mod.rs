mod content;
mod definitions;

pub use content::{content_fragment, render_page, ACCENT_STYLES};
pub use definitions::{category_table, duplicate_categories, CategoryDefinition, CATALOG, UI_CATEGORIES};

use serde::Serialize;
use tracing::{error, info};

use crate::metrics;
use crate::store::{TemplateStore, TEMPLATE_EXTENSION};

/// Outcome of a catalog build. Entries are `category/template_id.html`.
#[derive(Debug, Default, Serialize)]
pub struct CatalogReport {
    pub written: Vec<String>,
    pub failed: Vec<CatalogFailure>,
}

#[derive(Debug, Serialize)]
pub struct CatalogFailure {
    pub path: String,
    pub error: String,
}

impl CatalogReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes every template in the built-in catalog, overwriting existing files.
///
/// Each file is written independently: a failure is logged and recorded and the
/// build moves on. Nothing is rolled back.
pub fn build_catalog(store: &TemplateStore) -> CatalogReport {
    let mut report = CatalogReport::default();

    for (category, templates) in category_table() {
        for (template_id, title) in templates {
            let relative = format!("{}/{}.{}", category, template_id, TEMPLATE_EXTENSION);
            let page = render_page(title, category, template_id);

            match store.save(category, template_id, &page) {
                Ok(()) => {
                    metrics::record_catalog_template_written();
                    info!("Created template: {}", relative);
                    report.written.push(relative);
                }
                Err(e) => {
                    metrics::record_catalog_template_failed();
                    error!("Failed to create template {}: {}", relative, e);
                    report.failed.push(CatalogFailure {
                        path: relative,
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    info!(
        "Catalog build finished: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn snapshot(store: &TemplateStore) -> BTreeMap<String, String> {
        let mut files = BTreeMap::new();
        for (category, ids) in store.list_all().unwrap() {
            for id in ids {
                let content = store.read(&category, &id).unwrap().unwrap();
                files.insert(format!("{}/{}", category, id), content);
            }
        }
        files
    }

    #[test]
    fn test_build_writes_every_resolved_template() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());

        let report = build_catalog(&store);

        let expected: usize = category_table().values().map(|t| t.len()).sum();
        assert!(report.is_complete());
        assert_eq!(report.written.len(), expected);
        assert!(report.written.contains(&"holiday/valentines_special.html".to_string()));

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), category_table().len());
        assert_eq!(all["announcement"].len(), 12);
    }

    #[test]
    fn test_mega_deal_has_its_banner() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        build_catalog(&store);

        let path = dir.path().join("black_friday").join("mega_deal.html");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("BLACK FRIDAY MEGA DEALS"));
        assert!(content.contains("<title>Black Friday Mega Deals</title>"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());

        build_catalog(&store);
        let first = snapshot(&store);
        build_catalog(&store);
        let second = snapshot(&store);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_overwrites_edited_templates_and_keeps_extras() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        store.save("holiday", "christmas_special", "edited").unwrap();
        store.save("holiday", "my_custom", "<p>mine</p>").unwrap();

        build_catalog(&store);

        let christmas = store.read("holiday", "christmas_special").unwrap().unwrap();
        assert!(christmas.contains("<h1>Christmas Special</h1>"));
        assert_eq!(
            store.read("holiday", "my_custom").unwrap().as_deref(),
            Some("<p>mine</p>")
        );
    }

    #[test]
    fn test_unwritable_category_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path());
        // A plain file where the category directory should be.
        fs::write(dir.path().join("holiday"), "not a directory").unwrap();

        let report = build_catalog(&store);

        assert_eq!(report.failed.len(), 6);
        assert!(report.failed.iter().all(|f| f.path.starts_with("holiday/")));
        assert!(store.read("ecommerce", "product_page").unwrap().is_some());
    }
}
