use anyhow::{bail, Result};
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use template_manager::catalog::{build_catalog, duplicate_categories};
use template_manager::config::{validate_store_settings, Settings};
use template_manager::TemplateStore;

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new()?;
    validate_store_settings(&settings)?;

    let store = TemplateStore::new(settings.store.root.clone());
    let report = build_catalog(&store);

    for (category, templates) in store.list_all()? {
        println!("\n{}:", category);
        for template in templates {
            println!("  - {}", template);
        }
    }

    let duplicates = duplicate_categories();
    if !duplicates.is_empty() {
        println!(
            "\nCategories defined more than once (last definition used): {}",
            duplicates.join(", ")
        );
    }

    if !report.is_complete() {
        bail!("{} templates could not be written", report.failed.len());
    }
    Ok(())
}
