use anyhow::{anyhow, Result};

use super::Settings;

pub fn validate_store_settings(settings: &Settings) -> Result<()> {
    let root = &settings.store.root;

    if root.as_os_str().is_empty() {
        return Err(anyhow!("store.root must not be empty"));
    }

    if root.exists() && !root.is_dir() {
        return Err(anyhow!(
            "store.root ({}) exists but is not a directory",
            root.display()
        ));
    }

    Ok(())
}
