use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::names::{validate_segment, NameKind, TEMPLATE_EXTENSION};
use crate::metrics;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid {kind} name: {name:?}")]
    InvalidName { kind: NameKind, name: String },
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Directory-backed template store: `<root>/<category>/<template_id>.html`.
///
/// Nothing is cached; every call reflects what is on disk right now.
#[derive(Debug)]
pub struct TemplateStore {
    root: PathBuf,
    // Serializes save/delete so pruning an emptied category cannot race a save into it.
    write_lock: Mutex<()>,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_dir(&self, category: &str) -> Result<PathBuf, StoreError> {
        validate_segment(NameKind::Category, category)?;
        Ok(self.root.join(category))
    }

    fn template_path(&self, category: &str, template_id: &str) -> Result<PathBuf, StoreError> {
        validate_segment(NameKind::Template, template_id)?;
        let dir = self.category_dir(category)?;
        Ok(dir.join(format!("{}.{}", template_id, TEMPLATE_EXTENSION)))
    }

    /// Template ids in `category`, sorted. A missing category is simply empty.
    pub fn list(&self, category: &str) -> Result<Vec<String>, StoreError> {
        let dir = self.category_dir(category)?;
        list_dir(&dir)
    }

    /// Every category directory under the root with its template ids.
    pub fn list_all(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
        let mut templates = BTreeMap::new();

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(templates),
            Err(e) => return Err(StoreError::io(&self.root, e)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.root, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(category) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Err(e) = validate_segment(NameKind::Category, category) {
                debug!("Skipping directory {}: {}", path.display(), e);
                continue;
            }
            templates.insert(category.to_string(), list_dir(&path)?);
        }

        Ok(templates)
    }

    pub fn read(&self, category: &str, template_id: &str) -> Result<Option<String>, StoreError> {
        let path = self.template_path(category, template_id)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Template not found: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// Creates or fully overwrites a template.
    pub fn save(&self, category: &str, template_id: &str, content: &str) -> Result<(), StoreError> {
        let path = self.template_path(category, template_id)?;
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        fs::write(&path, content).map_err(|e| StoreError::io(&path, e))?;

        metrics::record_template_saved();
        debug!("Saved template: {}/{}.{}", category, template_id, TEMPLATE_EXTENSION);
        Ok(())
    }

    /// Removes a template and prunes its category directory if that leaves it
    /// empty. Failures are logged and reported as `false`.
    pub fn delete(&self, category: &str, template_id: &str) -> bool {
        let path = match self.template_path(category, template_id) {
            Ok(path) => path,
            Err(e) => {
                warn!("Refusing to delete template: {}", e);
                return false;
            }
        };
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());

        if !path.is_file() {
            warn!("Template not found: {}/{}.{}", category, template_id, TEMPLATE_EXTENSION);
            return false;
        }

        if let Err(e) = remove_and_prune(&path) {
            error!("Error deleting template: {}", e);
            return false;
        }

        metrics::record_template_deleted();
        info!("Successfully deleted template: {}/{}.{}", category, template_id, TEMPLATE_EXTENSION);
        true
    }
}

fn remove_and_prune(path: &Path) -> Result<(), StoreError> {
    fs::remove_file(path).map_err(|e| StoreError::io(path, e))?;

    let Some(dir) = path.parent() else {
        return Ok(());
    };
    let mut remaining = fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;
    if remaining.next().is_none() {
        fs::remove_dir(dir).map_err(|e| StoreError::io(dir, e))?;
        debug!("Removed empty category directory {}", dir.display());
    }
    Ok(())
}

fn list_dir(dir: &Path) -> Result<Vec<String>, StoreError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(dir, e)),
    };

    let mut ids = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| StoreError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        // Only list ids that read and delete will accept.
        if let Err(e) = validate_segment(NameKind::Template, stem) {
            debug!("Skipping {}: {}", path.display(), e);
            continue;
        }
        ids.push(stem.to_string());
    }

    ids.sort();
    Ok(ids)
}
