use std::collections::BTreeMap;
use std::fs;
use std::io::Cursor;
use std::path::{Component, Path};
use std::sync::Arc;

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::SourceError;

/// Named byte blobs packaged with a compiled unit.
///
/// A store is shared by every type of the unit it belongs to, so cloning
/// only bumps a reference count.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    resources: Arc<BTreeMap<String, Arc<[u8]>>>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, typically fed by `include_bytes!`.
    pub fn with_resource(mut self, name: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl AsRef<[u8]>) {
        Arc::make_mut(&mut self.resources).insert(name.into(), Arc::from(bytes.as_ref()));
    }

    /// Load every file under `root` as a resource named
    /// `{namespace}.{relative.path}`, with path separators rendered as dots.
    ///
    /// `data/cases.json` under namespace `my_tests` becomes
    /// `my_tests.data.cases.json`. An empty namespace drops the prefix.
    pub fn from_dir(root: impl AsRef<Path>, namespace: &str) -> Result<Self, SourceError> {
        let root = root.as_ref();
        let root_name = root.display().to_string();
        let mut store = Self::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let name = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root_name.clone());
                SourceError::read(name, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let name = resource_name(namespace, relative);
            let bytes = fs::read(entry.path())
                .map_err(|e| SourceError::read(entry.path().display().to_string(), e))?;
            trace!(resource = %name, bytes = bytes.len(), "registered resource");
            store.insert(name, bytes);
        }

        debug!(root = %root_name, count = store.len(), "loaded resources from directory");
        Ok(store)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Open a resource for reading by its exact name.
    pub fn open(&self, name: &str) -> Option<Cursor<Arc<[u8]>>> {
        self.resources.get(name).map(|bytes| Cursor::new(Arc::clone(bytes)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

fn resource_name(namespace: &str, relative: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !namespace.is_empty() {
        parts.push(namespace.to_string());
    }
    for component in relative.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_string_lossy().into_owned());
        }
    }
    parts.join(".")
}
