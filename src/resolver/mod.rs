//! Locates and parses the JSON document behind a test method, then picks
//! the entry its key names.
//!
//! Source order: an embedded resource of the declaring type's unit named
//! after the explicit file name (or the type's full name), then a file on
//! disk (`name` with `.json` appended when it has no extension, or
//! `{full_name}.json`).

pub mod resources;

pub use resources::ResourceStore;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{KeyError, Result, SourceError};

const DEFAULT_EXTENSION: &str = "json";

/// Identity of the type that declares a test method, together with the
/// resources of the unit it was compiled into.
#[derive(Debug, Clone)]
pub struct DeclaringType {
    full_name: String,
    resources: ResourceStore,
}

impl DeclaringType {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            resources: ResourceStore::default(),
        }
    }

    /// Derive the full name from a Rust type path, rendering `::` as `.`.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>().replace("::", "."))
    }

    pub fn with_resources(mut self, resources: ResourceStore) -> Self {
        self.resources = resources;
        self
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }
}

/// Where a document was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Resource { name: String },
    /// `name` is the computed file name, `path` where it was found.
    File { name: String, path: PathBuf },
}

impl Source {
    /// The resource or file name errors refer to.
    pub fn name(&self) -> &str {
        match self {
            Self::Resource { name } | Self::File { name, .. } => name,
        }
    }
}

/// The test cases selected from a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Cases {
    /// The key mapped to an array: one case per element.
    Many(Vec<Value>),
    /// The key mapped to an object: exactly one case.
    One(Value),
}

impl Cases {
    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    base_dir: Option<PathBuf>,
}

impl Resolver {
    /// A resolver that opens files relative to the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Decide which source a lookup would read, without reading it.
    pub fn locate(&self, ty: &DeclaringType, file_name: Option<&str>) -> Result<Source> {
        let resource_name = file_name.unwrap_or(ty.full_name());
        if ty.resources().contains(resource_name) {
            return Ok(Source::Resource {
                name: resource_name.to_string(),
            });
        }

        let file_name = default_file_name(ty, file_name);
        let path = self.file_path(&file_name);
        if path.exists() {
            Ok(Source::File {
                name: file_name,
                path,
            })
        } else {
            Err(SourceError::not_found(file_name).into())
        }
    }

    /// Read and parse the document for `ty`.
    ///
    /// The source is read in full and released before parsing starts, so
    /// I/O failures surface as read errors and only malformed bytes as
    /// parse errors.
    pub fn load(&self, ty: &DeclaringType, file_name: Option<&str>) -> Result<Value> {
        let source = self.locate(ty, file_name)?;
        let bytes = read_source(ty, &source)?;
        let root =
            serde_json::from_slice(&bytes).map_err(|e| SourceError::parse(source.name(), e))?;
        Ok(root)
    }

    fn file_path(&self, file_name: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

pub struct ResolverBuilder {
    base_dir: Option<PathBuf>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Resolve relative file names against `dir` instead of the current
    /// working directory. Absolute file names are unaffected.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            base_dir: self.base_dir,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn read_source(ty: &DeclaringType, source: &Source) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match source {
        Source::Resource { name } => {
            debug!(resource = %name, "loading test data from embedded resource");
            let mut stream = ty
                .resources()
                .open(name)
                .ok_or_else(|| SourceError::not_found(name.as_str()))?;
            stream
                .read_to_end(&mut bytes)
                .map_err(|e| SourceError::read(name.as_str(), e))?;
        }
        Source::File { name, path } => {
            debug!(path = %path.display(), "loading test data from file");
            let mut file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SourceError::not_found(name.as_str()),
                _ => SourceError::read(name.as_str(), e),
            })?;
            file.read_to_end(&mut bytes)
                .map_err(|e| SourceError::read(name.as_str(), e))?;
        }
    }
    Ok(bytes)
}

/// File name used when no embedded resource matches.
pub fn default_file_name(ty: &DeclaringType, file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if has_extension(name) => name.to_string(),
        Some(name) => format!("{name}.{DEFAULT_EXTENSION}"),
        None => format!("{}.{DEFAULT_EXTENSION}", ty.full_name()),
    }
}

/// Whether the last path component has a non-empty extension. A leading
/// dot counts, so `.testdata` is used as given; a trailing dot does not.
fn has_extension(name: &str) -> bool {
    let Some(file_name) = Path::new(name).file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy();
    file_name
        .rfind('.')
        .is_some_and(|dot| dot + 1 < file_name.len())
}

/// Pick the entry named `key` from the top level of `root`.
pub fn select_key(root: Value, key: &str) -> Result<Cases> {
    let mut root = match root {
        Value::Object(map) => map,
        other => {
            return Err(KeyError::RootNotObject {
                found: json_type(&other),
            }
            .into())
        }
    };

    match root.remove(key) {
        Some(Value::Array(items)) => Ok(Cases::Many(items)),
        Some(object @ Value::Object(_)) => Ok(Cases::One(object)),
        Some(other) => Err(KeyError::not_array_or_object(key, json_type(&other)).into()),
        None => Err(KeyError::not_found(key).into()),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
