//! The data-provider surface: a test method descriptor and the `JsonData`
//! configuration that turns it into a sequence of argument vectors.

use serde_json::Value;
use tracing::{debug, warn};

use crate::binder::{Argument, ArgumentVector, Binder, ParamType, Parameter};
use crate::error::{ConfigError, Result};
use crate::resolver::{self, DeclaringType, Resolver};

/// A test method as seen by the data provider: its name, the type that
/// declares it, and its formal parameters in declaration order.
#[derive(Debug, Clone)]
pub struct TestMethod {
    name: String,
    declaring_type: DeclaringType,
    parameters: Vec<Parameter>,
}

impl TestMethod {
    pub fn new(name: impl Into<String>, declaring_type: DeclaringType) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> &DeclaringType {
        &self.declaring_type
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

/// JSON-backed test data for one test method.
///
/// The key defaults to the method's name and the document defaults to the
/// declaring type's resource or `{full_name}.json`. Inline values fill the
/// leading parameters of every produced case.
#[derive(Debug, Clone, Default)]
pub struct JsonData {
    key: Option<String>,
    file_name: Option<String>,
    inline_values: Vec<Argument>,
}

impl JsonData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the entry named `key` instead of the method's name.
    ///
    /// Fails when `key` is empty or whitespace.
    pub fn with_key(key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            key: Some(validate_key(key.into())?),
            ..Self::default()
        })
    }

    pub fn with_inline(values: impl IntoIterator<Item = Argument>) -> Self {
        Self {
            inline_values: values.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_key_and_inline(
        key: impl Into<String>,
        values: impl IntoIterator<Item = Argument>,
    ) -> Result<Self> {
        Ok(Self {
            key: Some(validate_key(key.into())?),
            file_name: None,
            inline_values: values.into_iter().collect(),
        })
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.set_file_name(Some(file_name.into()));
        self
    }

    /// Set the resource or file name. Empty and whitespace names unset it.
    pub fn set_file_name(&mut self, file_name: Option<String>) {
        self.file_name = file_name.filter(|name| !name.trim().is_empty());
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn inline_values(&self) -> &[Argument] {
        &self.inline_values
    }

    /// Resolve the key this configuration reads for `method`.
    pub fn resolved_key<'a>(&'a self, method: &'a TestMethod) -> &'a str {
        self.key.as_deref().unwrap_or(method.name())
    }

    /// Test cases for `method`, reading files relative to the current
    /// working directory.
    pub fn data(&self, method: &TestMethod) -> Result<TestCases> {
        self.data_with(&Resolver::new(), method)
    }

    /// Test cases for `method`, located through `resolver`.
    ///
    /// Locating, reading and key selection happen before this returns;
    /// binding happens lazily as the returned iterator advances.
    pub fn data_with(&self, resolver: &Resolver, method: &TestMethod) -> Result<TestCases> {
        let ty = method.declaring_type();
        if ty.full_name().is_empty() {
            return Err(ConfigError::unnamed_type(method.name()).into());
        }

        let key = self.resolved_key(method).to_string();
        Binder::new(method.name(), method.parameters(), &self.inline_values, &key)?;

        let root = resolver.load(ty, self.file_name())?;
        let cases = resolver::select_key(root, &key)?.into_vec();
        debug!(method = method.name(), key = %key, cases = cases.len(), "resolved test data");

        Ok(TestCases {
            method: method.name().to_string(),
            key,
            parameters: method.parameters().to_vec(),
            inline_values: self.inline_values.clone(),
            cases: cases.into_iter(),
        })
    }
}

fn validate_key(key: String) -> Result<String> {
    if key.trim().is_empty() {
        return Err(ConfigError::EmptyKey.into());
    }
    Ok(key)
}

/// Lazily bound argument vectors, one per test case, in document order.
#[derive(Debug)]
pub struct TestCases {
    method: String,
    key: String,
    parameters: Vec<Parameter>,
    inline_values: Vec<Argument>,
    cases: std::vec::IntoIter<Value>,
}

impl TestCases {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Iterator for TestCases {
    type Item = Result<ArgumentVector>;

    fn next(&mut self) -> Option<Self::Item> {
        let case = self.cases.next()?;
        if !case.is_object() {
            warn!(
                method = %self.method,
                key = %self.key,
                found = resolver::json_type(&case),
                "test case is not an object, parameters will take default values"
            );
        }
        let bound = Binder::new(&self.method, &self.parameters, &self.inline_values, &self.key)
            .and_then(|binder| binder.bind(&case));
        Some(bound)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cases.size_hint()
    }
}

impl ExactSizeIterator for TestCases {}
