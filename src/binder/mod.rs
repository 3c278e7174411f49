//! Maps the fields of one JSON test case onto a method's parameters.
//!
//! Inline values take the leading positions verbatim. Every remaining
//! parameter is matched by exact name against the case's own properties,
//! then against the synthetic `key` property that carries the resolved key.
//! Unmatched parameters receive their type's absence value; unmatched
//! properties are ignored.

pub mod argument;
pub mod param;

pub use argument::{Argument, ArgumentVector};
pub use param::{ParamType, Parameter};

use serde_json::Value;
use tracing::trace;

use crate::error::{BindingError, Error, Result};

/// Name of the synthetic property bound to the resolved key.
pub const KEY_PROPERTY: &str = "key";

pub struct Binder<'a> {
    parameters: &'a [Parameter],
    inline_values: &'a [Argument],
    key: &'a str,
}

impl<'a> Binder<'a> {
    pub fn new(
        method: &str,
        parameters: &'a [Parameter],
        inline_values: &'a [Argument],
        key: &'a str,
    ) -> Result<Self> {
        if inline_values.len() > parameters.len() {
            return Err(BindingError::too_many_inline_values(
                method,
                parameters.len(),
                inline_values.len(),
            )
            .into());
        }

        Ok(Self {
            parameters,
            inline_values,
            key,
        })
    }

    /// Produce the argument vector for one test case.
    ///
    /// A case that is not a JSON object contributes no properties.
    pub fn bind(&self, case: &Value) -> Result<ArgumentVector> {
        let properties = case.as_object();
        let mut arguments = Vec::with_capacity(self.parameters.len());
        arguments.extend(self.inline_values.iter().cloned());

        for parameter in &self.parameters[self.inline_values.len()..] {
            let found = properties.and_then(|map| map.get(parameter.name()));
            let argument = match found {
                Some(value) => self.convert(parameter, value)?,
                None if parameter.name() == KEY_PROPERTY => {
                    self.convert(parameter, &Value::String(self.key.to_string()))?
                }
                None => parameter.ty().default_value(),
            };
            arguments.push(argument);
        }

        trace!(key = self.key, arguments = arguments.len(), "bound test case");
        Ok(ArgumentVector::new(arguments))
    }

    fn convert(&self, parameter: &Parameter, value: &Value) -> Result<Argument> {
        parameter.ty().convert(value).map_err(|e| {
            Error::from(BindingError::conversion(
                parameter.name(),
                parameter.ty().name(),
                value,
                e,
            ))
        })
    }
}

/// Bind a single JSON object against `parameters`, with `inline_values`
/// occupying the leading positions.
pub fn bind(
    object: &Value,
    parameters: &[Parameter],
    inline_values: &[Argument],
    key: &str,
) -> Result<ArgumentVector> {
    Binder::new("<anonymous>", parameters, inline_values, key)?.bind(object)
}
