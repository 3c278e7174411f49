use std::any::{self, Any};
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Argument;

type ConvertFn = fn(&Value) -> Result<Argument, serde_json::Error>;
type DefaultFn = fn() -> Argument;

#[derive(Clone, Copy)]
enum Kind {
    /// Receives the raw JSON value.
    Dynamic,
    Typed {
        convert: ConvertFn,
        default: DefaultFn,
    },
}

/// Declared type of a test method parameter.
///
/// This is the type-descriptor table entry the caller supplies in place of
/// runtime reflection: it knows how to convert a JSON value into the
/// parameter's type and what the type's absence value is.
#[derive(Clone, Copy)]
pub struct ParamType {
    name: &'static str,
    kind: Kind,
}

impl ParamType {
    /// A parameter of static type `T`, converted through serde.
    ///
    /// When no JSON property matches, the parameter receives `T::default()`.
    /// Declare `Option<T>` to get `None` instead of a zero value.
    pub fn of<T>() -> Self
    where
        T: DeserializeOwned + Default + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            name: any::type_name::<T>(),
            kind: Kind::Typed {
                convert: convert_to::<T>,
                default: default_of::<T>,
            },
        }
    }

    /// An untyped parameter that receives the JSON value unconverted, so
    /// every field stays reachable through [`serde_json::Value`].
    pub fn dynamic() -> Self {
        Self {
            name: "dynamic",
            kind: Kind::Dynamic,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.kind, Kind::Dynamic)
    }

    pub(crate) fn convert(&self, value: &Value) -> Result<Argument, serde_json::Error> {
        match self.kind {
            Kind::Dynamic => Ok(Argument::new(value.clone())),
            Kind::Typed { convert, .. } => convert(value),
        }
    }

    pub(crate) fn default_value(&self) -> Argument {
        match self.kind {
            Kind::Dynamic => Argument::new(Value::Null),
            Kind::Typed { default, .. } => default(),
        }
    }
}

fn convert_to<T>(value: &Value) -> Result<Argument, serde_json::Error>
where
    T: DeserializeOwned + fmt::Debug + Send + Sync + Any,
{
    T::deserialize(value).map(Argument::new)
}

fn default_of<T>() -> Argument
where
    T: Default + fmt::Debug + Send + Sync + Any,
{
    Argument::new(T::default())
}

impl fmt::Debug for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParamType").field(&self.name).finish()
    }
}

/// One formal parameter of a test method.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    ty: ParamType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &ParamType {
        &self.ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_conversion() {
        let ty = ParamType::of::<i64>();
        let arg = ty.convert(&json!(1234567890123456789_i64)).unwrap();
        assert_eq!(arg.get::<i64>(), Some(&1234567890123456789));
        assert!(!ty.is_dynamic());
    }

    #[test]
    fn test_typed_conversion_failure() {
        let ty = ParamType::of::<i32>();
        assert!(ty.convert(&json!("not a number")).is_err());
    }

    #[test]
    fn test_typed_default() {
        assert_eq!(ParamType::of::<i32>().default_value().get::<i32>(), Some(&0));
        assert_eq!(
            ParamType::of::<String>().default_value().get::<String>(),
            Some(&String::new())
        );
        assert_eq!(
            ParamType::of::<Option<String>>()
                .default_value()
                .get::<Option<String>>(),
            Some(&None)
        );
    }

    #[test]
    fn test_dynamic_keeps_raw_value() {
        let ty = ParamType::dynamic();
        let value = json!({"IntProperty": 541, "StringProperty": "StringPropertyValue"});
        let arg = ty.convert(&value).unwrap();
        assert_eq!(arg.get::<Value>(), Some(&value));
        assert!(ty.is_dynamic());
        assert_eq!(ty.default_value().get::<Value>(), Some(&Value::Null));
    }

    #[test]
    fn test_name_reports_type() {
        assert_eq!(ParamType::of::<i32>().name(), "i32");
        assert_eq!(ParamType::dynamic().name(), "dynamic");
    }
}
