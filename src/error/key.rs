use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("'{key}' was not found in the JSON root")]
    NotFound { key: String },

    #[error("value of property '{key}' must be array or object, found {found}")]
    NotArrayOrObject { key: String, found: &'static str },

    #[error("JSON root must be an object, found {found}")]
    RootNotObject { found: &'static str },
}

impl KeyError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn not_array_or_object(key: impl Into<String>, found: &'static str) -> Self {
        Self::NotArrayOrObject {
            key: key.into(),
            found,
        }
    }
}
