use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("key must not be empty or whitespace")]
    EmptyKey,

    #[error("declaring type of test method '{method}' has no fully-qualified name")]
    UnnamedType { method: String },
}

impl ConfigError {
    pub fn unnamed_type(method: impl Into<String>) -> Self {
        Self::UnnamedType {
            method: method.into(),
        }
    }
}
