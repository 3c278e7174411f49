use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("test data not found: no embedded resource or file named '{name}'")]
    NotFound { name: String },

    #[error("failed to read test data '{name}': {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },

    #[error("failed to parse test data '{name}': {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn read(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            name: name.into(),
            source,
        }
    }

    pub fn parse(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            name: name.into(),
            source,
        }
    }

    /// Name of the resource or file the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } | Self::Read { name, .. } | Self::Parse { name, .. } => name,
        }
    }
}
