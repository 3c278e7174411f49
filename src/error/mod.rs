mod binding;
mod config;
mod key;
mod source;

pub use binding::BindingError;
pub use config::ConfigError;
pub use key::KeyError;
pub use source::SourceError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

impl Error {
    /// Neither an embedded resource nor a file matched the computed name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Source(SourceError::NotFound { .. }))
    }

    /// The document was found but does not have the shape a key lookup needs.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Binding(BindingError::Conversion { .. }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
