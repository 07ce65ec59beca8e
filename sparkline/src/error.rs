//! Error type for configuration, property and surface failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no widget type registered as `{0}`")]
    UnknownWidget(String),

    #[error("`{widget}` has no property `{property}`")]
    UnknownProperty {
        widget: &'static str,
        property: String,
    },

    #[error("property `{property}` expects {expected}")]
    PropertyType {
        property: &'static str,
        expected: &'static str,
    },

    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
