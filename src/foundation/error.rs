/// Result alias used across the crate.
pub type StarsResult<T> = Result<T, StarsError>;

/// Errors raised while loading settings, measuring glyphs or producing output.
#[derive(thiserror::Error, Debug)]
pub enum StarsError {
    /// Settings that cannot be laid out.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed configuration values such as colours.
    #[error("config error: {0}")]
    Config(String),

    /// Glyph measurement or font loading failed.
    #[error("measure error: {0}")]
    Measure(String),

    /// SVG or raster output failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StarsError {
    /// Build a [`StarsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StarsError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StarsError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`StarsError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StarsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StarsError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
