/// Convenience result type used across inkboard.
pub type InkResult<T> = Result<T, InkError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum InkError {
    /// Invalid user-provided configuration data.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while resolving a layout or its component entries.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while painting components or encoding the frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while acquiring or interpreting weather data.
    #[error("weather error: {0}")]
    Weather(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkError {
    /// Build an [`InkError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`InkError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build an [`InkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`InkError::Weather`] value.
    pub fn weather(msg: impl Into<String>) -> Self {
        Self::Weather(msg.into())
    }

    /// Build an [`InkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
