//! Error types for data bags.

/// Errors raised while building bags or converting their contents.
///
/// Reads and writes on a bag never fail: a missing namespace is reported as
/// `None`, and writes replace whatever stands in their way. Errors only come
/// from configuration (the separator) and from conversions at the edges.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The namespace separator was the empty string.
    #[error("namespace separator must not be empty")]
    EmptySeparator,

    /// External data could not be turned into a `Value`.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// A `Value` could not be turned into external data.
    #[error("encode error: {message}")]
    Encode { message: String },

    /// A document that must be a map had some other shape at its root.
    #[error("expected a map at the document root, found {found}")]
    NotAMap { found: &'static str },
}

impl Error {
    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        Error::Encode {
            message: message.into(),
        }
    }
}
