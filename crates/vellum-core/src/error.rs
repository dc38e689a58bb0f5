//! Error types shared by Vellum components.
//!
//! Rendering never fails. These errors come out of the parsing helpers
//! (`Orientation::parse_token`, `Color::parse`, ...) and components log them
//! and fall back rather than propagate them.

use std::fmt;

/// Errors produced while interpreting configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An enumerated option received a token it does not recognize.
    UnknownToken {
        /// The option being parsed, e.g. `"orientation"`.
        option: &'static str,
        /// The rejected token.
        token: String,
    },

    /// A color string could not be parsed.
    InvalidColor {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownToken { option, token } => {
                write!(f, "Unknown {} token: '{}'", option, token)
            }
            Error::InvalidColor { input } => write!(f, "Invalid color: '{}'", input),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for configuration parsing.
pub type Result<T> = std::result::Result<T, Error>;
