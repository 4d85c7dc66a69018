//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// A read needed more bytes than the buffer had left
    #[error("read of {needed} bytes at offset {offset} is out of bounds ({remaining} remaining)")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Tag kind byte outside of the 0..=12 range
    #[error("unknown tag kind {0}")]
    UnknownTagKind(u8),

    /// The first tag of the file was not a compound
    #[error("root tag must be a compound, found kind {0}")]
    InvalidRoot(u8),

    /// Lists and compounds nested past [`crate::read::MAX_DEPTH`]
    #[error("tags nested deeper than {depth} levels")]
    TooDeep { depth: usize },

    /// String payload was not valid UTF-8
    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidString {
        offset: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
