//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`schem_nbt::Error`]
    #[error(transparent)]
    NbtError(#[from] schem_nbt::Error),

    /// file has no regions to extract
    #[error("no 'Regions' compound in file")]
    MissingRegions,

    /// a required field is absent or of the wrong kind
    #[error("missing or invalid field '{0}'")]
    MissingField(String),

    /// region dimensions overflow the addressable volume
    #[error("region of {width}x{height}x{length} is too large")]
    VolumeTooLarge { width: u32, height: u32, length: u32 },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
