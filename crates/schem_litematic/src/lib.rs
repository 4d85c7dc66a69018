//! This library reads **Litematica** schematics (`.litematic`) and turns them into plain block grids.
//!
//! # Litematic Format Documentation
//!
//! A `.litematic` file is a gzip-compressed NBT tree (see [`schem_nbt`]). The parts of the tree used
//! by this crate are:
//!
//! | Path                                 | Kind           | Description                                        |
//! |--------------------------------------|----------------|----------------------------------------------------|
//! | `Metadata`                           | TAG_Compound   | Author, description and enclosing size             |
//! | `Regions`                            | TAG_Compound   | One entry per region, keyed by region name         |
//! | `Regions.<name>.Size`                | TAG_Compound   | `x`, `y`, `z` TAG_Int, may be negative             |
//! | `Regions.<name>.BlockStatePalette`   | TAG_List       | Compounds with a `Name` TAG_String per block state |
//! | `Regions.<name>.BlockStates`         | TAG_Long_Array | Bit-packed palette indices                         |
//!
//! ### Block States
//!
//! Every block stores its palette index using the same number of bits: the bit length of the
//! largest palette index, with a minimum of 2. Indices are packed least significant bit first into
//! consecutive 64 bit words with no padding, so a single index may be split across two words.
//!
//! Blocks are ordered with x varying fastest, then z, then y:
//!
//! ```text
//! index = (y * length + z) * width + x
//! ```
//!
//! ## Additional Information
//!
//! - **File Extension**: `.litematic`
//! - **Compression**: gzip, although uncompressed NBT is accepted too
//! - **Regions**: only the first region of a file is extracted
//!

pub mod compression;
pub mod error;
pub mod read;
pub mod types;
pub mod unpack;

pub use compression::CompressionMethod;
pub use read::{LitematicReader, Region};
pub use types::Schematic;

/// Decode a Litematica file and extract its first region as `name`.
///
/// The NBT tree only lives for the duration of this call.
pub fn convert(data: &[u8], name: impl Into<String>) -> error::Result<Schematic> {
    let region = LitematicReader::new(data)?.first_region()?;
    Schematic::from_region(name, &region)
}
