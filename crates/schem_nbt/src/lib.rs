//! # NBT Format Documentation
//!
//! This crate decodes the **NBT** (Named Binary Tag) format used by *Minecraft* and the tools built
//! around it, such as Litematica schematics. NBT is a recursive, self-describing binary tree where
//! every value is prefixed by a single kind byte. Files are normally gzip-compressed; this crate
//! only deals with the uncompressed bytes.
//!
//! ## File Structure
//!
//! A file is a single named compound tag:
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Kind                   | 1 byte: Always 0x0A (TAG_Compound)                         |
//! | 0x0001         | Name Length            | 2 bytes: Unsigned length of the root name                  |
//! | 0x0003         | Name                   | (Name Length) bytes: UTF-8 root name, usually empty        |
//! | ...            | Payload                | Compound payload, terminated by TAG_End                    |
//!
//! ### Tag Kinds
//!
//! | Kind | Name           | Payload                                                            |
//! |------|----------------|--------------------------------------------------------------------|
//! | 0    | TAG_End        | None. Terminates a compound                                        |
//! | 1    | TAG_Byte       | 1 byte signed integer                                              |
//! | 2    | TAG_Short      | 2 byte signed integer                                              |
//! | 3    | TAG_Int        | 4 byte signed integer                                              |
//! | 4    | TAG_Long       | 8 byte signed integer                                              |
//! | 5    | TAG_Float      | 4 byte IEEE 754 float                                              |
//! | 6    | TAG_Double     | 8 byte IEEE 754 float                                              |
//! | 7    | TAG_Byte_Array | 4 byte signed count, then (count) signed bytes                     |
//! | 8    | TAG_String     | 2 byte unsigned length, then (length) bytes of UTF-8               |
//! | 9    | TAG_List       | 1 byte element kind, 4 byte signed count, then (count) payloads    |
//! | 10   | TAG_Compound   | Repeated (kind, name, payload) entries until a TAG_End kind byte   |
//! | 11   | TAG_Int_Array  | 4 byte signed count, then (count) 4 byte signed integers           |
//! | 12   | TAG_Long_Array | 4 byte signed count, then (count) 8 byte signed integers           |
//!
//! ### Compound Entry
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Kind                   | 1 byte: Kind of the value, 0 ends the compound          |
//! | 0x0001         | Name Length            | 2 bytes: Unsigned length of the name                    |
//! | 0x0003         | Name                   | (Name Length) bytes: UTF-8 name                         |
//! | ...            | Payload                | Payload for the given kind                              |
//!
//! ## Additional Information
//!
//! - **Endianness**: Big-endian for all multi-byte values
//! - **Negative counts**: Arrays and lists with a negative count are read as empty
//! - **Ordering**: Compound entries keep the order they were read in
//!

pub mod cursor;
pub mod error;
pub mod read;
#[cfg(feature = "serde")]
mod serde;
pub mod types;

pub use error::Error;
pub use read::NbtFile;
pub use types::{Compound, Tag, TagKind, TagList};
