//! Types for reading Litematica schematics
//!

use std::io::Read;

use itertools::Itertools;
use schem_nbt::{Compound, NbtFile, Tag};
use tracing::{info, instrument, warn};

use crate::{
    compression::{decompress, CompressionMethod},
    error::{Error, Result},
    unpack::{bits_per_block, unpack},
};

/// A single region of a schematic, copied out of the NBT tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    /// Name of the region inside the `Regions` compound
    pub name: String,
    /// Absolute size along x
    pub width: u32,
    /// Absolute size along y
    pub height: u32,
    /// Absolute size along z
    pub length: u32,
    /// Block names, in palette index order
    pub palette: Vec<String>,
    /// Packed palette indices
    pub block_states: Vec<i64>,
}

fn require_i32(compound: &Compound, parent: &str, name: &str) -> Result<i32> {
    compound
        .get_i32(name)
        .ok_or_else(|| Error::MissingField(format!("{parent}.{name}")))
}

impl Region {
    /// Pull size, palette and packed states out of a region compound.
    ///
    /// Negative sizes only mean the region was selected towards the negative
    /// axis, so only their magnitude is kept.
    pub fn from_compound(name: &str, compound: &Compound) -> Result<Region> {
        let size = compound
            .get_compound("Size")
            .ok_or_else(|| Error::MissingField("Size".into()))?;

        let width = require_i32(size, "Size", "x")?.unsigned_abs();
        let height = require_i32(size, "Size", "y")?.unsigned_abs();
        let length = require_i32(size, "Size", "z")?.unsigned_abs();

        let palette = compound
            .get_list("BlockStatePalette")
            .ok_or_else(|| Error::MissingField("BlockStatePalette".into()))?
            .iter()
            .enumerate()
            .map(|(i, state)| {
                state
                    .as_compound()
                    .and_then(|c| c.get_str("Name"))
                    .map(str::to_owned)
                    .ok_or_else(|| Error::MissingField(format!("BlockStatePalette[{i}].Name")))
            })
            .collect::<Result<Vec<_>>>()?;

        let block_states = compound
            .get_long_array("BlockStates")
            .ok_or_else(|| Error::MissingField("BlockStates".into()))?
            .to_vec();

        Ok(Region {
            name: name.to_owned(),
            width,
            height,
            length,
            palette,
            block_states,
        })
    }

    /// Number of blocks covered by the region
    pub fn volume(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(self.length as usize))
            .ok_or(Error::VolumeTooLarge {
                width: self.width,
                height: self.height,
                length: self.length,
            })
    }

    pub fn bits_per_block(&self) -> u32 {
        bits_per_block(self.palette.len())
    }

    /// Unpack one palette index per block in x, then z, then y order
    pub fn indices(&self) -> Result<Vec<u64>> {
        Ok(unpack(&self.block_states, self.palette.len(), self.volume()?))
    }
}

/// Rebuild a flat x-fastest index list into `[y][z][x]` layers.
///
/// Anything the flat list does not cover is filled with `0`.
pub fn nest_blocks(flat: &[u64], width: u32, height: u32, length: u32) -> Vec<Vec<Vec<u64>>> {
    let (width, height, length) = (width as usize, height as usize, length as usize);

    (0..height)
        .map(|y| {
            (0..length)
                .map(|z| {
                    (0..width)
                        .map(|x| {
                            let index = (y * length + z) * width + x;
                            flat.get(index).copied().unwrap_or(0)
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Litematica file reader
///
/// ```no_run
/// fn print_regions(data: &[u8]) -> schem_litematic::error::Result<()> {
///     let litematic = schem_litematic::LitematicReader::new(data)?;
///
///     for name in litematic.region_names()? {
///         println!("{}", name);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct LitematicReader {
    nbt: NbtFile,
    compression: CompressionMethod,
}

impl LitematicReader {
    /// Decompress (when needed) and decode a Litematica file.
    #[instrument(skip_all, err)]
    pub fn new(data: &[u8]) -> Result<LitematicReader> {
        let (raw, compression) = decompress(data);
        let reader = LitematicReader {
            nbt: NbtFile::new(&raw)?,
            compression,
        };

        if reader.has_metadata() {
            info!("metadata found");
        }

        Ok(reader)
    }

    /// Read a whole stream, then decode it like [`LitematicReader::new`]
    pub fn from_reader<R: Read>(mut reader: R) -> Result<LitematicReader> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        LitematicReader::new(&data)
    }

    /// How the file was stored on disk
    pub fn compression(&self) -> CompressionMethod {
        self.compression
    }

    /// Name of the root compound
    pub fn name(&self) -> &str {
        self.nbt.name()
    }

    /// Whether the file carries a `Metadata` compound
    pub fn has_metadata(&self) -> bool {
        self.nbt.root().get_compound("Metadata").is_some()
    }

    fn regions(&self) -> Result<&Compound> {
        match self.nbt.root().get("Regions") {
            Some(Tag::Compound(regions)) => Ok(regions),
            _ => Err(Error::MissingRegions),
        }
    }

    /// Names of every region, in file order
    pub fn region_names(&self) -> Result<Vec<&str>> {
        Ok(self.regions()?.keys().map(String::as_str).collect())
    }

    /// The first region in file order.
    ///
    /// Only one region is ever extracted; any others are reported and skipped.
    #[instrument(skip_all, err)]
    pub fn first_region(&self) -> Result<Region> {
        let regions = self.regions()?;
        info!("regions found: {}", regions.keys().join(", "));

        let (name, tag) = regions.first().ok_or(Error::MissingRegions)?;
        if regions.len() > 1 {
            warn!(
                "only region '{}' is extracted, {} other region(s) ignored",
                name,
                regions.len() - 1
            );
        }

        let compound = tag
            .as_compound()
            .ok_or_else(|| Error::MissingField(format!("Regions.{name}")))?;
        let region = Region::from_compound(name, compound)?;

        info!(
            "dimensions: {}x{}x{}",
            region.width, region.height, region.length
        );
        info!("palette: {} blocks", region.palette.len());

        Ok(region)
    }
}
