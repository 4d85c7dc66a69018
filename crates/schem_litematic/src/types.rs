//! Output types produced from a schematic region.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::Result,
    read::{nest_blocks, Region},
};

/// Value of [`Schematic::source`] for everything read by this crate
pub const SOURCE: &str = "litematic";

/// Block name left out of material reports
pub const AIR: &str = "minecraft:air";

/// A region flattened into a palette and a `[y][z][x]` block grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schematic {
    pub name: String,
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub length: u32,
    /// Palette index (as a decimal string) to block name
    pub palette: IndexMap<String, String>,
    pub blocks: Vec<Vec<Vec<u64>>>,
}

/// How many blocks of one palette entry a schematic uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialCount {
    pub index: u64,
    pub name: String,
    pub count: usize,
}

impl Schematic {
    /// Unpack a region into a schematic called `name`
    pub fn from_region(name: impl Into<String>, region: &Region) -> Result<Schematic> {
        info!("volume: {} blocks", region.volume()?);
        let flat = region.indices()?;

        Ok(Schematic {
            name: name.into(),
            source: SOURCE.to_owned(),
            width: region.width,
            height: region.height,
            length: region.length,
            palette: region
                .palette
                .iter()
                .enumerate()
                .map(|(i, block)| (i.to_string(), block.clone()))
                .collect(),
            blocks: nest_blocks(&flat, region.width, region.height, region.length),
        })
    }

    /// Palette name for an index, `unknown:<index>` when out of range
    pub fn block_name(&self, index: u64) -> String {
        self.palette
            .get(&index.to_string())
            .cloned()
            .unwrap_or_else(|| format!("unknown:{index}"))
    }

    /// Occurrences of each palette index, most used first
    pub fn block_counts(&self) -> Vec<(u64, usize)> {
        self.blocks
            .iter()
            .flatten()
            .flatten()
            .copied()
            .counts()
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect()
    }

    /// Materials needed to build the schematic, ignoring air
    pub fn materials(&self) -> Vec<MaterialCount> {
        self.block_counts()
            .into_iter()
            .map(|(index, count)| MaterialCount {
                index,
                name: self.block_name(index),
                count,
            })
            .filter(|m| m.name != AIR)
            .collect()
    }
}
