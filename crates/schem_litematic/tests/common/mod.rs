//! Fixture builders for litematic trees, on top of the NBT reference encoder.

#![allow(dead_code)]

use std::io::Write;

use flate2::{write::GzEncoder, Compression};
use schem_nbt::{Compound, Tag, TagKind, TagList};

#[path = "../../../schem_nbt/tests/common/mod.rs"]
mod encoder;

pub use encoder::*;

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn compound<const N: usize>(entries: [(&str, Tag); N]) -> Compound {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// A region compound with the given size, palette and packed states
pub fn region(size: (i32, i32, i32), palette: &[&str], states: Vec<i64>) -> Tag {
    let palette = palette
        .iter()
        .map(|name| Tag::Compound(compound([("Name", Tag::String(name.to_string()))])))
        .collect();

    Tag::Compound(compound([
        (
            "Size",
            Tag::Compound(compound([
                ("x", Tag::Int(size.0)),
                ("y", Tag::Int(size.1)),
                ("z", Tag::Int(size.2)),
            ])),
        ),
        (
            "BlockStatePalette",
            Tag::List(TagList::new(TagKind::Compound, palette)),
        ),
        ("BlockStates", Tag::LongArray(states)),
    ]))
}

/// An uncompressed litematic file holding the given regions in order
pub fn litematic(regions: Vec<(&str, Tag)>) -> Vec<u8> {
    let root = compound([
        (
            "Metadata",
            Tag::Compound(compound([("Name", Tag::String("test".into()))])),
        ),
        (
            "Regions",
            Tag::Compound(
                regions
                    .into_iter()
                    .map(|(name, tag)| (name.to_string(), tag))
                    .collect(),
            ),
        ),
        ("Version", Tag::Int(6)),
    ]);

    encode("", &root)
}
