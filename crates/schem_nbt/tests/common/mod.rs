//! Reference NBT encoder used to produce fixtures for the decoder.

#![allow(dead_code)]

use schem_nbt::{Compound, Tag, TagKind};

pub fn write_string(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
}

pub fn write_payload(out: &mut Vec<u8>, tag: &Tag) {
    match tag {
        Tag::End => {}
        Tag::Byte(v) => out.push(*v as u8),
        Tag::Short(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Long(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Double(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::ByteArray(v) => {
            out.extend_from_slice(&(v.len() as i32).to_be_bytes());
            out.extend(v.iter().map(|b| *b as u8));
        }
        Tag::String(v) => write_string(out, v),
        Tag::List(list) => {
            out.push(list.element_kind().into());
            out.extend_from_slice(&(list.len() as i32).to_be_bytes());
            for item in list.iter() {
                write_payload(out, item);
            }
        }
        Tag::Compound(compound) => write_compound(out, compound),
        Tag::IntArray(v) => {
            out.extend_from_slice(&(v.len() as i32).to_be_bytes());
            for i in v {
                out.extend_from_slice(&i.to_be_bytes());
            }
        }
        Tag::LongArray(v) => {
            out.extend_from_slice(&(v.len() as i32).to_be_bytes());
            for l in v {
                out.extend_from_slice(&l.to_be_bytes());
            }
        }
    }
}

pub fn write_compound(out: &mut Vec<u8>, compound: &Compound) {
    for (name, tag) in compound.iter() {
        out.push(tag.kind().into());
        write_string(out, name);
        write_payload(out, tag);
    }
    out.push(TagKind::End.into());
}

/// Encode a complete file with the given root name
pub fn encode(name: &str, root: &Compound) -> Vec<u8> {
    let mut out = vec![TagKind::Compound.into()];
    write_string(&mut out, name);
    write_compound(&mut out, root);
    out
}
