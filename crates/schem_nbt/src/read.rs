//! Recursive-descent decoding of NBT trees
//!

use tracing::{debug, instrument};

use crate::{
    cursor::ByteCursor,
    error::{Error, Result},
    types::{Compound, Tag, TagKind, TagList},
};

/// Deepest list or compound nesting accepted, counting the root compound
pub const MAX_DEPTH: usize = 512;

/// Decode the payload of a single tag of the given kind.
///
/// Lists and compounds recurse back into the decoder, so the cursor is
/// advanced depth first through the whole subtree.
pub fn read_tag(cursor: &mut ByteCursor<'_>, kind: TagKind) -> Result<Tag> {
    read_nested(cursor, kind, 0)
}

fn read_nested(cursor: &mut ByteCursor<'_>, kind: TagKind, depth: usize) -> Result<Tag> {
    Ok(match kind {
        TagKind::End => Tag::End,
        TagKind::Byte => Tag::Byte(cursor.read_i8()?),
        TagKind::Short => Tag::Short(cursor.read_i16()?),
        TagKind::Int => Tag::Int(cursor.read_i32()?),
        TagKind::Long => Tag::Long(cursor.read_i64()?),
        TagKind::Float => Tag::Float(cursor.read_f32()?),
        TagKind::Double => Tag::Double(cursor.read_f64()?),
        TagKind::ByteArray => Tag::ByteArray(cursor.read_byte_array()?),
        TagKind::String => Tag::String(cursor.read_string()?),
        TagKind::List => Tag::List(read_list(cursor, depth + 1)?),
        TagKind::Compound => Tag::Compound(read_compound(cursor, depth + 1)?),
        TagKind::IntArray => Tag::IntArray(cursor.read_int_array()?),
        TagKind::LongArray => Tag::LongArray(cursor.read_long_array()?),
    })
}

/// Same as [`read_tag`] but takes the raw kind byte from the stream.
pub fn read_tag_raw(cursor: &mut ByteCursor<'_>, kind: u8) -> Result<Tag> {
    read_tag(cursor, TagKind::try_from(kind)?)
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep { depth: MAX_DEPTH });
    }
    Ok(())
}

fn read_list(cursor: &mut ByteCursor<'_>, depth: usize) -> Result<TagList> {
    check_depth(depth)?;
    let kind_raw = cursor.read_u8()?;
    let count = cursor.read_i32()?;

    // The element kind of an empty list is never used to decode anything,
    // so an out of range byte there is tolerated.
    if count <= 0 {
        let kind = TagKind::try_from(kind_raw).unwrap_or_default();
        return Ok(TagList::new(kind, Vec::new()));
    }

    let kind = TagKind::try_from(kind_raw)?;
    let mut items = Vec::with_capacity((count as usize).min(cursor.remaining()));
    for _ in 0..count {
        items.push(read_nested(cursor, kind, depth)?);
    }

    Ok(TagList::new(kind, items))
}

fn read_compound(cursor: &mut ByteCursor<'_>, depth: usize) -> Result<Compound> {
    check_depth(depth)?;
    let mut compound = Compound::default();
    loop {
        let kind = TagKind::try_from(cursor.read_u8()?)?;
        if kind == TagKind::End {
            break;
        }

        let name = cursor.read_string()?;
        let value = read_nested(cursor, kind, depth)?;
        compound.insert(name, value);
    }

    Ok(compound)
}

/// A fully decoded NBT file
///
/// ```no_run
/// fn list_root(data: &[u8]) -> schem_nbt::error::Result<()> {
///     let nbt = schem_nbt::NbtFile::new(data)?;
///
///     for (name, tag) in nbt.root() {
///         println!("{}: {}", name, tag.kind());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NbtFile {
    name: String,
    root: Compound,
}

impl NbtFile {
    /// Decode an uncompressed NBT buffer whose first tag must be a compound.
    #[instrument(skip_all, fields(len = data.len()), err)]
    pub fn new(data: &[u8]) -> Result<NbtFile> {
        let mut cursor = ByteCursor::new(data);

        let kind = cursor.read_u8()?;
        if kind != u8::from(TagKind::Compound) {
            return Err(Error::InvalidRoot(kind));
        }

        let name = cursor.read_string()?;
        let root = read_compound(&mut cursor, 1)?;

        if !cursor.is_empty() {
            debug!("ignoring {} trailing bytes", cursor.remaining());
        }

        Ok(NbtFile { name, root })
    }

    /// Name stored with the root compound, usually empty
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Compound {
        &self.root
    }

    pub fn into_root(self) -> Compound {
        self.root
    }
}
