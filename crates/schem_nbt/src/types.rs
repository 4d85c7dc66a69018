//! Value types for a decoded NBT tree.

use derive_more::derive::{AsRef, Constructor, Deref, Display, IntoIterator};
use indexmap::IndexMap;

use crate::error::Error;

/// One byte discriminator in front of every NBT payload
#[derive(Display, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagKind {
    #[default]
    #[display("TAG_End")]
    End = 0,
    #[display("TAG_Byte")]
    Byte = 1,
    #[display("TAG_Short")]
    Short = 2,
    #[display("TAG_Int")]
    Int = 3,
    #[display("TAG_Long")]
    Long = 4,
    #[display("TAG_Float")]
    Float = 5,
    #[display("TAG_Double")]
    Double = 6,
    #[display("TAG_Byte_Array")]
    ByteArray = 7,
    #[display("TAG_String")]
    String = 8,
    #[display("TAG_List")]
    List = 9,
    #[display("TAG_Compound")]
    Compound = 10,
    #[display("TAG_Int_Array")]
    IntArray = 11,
    #[display("TAG_Long_Array")]
    LongArray = 12,
}

impl TryFrom<u8> for TagKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => TagKind::End,
            1 => TagKind::Byte,
            2 => TagKind::Short,
            3 => TagKind::Int,
            4 => TagKind::Long,
            5 => TagKind::Float,
            6 => TagKind::Double,
            7 => TagKind::ByteArray,
            8 => TagKind::String,
            9 => TagKind::List,
            10 => TagKind::Compound,
            11 => TagKind::IntArray,
            12 => TagKind::LongArray,
            other => return Err(Error::UnknownTagKind(other)),
        })
    }
}

impl From<TagKind> for u8 {
    fn from(value: TagKind) -> Self {
        value as u8
    }
}

/// A single node of an NBT tree
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(TagList),
    Compound(Compound),
    IntArray(Vec<i32>),
    /// Also used as raw 64 bit containers for packed data, see `as_long_array`
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TagList> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Tag::LongArray(longs) => Some(longs),
            _ => None,
        }
    }
}

/// A list of tags which all share the declared element kind
///
/// The kind is kept even for empty lists so that a tree can be compared
/// against the bytes it came from.
#[derive(Constructor, AsRef, Deref, IntoIterator, Debug, Clone, Default, PartialEq)]
pub struct TagList {
    kind: TagKind,
    #[as_ref]
    #[deref]
    #[into_iterator(owned, ref)]
    items: Vec<Tag>,
}

impl TagList {
    /// Element kind declared in the list header
    pub fn element_kind(&self) -> TagKind {
        self.kind
    }
}

/// Named tags in the order they were encountered
#[derive(Constructor, Deref, IntoIterator, Debug, Clone, Default, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    pub fn insert(&mut self, name: String, tag: Tag) -> Option<Tag> {
        self.0.insert(name, tag)
    }

    pub fn get_compound(&self, name: &str) -> Option<&Compound> {
        self.get(name).and_then(Tag::as_compound)
    }

    pub fn get_list(&self, name: &str) -> Option<&TagList> {
        self.get(name).and_then(Tag::as_list)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Tag::as_str)
    }

    pub fn get_i32(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(Tag::as_i32)
    }

    pub fn get_long_array(&self, name: &str) -> Option<&[i64]> {
        self.get(name).and_then(Tag::as_long_array)
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<T: IntoIterator<Item = (String, Tag)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
