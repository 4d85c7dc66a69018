mod common;

use pretty_assertions::assert_eq;
use proptest::collection::vec;
use proptest::prelude::*;
use schem_nbt::error::{Error, Result};
use schem_nbt::{Compound, NbtFile, Tag, TagKind, TagList};
use tracing_test::traced_test;

fn leaf() -> impl Strategy<Value = Tag> {
    prop_oneof![
        any::<i8>().prop_map(Tag::Byte),
        any::<i16>().prop_map(Tag::Short),
        any::<i32>().prop_map(Tag::Int),
        any::<i64>().prop_map(Tag::Long),
        (-1e30f32..1e30f32).prop_map(Tag::Float),
        (-1e300f64..1e300f64).prop_map(Tag::Double),
        vec(any::<i8>(), 0..16).prop_map(Tag::ByteArray),
        "\\PC{0,12}".prop_map(Tag::String),
        vec(any::<i32>(), 0..8).prop_map(Tag::IntArray),
        vec(any::<i64>(), 0..8).prop_map(Tag::LongArray),
    ]
}

fn tag() -> impl Strategy<Value = Tag> {
    leaf().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            // lists are homogeneous, so keep only items matching the first one
            vec(inner.clone(), 0..6).prop_map(|items| {
                let kind = items.first().map(Tag::kind).unwrap_or(TagKind::End);
                let items = items.into_iter().filter(|t| t.kind() == kind).collect();
                Tag::List(TagList::new(kind, items))
            }),
            vec(("[a-zA-Z0-9_]{0,8}", inner), 0..6)
                .prop_map(|entries| Tag::Compound(entries.into_iter().collect())),
        ]
    })
}

fn root() -> impl Strategy<Value = (String, Compound)> {
    (
        "[a-zA-Z]{0,6}",
        vec(("[a-zA-Z0-9_]{0,8}", tag()), 0..8)
            .prop_map(|entries| entries.into_iter().collect::<Compound>()),
    )
}

proptest! {
    #[test]
    fn round_trip_generated_trees((name, compound) in root()) {
        let data = common::encode(&name, &compound);
        let nbt = NbtFile::new(&data).unwrap();

        prop_assert_eq!(nbt.name(), name.as_str());
        prop_assert_eq!(nbt.root(), &compound);

        let expected: Vec<&String> = compound.keys().collect();
        let actual: Vec<&String> = nbt.root().keys().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn truncated_input_never_panics((name, compound) in root(), cut in 0usize..64) {
        let data = common::encode(&name, &compound);
        let end = data.len().saturating_sub(cut + 1);

        // every strict prefix is missing at least the final TAG_End
        prop_assert!(NbtFile::new(&data[..end]).is_err());
    }
}

#[traced_test]
#[test]
fn round_trip_every_kind() -> Result<()> {
    let nested: Compound = [
        ("Name".to_string(), Tag::String("minecraft:stone".into())),
        ("Empty".to_string(), Tag::Compound(Compound::default())),
    ]
    .into_iter()
    .collect();

    let compound: Compound = [
        ("byte".to_string(), Tag::Byte(i8::MIN)),
        ("short".to_string(), Tag::Short(-300)),
        ("int".to_string(), Tag::Int(i32::MAX)),
        ("long".to_string(), Tag::Long(i64::MIN)),
        ("float".to_string(), Tag::Float(0.5)),
        ("double".to_string(), Tag::Double(-1.25e100)),
        ("bytes".to_string(), Tag::ByteArray(vec![-128, -1, 0, 127])),
        ("string".to_string(), Tag::String("héllo ✓".into())),
        (
            "list".to_string(),
            Tag::List(TagList::new(
                TagKind::Compound,
                vec![Tag::Compound(nested.clone()), Tag::Compound(nested)],
            )),
        ),
        (
            "empty_list".to_string(),
            Tag::List(TagList::new(TagKind::Int, Vec::new())),
        ),
        (
            "nested_lists".to_string(),
            Tag::List(TagList::new(
                TagKind::List,
                vec![
                    Tag::List(TagList::new(TagKind::Byte, vec![Tag::Byte(1)])),
                    Tag::List(TagList::new(TagKind::End, Vec::new())),
                ],
            )),
        ),
        ("ints".to_string(), Tag::IntArray(vec![i32::MIN, 0, i32::MAX])),
        ("longs".to_string(), Tag::LongArray(vec![-1, 0, i64::MAX])),
    ]
    .into_iter()
    .collect();

    let data = common::encode("root", &compound);
    let nbt = NbtFile::new(&data)?;

    assert_eq!(nbt.name(), "root");
    assert_eq!(nbt.root(), &compound);

    Ok(())
}

#[test]
fn reject_non_compound_root() {
    let mut data = common::encode("", &Compound::default());
    data[0] = TagKind::List.into();

    assert!(matches!(NbtFile::new(&data), Err(Error::InvalidRoot(9))));
}
