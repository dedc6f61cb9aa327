//! Structured-data projection of collections.
//!
//! A [`Collection`] serializes as a sequence of its snapshot, so encoding it
//! observes exactly the elements `count` and `iter` do. A [`Projection`]
//! serializes as a sequence when it is a plain list and as a map otherwise.
//! Map keys must stay distinct once encoded: a transform key that encodes the
//! same way as a positional index is a serialization error, not a silently
//! dropped entry.

use crate::collection::Collection;
use crate::projection::{ArrayKey, Projection};
use crate::{String, ToString, Vec};
use ::serde::ser::{self, Error as _, Impossible};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};
use core::fmt;
use core::hash::Hash;
use hashbrown::HashSet;

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items = self.as_slice().map_err(S::Error::custom)?;
        serializer.collect_seq(items)
    }
}

/// Deserializes into an eagerly populated collection.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Collection::from)
    }
}

impl<K: Serialize> Serialize for ArrayKey<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArrayKey::Index(index) => index.serialize(serializer),
            ArrayKey::Key(key) => key.serialize(serializer),
        }
    }
}

impl<K: Serialize + Hash + Eq, V: Serialize> Serialize for Projection<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            serializer.collect_seq(self.values())
        } else {
            let mut seen = HashSet::with_capacity(self.len());
            for key in self.keys() {
                // Keys with no scalar text can't collide with an index
                let Ok(text) = key.serialize(KeyText) else {
                    continue;
                };
                if seen.contains(&text) {
                    return Err(S::Error::custom(format_args!(
                        "projection has more than one entry under key `{text}`"
                    )));
                }
                seen.insert(text);
            }
            serializer.collect_map(self.iter())
        }
    }
}

/// Key is not a scalar, so it has no text form to compare.
#[derive(Debug)]
struct NotScalar;

impl fmt::Display for NotScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key is not a scalar")
    }
}

impl ser::StdError for NotScalar {}

impl ser::Error for NotScalar {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        NotScalar
    }
}

/// Renders a scalar map key as the text a self-describing format would use
/// for it, so `0usize` and `"0"` compare equal.
struct KeyText;

macro_rules! key_text_to_string {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, value: $ty) -> Result<String, NotScalar> {
                Ok(value.to_string())
            }
        )*
    };
}

impl Serializer for KeyText {
    type Ok = String;
    type Error = NotScalar;
    type SerializeSeq = Impossible<String, NotScalar>;
    type SerializeTuple = Impossible<String, NotScalar>;
    type SerializeTupleStruct = Impossible<String, NotScalar>;
    type SerializeTupleVariant = Impossible<String, NotScalar>;
    type SerializeMap = Impossible<String, NotScalar>;
    type SerializeStruct = Impossible<String, NotScalar>;
    type SerializeStructVariant = Impossible<String, NotScalar>;

    key_text_to_string! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_char: char,
        serialize_str: &str,
    }

    fn serialize_f32(self, _value: f32) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_f64(self, _value: f64) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_none(self) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String, NotScalar> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, NotScalar> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, NotScalar> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, NotScalar> {
        Err(NotScalar)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotScalar> {
        Err(NotScalar)
    }
}
