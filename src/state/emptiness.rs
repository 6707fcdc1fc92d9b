//! Structural "no results" classifier.
//!
//! The rule looks only at the top-level shape a value takes in the serde
//! data model, so any `Serialize` payload can be classified without being
//! converted into a JSON tree first:
//!
//! - `None`, `()` and unit structs are empty.
//! - Sequences, tuples and byte strings are empty iff they have no elements.
//! - Maps and structs are empty iff no entry or field is serialized.
//! - Everything else (strings, even `""`, numbers, booleans, enum variants)
//!   is present.

use std::fmt::Display;

use serde::ser::{
    self, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

/// Returns `true` when `value` counts as "no results".
///
/// Total and side-effect free. A value whose `Serialize` impl fails is
/// classified as present.
pub fn is_empty<T: Serialize + ?Sized>(value: &T) -> bool {
    value.serialize(ShapeSerializer).unwrap_or(false)
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ShapeError(String);

impl ser::Error for ShapeError {
    fn custom<T: Display>(msg: T) -> Self {
        ShapeError(msg.to_string())
    }
}

/// Serializer that answers "is this value empty?" instead of producing output.
struct ShapeSerializer;

/// Counts entries of a compound value without visiting their contents.
///
/// Enum variants start at one: they serialize as a single-key object.
struct EntryCounter {
    entries: usize,
}

impl EntryCounter {
    fn new() -> Self {
        Self { entries: 0 }
    }

    fn variant() -> Self {
        Self { entries: 1 }
    }

    fn bump(&mut self) -> Result<(), ShapeError> {
        self.entries += 1;
        Ok(())
    }

    fn finish(self) -> Result<bool, ShapeError> {
        Ok(self.entries == 0)
    }
}

impl Serializer for ShapeSerializer {
    type Ok = bool;
    type Error = ShapeError;
    type SerializeSeq = EntryCounter;
    type SerializeTuple = EntryCounter;
    type SerializeTupleStruct = EntryCounter;
    type SerializeTupleVariant = EntryCounter;
    type SerializeMap = EntryCounter;
    type SerializeStruct = EntryCounter;
    type SerializeStructVariant = EntryCounter;

    fn serialize_bool(self, _v: bool) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_i8(self, _v: i8) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_i16(self, _v: i16) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_i32(self, _v: i32) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_i64(self, _v: i64) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_i128(self, _v: i128) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_u8(self, _v: u8) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_u16(self, _v: u16) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_u32(self, _v: u32) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_u64(self, _v: u64) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_u128(self, _v: u128) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_f32(self, _v: f32) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_f64(self, _v: f64) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_char(self, _v: char) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_str(self, _v: &str) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<bool, ShapeError> {
        Ok(v.is_empty())
    }

    fn serialize_none(self) -> Result<bool, ShapeError> {
        Ok(true)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<bool, ShapeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<bool, ShapeError> {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, ShapeError> {
        Ok(true)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<bool, ShapeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool, ShapeError> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::new())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::variant())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::new())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<EntryCounter, ShapeError> {
        Ok(EntryCounter::variant())
    }
}

impl SerializeSeq for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), ShapeError> {
        self.bump()
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}

impl SerializeTuple for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), ShapeError> {
        self.bump()
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}

impl SerializeTupleStruct for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), ShapeError> {
        self.bump()
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}

impl SerializeTupleVariant for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}

impl SerializeMap for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, _key: &T) -> Result<(), ShapeError> {
        self.bump()
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}

impl SerializeStruct for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), ShapeError> {
        self.bump()
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}

impl SerializeStructVariant for EntryCounter {
    type Ok = bool;
    type Error = ShapeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<bool, ShapeError> {
        self.finish()
    }
}
