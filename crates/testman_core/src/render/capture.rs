//! `serde::Serializer` that builds a [`Value`] tree instead of bytes.

use serde::Serialize;
use serde::ser;

use super::{Value, VariantStyle};
use crate::errors::RenderError;

pub(super) struct ValueSerializer;

fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Value, RenderError> {
    value.serialize(ValueSerializer)
}

/// Widen an `f32` through its shortest decimal form so `0.1f32` captures as `0.1`, not `0.10000000149011612`.
fn widen_f32(v: f32) -> f64 {
    v.to_string().parse::<f64>().unwrap_or(f64::from(v))
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = RenderError;

    type SerializeSeq = SeqCollector;
    type SerializeTuple = SeqCollector;
    type SerializeTupleStruct = RecordCollector;
    type SerializeTupleVariant = VariantCollector;
    type SerializeMap = MapCollector;
    type SerializeStruct = RecordCollector;
    type SerializeStructVariant = VariantCollector;

    fn serialize_bool(self, v: bool) -> Result<Value, RenderError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, RenderError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, RenderError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, RenderError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, RenderError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, RenderError> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, RenderError> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, RenderError> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, RenderError> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, RenderError> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, RenderError> {
        Ok(Value::Uint(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, RenderError> {
        Ok(Value::Float(widen_f32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, RenderError> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, RenderError> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value, RenderError> {
        Ok(Value::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, RenderError> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, RenderError> {
        Ok(Value::Nil)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, RenderError> {
        Ok(Value::Some(Box::new(value.serialize(self)?)))
    }

    fn serialize_unit(self) -> Result<Value, RenderError> {
        Ok(Value::Record {
            name: "()",
            fields: Vec::new(),
        })
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, RenderError> {
        Ok(Value::Record {
            name,
            fields: Vec::new(),
        })
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, RenderError> {
        Ok(Value::Variant {
            enum_name: name,
            variant,
            style: VariantStyle::Unit,
            fields: Vec::new(),
        })
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Value, RenderError> {
        Ok(Value::Record {
            name,
            fields: vec![capture(value)?],
        })
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, RenderError> {
        Ok(Value::Variant {
            enum_name: name,
            variant,
            style: VariantStyle::Tuple,
            fields: vec![capture(value)?],
        })
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqCollector, RenderError> {
        Ok(SeqCollector {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqCollector, RenderError> {
        Ok(SeqCollector {
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_struct(self, name: &'static str, len: usize) -> Result<RecordCollector, RenderError> {
        Ok(RecordCollector {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantCollector, RenderError> {
        Ok(VariantCollector {
            enum_name: name,
            variant,
            style: VariantStyle::Tuple,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCollector, RenderError> {
        Ok(MapCollector {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<RecordCollector, RenderError> {
        Ok(RecordCollector {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantCollector, RenderError> {
        Ok(VariantCollector {
            enum_name: name,
            variant,
            style: VariantStyle::Struct,
            fields: Vec::with_capacity(len),
        })
    }
}

// ============================================================================
// Compound collectors
// ============================================================================

pub(super) struct SeqCollector {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RenderError> {
        self.items.push(capture(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RenderError> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTuple for SeqCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RenderError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, RenderError> {
        ser::SerializeSeq::end(self)
    }
}

pub(super) struct RecordCollector {
    name: &'static str,
    fields: Vec<Value>,
}

impl ser::SerializeTupleStruct for RecordCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RenderError> {
        self.fields.push(capture(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RenderError> {
        Ok(Value::Record {
            name: self.name,
            fields: self.fields,
        })
    }
}

impl ser::SerializeStruct for RecordCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Result<(), RenderError> {
        self.fields.push(capture(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RenderError> {
        ser::SerializeTupleStruct::end(self)
    }
}

pub(super) struct VariantCollector {
    enum_name: &'static str,
    variant: &'static str,
    style: VariantStyle,
    fields: Vec<Value>,
}

impl VariantCollector {
    fn finish(self) -> Value {
        Value::Variant {
            enum_name: self.enum_name,
            variant: self.variant,
            style: self.style,
            fields: self.fields,
        }
    }
}

impl ser::SerializeTupleVariant for VariantCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RenderError> {
        self.fields.push(capture(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RenderError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for VariantCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Result<(), RenderError> {
        self.fields.push(capture(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RenderError> {
        Ok(self.finish())
    }
}

pub(super) struct MapCollector {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapCollector {
    type Ok = Value;
    type Error = RenderError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), RenderError> {
        self.pending_key = Some(capture(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RenderError> {
        let key = self.pending_key.take().ok_or(RenderError::KeyMissing)?;
        self.entries.push((key, capture(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, RenderError> {
        Ok(Value::Map(self.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, SerializeMap, Serializer};

    struct Failing;

    impl Serialize for Failing {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused to serialize"))
        }
    }

    #[test]
    fn test_custom_errors_propagate_from_nested_values() {
        let err = capture(&vec![Failing]).expect_err("nested failure should surface");
        assert_eq!(err, RenderError::Custom("refused to serialize".to_string()));
        assert_eq!(err.to_string(), "refused to serialize");
    }

    #[test]
    fn test_map_value_without_key() {
        let mut map = ValueSerializer.serialize_map(None).expect("map collector");
        let err = map.serialize_value(&1).expect_err("value without key");
        assert_eq!(err, RenderError::KeyMissing);
    }

    #[test]
    fn test_f32_widening_keeps_shortest_digits() {
        assert_eq!(widen_f32(0.1), 0.1);
        assert_eq!(widen_f32(1.5), 1.5);
        assert!(widen_f32(f32::NAN).is_nan());
    }
}
