use super::{BenchmarkEntry, Field, FieldBag};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::sync::Arc;

/// Visitor turning any JSON value into a [`Field`], keeping object order.
struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value of any type")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Field, E> {
        Ok(Field::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Field, E> {
        Ok(Field::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Field, E> {
        if value <= i64::MAX as u64 {
            Ok(Field::Int(value as i64))
        } else {
            Ok(Field::Float(value as f64))
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Field, E> {
        Ok(Field::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Field, E> {
        Ok(Field::Str(Arc::from(value)))
    }

    fn visit_string<E>(self, value: String) -> Result<Field, E> {
        Ok(Field::Str(Arc::<str>::from(value)))
    }

    fn visit_none<E>(self) -> Result<Field, E> {
        Ok(Field::Nil)
    }

    fn visit_unit<E>(self) -> Result<Field, E> {
        Ok(Field::Nil)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Field, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let size_hint = seq.size_hint().unwrap_or(0);
        let mut elements = Vec::with_capacity(size_hint);
        while let Some(elem) = seq.next_element::<Field>()? {
            elements.push(elem);
        }
        Ok(Field::List(Arc::from(elements)))
    }

    fn visit_map<M>(self, mut map_access: M) -> Result<Field, M::Error>
    where
        M: MapAccess<'de>,
    {
        let size_hint = map_access.size_hint().unwrap_or(0);
        let mut bag = FieldBag::with_capacity(size_hint);
        while let Some((key, value)) = map_access.next_entry::<String, Field>()? {
            bag.insert(key, value);
        }
        Ok(Field::Map(bag))
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldVisitor)
    }
}

/// Parse a whole document into a [`Field`] tree.
pub fn from_json_str(input: &str) -> anyhow::Result<Field> {
    serde_json::from_str::<Field>(input).map_err(|e| anyhow::anyhow!(e))
}

/// Parse a single entry object. Anything other than an object is rejected.
pub fn entry_from_json_str(input: &str) -> anyhow::Result<BenchmarkEntry> {
    match from_json_str(input)? {
        Field::Map(bag) => Ok(BenchmarkEntry::from_bag(bag)),
        other => Err(anyhow::anyhow!("expected a JSON object for an entry, got {}", other.type_name())),
    }
}
