//! Schema model: primitive types, the widening lattice, field descriptors,
//! and JSON rendering.
//!
//! This module owns the [`PrimitiveType`] enum (4 supported field types with
//! a total widening order), the [`FieldDescriptor`] per-field record, and the
//! [`Schema`] struct that serializes to an Avro-style record object.
//!
//! ## Responsibilities
//!
//! - The `widen` join function used by the column unifier and the override
//!   reconciler
//! - Parsing user-facing type tokens (`boolean`, `long`, `int`, `float`,
//!   `string`, case-insensitive)
//! - Rendering the finished schema as pretty or minimized JSON

use std::{fmt, str::FromStr};

use anyhow::anyhow;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Primitive field types, ordered by widening capability.
///
/// `Boolean` and `Long` are narrow and mutually incompatible; `Float` widens
/// `Long`; `String` can represent anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Long,
    Float,
    String,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::String => "string",
        }
    }

    pub fn variants() -> &'static [&'static str] {
        &["boolean", "long", "int", "float", "string"]
    }

    /// Least widening ancestor of `self` and `other`.
    ///
    /// Total over all pairs: mixing a boolean with any numeric widens
    /// straight to `String`.
    pub fn widen(self, other: PrimitiveType) -> PrimitiveType {
        use PrimitiveType::*;
        match (self, other) {
            (String, _) | (_, String) => String,
            (Boolean, Boolean) => Boolean,
            (Boolean, _) | (_, Boolean) => String,
            (Float, _) | (_, Float) => Float,
            (Long, Long) => Long,
        }
    }

    /// True when `self` can losslessly represent every value of a column
    /// classified as `narrower`.
    pub fn can_hold(self, narrower: PrimitiveType) -> bool {
        self.widen(narrower) == self
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "boolean" => Ok(PrimitiveType::Boolean),
            "long" | "int" => Ok(PrimitiveType::Long),
            "float" => Ok(PrimitiveType::Float),
            "string" => Ok(PrimitiveType::String),
            _ => Err(anyhow!(
                "Unknown field type '{value}'. Supported types: {}",
                PrimitiveType::variants().join(", ")
            )),
        }
    }
}

/// One named, typed, nullability-flagged field of the output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: PrimitiveType,
    pub nullable: bool,
}

impl Serialize for FieldDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = if self.nullable { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("name", &self.name)?;
        if self.nullable {
            // Nullable fields serialize as the union ["null", type] with a
            // null default; required fields as the bare type name.
            map.serialize_entry("type", &NullableUnion(self.ty))?;
            map.serialize_entry("default", &())?;
        } else {
            map.serialize_entry("type", &self.ty)?;
        }
        map.end()
    }
}

struct NullableUnion(PrimitiveType);

impl Serialize for NullableUnion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element("null")?;
        seq.serialize_element(&self.0)?;
        seq.end()
    }
}

/// The finished record schema: a caller-supplied name plus one field per
/// sample column, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub record_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "record")?;
        map.serialize_entry("name", &self.record_name)?;
        map.serialize_entry("fields", &self.fields)?;
        map.end()
    }
}

impl Schema {
    /// Renders the schema as JSON text.
    ///
    /// `minimize` collapses the output to its densest single-line form; both
    /// forms carry an identical JSON value.
    pub fn render(&self, minimize: bool) -> String {
        let rendered = if minimize {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };
        rendered.expect("record schema serializes with string keys only")
    }
}
