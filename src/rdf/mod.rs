pub mod xsd;
pub mod scalar;
pub mod term;

use {
  crate::{
    GraphTerm, Result,
    errors::ValueError as Error,
    urn::Urn,
  },
  crate::rdf::scalar::{RdfBytes, XsdString, XsdInteger},
};

/* The contract every typed value honours:
  deserialize(serialize(v)) == v for every valid v. */
pub trait RdfValue: Sized {
  /* Required */
  const DATATYPE: &'static str;
  fn serialize(&self) -> String;
  fn deserialize(raw: &str) -> Result<Self>;
  /// Assign from a native (not serialized) value.
  fn set(&mut self, native: &serde_json::Value) -> Result<()>;
  /* Provided */
  fn graph_term(&self) -> GraphTerm {
    GraphTerm::TypedLit{ val: self.serialize(), datatype: Self::DATATYPE.to_string() }
  }
  fn serialize_bytes(&self) -> Vec<u8> {
    self.serialize().into_bytes()
  }
  fn deserialize_bytes(raw: &[u8]) -> Result<Self> {
    Self::deserialize(std::str::from_utf8(raw)?)
  }
}

/* Describes a native value for Type errors */
pub(crate) fn describe_native(native: &serde_json::Value) -> String {
  use serde_json::Value::*;
  match native {
    Null => "null".to_string(),
    Bool(b) => format!("boolean {}", b),
    Number(n) => format!("number {}", n),
    String(_) => "a string".to_string(),
    Array(a) => format!("an array of {} elements", a.len()),
    Object(_) => "an object".to_string(),
  }
}

/// Any typed value the registry can hand back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
  Bytes(RdfBytes),
  String(XsdString),
  Integer(XsdInteger),
  Urn(Urn),
}
impl Value {
  pub fn kind(&self) -> ValueKind {
    match self {
      Value::Bytes(_) => ValueKind::Bytes,
      Value::String(_) => ValueKind::String,
      Value::Integer(_) => ValueKind::Integer,
      Value::Urn(_) => ValueKind::Urn,
    }
  }
  pub fn datatype(&self) -> &'static str {
    self.kind().datatype()
  }
  pub fn serialize(&self) -> String {
    match self {
      Value::Bytes(v) => v.serialize(),
      Value::String(v) => v.serialize(),
      Value::Integer(v) => v.serialize(),
      Value::Urn(v) => v.serialize(),
    }
  }
  pub fn serialize_bytes(&self) -> Vec<u8> {
    self.serialize().into_bytes()
  }
  pub fn set(&mut self, native: &serde_json::Value) -> Result<()> {
    match self {
      Value::Bytes(v) => v.set(native),
      Value::String(v) => v.set(native),
      Value::Integer(v) => v.set(native),
      Value::Urn(v) => v.set(native),
    }
  }
  pub fn graph_term(&self) -> GraphTerm {
    match self {
      Value::Bytes(v) => v.graph_term(),
      Value::String(v) => v.graph_term(),
      Value::Integer(v) => v.graph_term(),
      Value::Urn(v) => v.graph_term(),
    }
  }
  pub fn as_urn(&self) -> Option<&Urn> {
    match self {
      Value::Urn(urn) => Some(urn),
      _ => None,
    }
  }
  pub fn as_integer(&self) -> Option<&XsdInteger> {
    match self {
      Value::Integer(i) => Some(i),
      _ => None,
    }
  }
}
impl std::fmt::Display for Value {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.serialize())
  }
}
impl PartialEq<i64> for Value {
  fn eq(&self, other: &i64) -> bool {
    match self {
      Value::Integer(i) => i == other,
      _ => false,
    }
  }
}
impl PartialEq<Value> for i64 {
  fn eq(&self, other: &Value) -> bool {
    other == self
  }
}
impl From<RdfBytes> for Value {
  fn from(v: RdfBytes) -> Self { Value::Bytes(v) }
}
impl From<XsdString> for Value {
  fn from(v: XsdString) -> Self { Value::String(v) }
}
impl From<XsdInteger> for Value {
  fn from(v: XsdInteger) -> Self { Value::Integer(v) }
}
impl From<Urn> for Value {
  fn from(v: Urn) -> Self { Value::Urn(v) }
}

/* The factories the registry maps datatype tags onto */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
  Bytes,
  String,
  Integer,
  Urn,
}
impl ValueKind {
  pub fn datatype(self) -> &'static str {
    match self {
      ValueKind::Bytes => RdfBytes::DATATYPE,
      ValueKind::String => XsdString::DATATYPE,
      ValueKind::Integer => XsdInteger::DATATYPE,
      ValueKind::Urn => Urn::DATATYPE,
    }
  }
  pub fn name(self) -> &'static str {
    match self {
      ValueKind::Bytes => "bytes",
      ValueKind::String => "string",
      ValueKind::Integer => "integer",
      ValueKind::Urn => "urn",
    }
  }
  pub fn decode(self, raw: &str) -> Result<Value> {
    Ok(match self {
      ValueKind::Bytes => Value::Bytes(RdfBytes::deserialize(raw)?),
      ValueKind::String => Value::String(XsdString::deserialize(raw)?),
      ValueKind::Integer => Value::Integer(XsdInteger::deserialize(raw)?),
      ValueKind::Urn => Value::Urn(Urn::deserialize(raw)?),
    })
  }
  pub fn decode_bytes(self, raw: &[u8]) -> Result<Value> {
    self.decode(std::str::from_utf8(raw)?)
  }
  pub fn default_value(self) -> Value {
    match self {
      ValueKind::Bytes => Value::Bytes(RdfBytes::default()),
      ValueKind::String => Value::String(XsdString::default()),
      ValueKind::Integer => Value::Integer(XsdInteger::default()),
      ValueKind::Urn => Value::Urn(Urn::default()),
    }
  }
  pub fn from_native(self, native: &serde_json::Value) -> Result<Value> {
    let mut value = self.default_value();
    value.set(native)?;
    Ok(value)
  }
}
impl std::str::FromStr for ValueKind {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self> {
    match s {
      "bytes" => Ok(ValueKind::Bytes),
      "string" => Ok(ValueKind::String),
      "integer" => Ok(ValueKind::Integer),
      "urn" => Ok(ValueKind::Urn),
      _ => Err(Error::UnknownKind(s.to_string())),
    }
  }
}
impl std::fmt::Display for ValueKind {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}
