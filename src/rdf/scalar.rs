/*
  The leaf value types: raw bytes carried as hexBinary,
  strings and arbitrary precision integers.
*/

use {
  num_bigint::BigInt,
  num_traits::ToPrimitive,
  crate::{
    Result,
    errors::ValueError as Error,
    rdf::{RdfValue, xsd, describe_native},
  },
};

/* Opaque bytes, serialized as lowercase hex */
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RdfBytes {
  value: Vec<u8>,
}
impl RdfBytes {
  pub fn new(value: impl Into<Vec<u8>>) -> Self {
    RdfBytes { value: value.into() }
  }
  pub fn as_bytes(&self) -> &[u8] {
    &self.value
  }
  pub fn into_inner(self) -> Vec<u8> {
    self.value
  }
}
impl RdfValue for RdfBytes {
  const DATATYPE: &'static str = xsd::HEX_BINARY;
  fn serialize(&self) -> String {
    hex::encode(&self.value)
  }
  fn deserialize(raw: &str) -> Result<Self> {
    match hex::decode(raw) {
      Ok(value) => Ok(RdfBytes { value }),
      Err(e) => Err(Error::Hex(raw.to_string(), Box::new(e))),
    }
  }
  fn set(&mut self, native: &serde_json::Value) -> Result<()> {
    use serde_json::Value::*;
    self.value = match native {
      String(s) => s.as_bytes().to_vec(),
      Array(items) => {
        let mut bytes = Vec::with_capacity(items.len());
        for item in items {
          match item.as_u64() {
            Some(b) if b <= u8::MAX as u64 => bytes.push(b as u8),
            _ => return Err(Error::Type(Self::DATATYPE, format!("an array holding {}", describe_native(item)))),
          }
        }
        bytes
      },
      other => return Err(Error::Type(Self::DATATYPE, describe_native(other))),
    };
    Ok(())
  }
}
impl From<Vec<u8>> for RdfBytes {
  fn from(value: Vec<u8>) -> Self {
    RdfBytes { value }
  }
}
impl From<&[u8]> for RdfBytes {
  fn from(value: &[u8]) -> Self {
    RdfBytes { value: value.to_vec() }
  }
}
impl std::fmt::Display for RdfBytes {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.serialize())
  }
}

/* Unicode text; its byte form is UTF-8 */
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsdString {
  value: String,
}
impl XsdString {
  pub fn new(value: impl Into<String>) -> Self {
    XsdString { value: value.into() }
  }
  pub fn as_str(&self) -> &str {
    &self.value
  }
  pub fn into_inner(self) -> String {
    self.value
  }
}
impl RdfValue for XsdString {
  const DATATYPE: &'static str = xsd::STRING;
  fn serialize(&self) -> String {
    self.value.clone()
  }
  fn deserialize(raw: &str) -> Result<Self> {
    Ok(XsdString { value: raw.to_string() })
  }
  fn set(&mut self, native: &serde_json::Value) -> Result<()> {
    use serde_json::Value::*;
    self.value = match native {
      String(s) => s.clone(),
      Number(n) => n.to_string(),
      Bool(b) => b.to_string(),
      other => return Err(Error::Type(Self::DATATYPE, describe_native(other))),
    };
    Ok(())
  }
}
impl From<&str> for XsdString {
  fn from(s: &str) -> Self {
    XsdString { value: s.to_string() }
  }
}
impl From<String> for XsdString {
  fn from(value: String) -> Self {
    XsdString { value }
  }
}
impl std::fmt::Display for XsdString {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.value)
  }
}

/* Signed integer of any width. Comparable against a bare i64. */
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsdInteger {
  value: BigInt,
}
impl XsdInteger {
  pub fn new(value: impl Into<BigInt>) -> Self {
    XsdInteger { value: value.into() }
  }
  pub fn as_bigint(&self) -> &BigInt {
    &self.value
  }
  /// None when the value does not fit.
  pub fn to_i64(&self) -> Option<i64> {
    self.value.to_i64()
  }
}
impl RdfValue for XsdInteger {
  const DATATYPE: &'static str = xsd::INTEGER;
  fn serialize(&self) -> String {
    self.value.to_string()
  }
  fn deserialize(raw: &str) -> Result<Self> {
    let (negative, digits) = match raw.as_bytes().first() {
      Some(b'-') => (true, &raw[1..]),
      Some(b'+') => (false, &raw[1..]),
      _ => (false, raw),
    };
    // BigInt's own parser tolerates '_' separators, so gate on plain digits first
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(Error::Parse(Self::DATATYPE, raw.to_string()));
    }
    let magnitude: BigInt = digits.parse()
      .map_err(|e| Error::Integer(raw.to_string(), Box::new(e)))?;
    Ok(XsdInteger { value: if negative { -magnitude } else { magnitude } })
  }
  fn set(&mut self, native: &serde_json::Value) -> Result<()> {
    let value = match native {
      serde_json::Value::Number(n) => {
        if let Some(i) = n.as_i64() {
          BigInt::from(i)
        }
        else if let Some(u) = n.as_u64() {
          BigInt::from(u)
        }
        else {
          return Err(Error::Type(Self::DATATYPE, describe_native(native)))
        }
      },
      other => return Err(Error::Type(Self::DATATYPE, describe_native(other))),
    };
    self.value = value;
    Ok(())
  }
}
impl From<i64> for XsdInteger {
  fn from(i: i64) -> Self {
    XsdInteger { value: BigInt::from(i) }
  }
}
impl From<BigInt> for XsdInteger {
  fn from(value: BigInt) -> Self {
    XsdInteger { value }
  }
}
impl PartialEq<i64> for XsdInteger {
  fn eq(&self, other: &i64) -> bool {
    self.value == BigInt::from(*other)
  }
}
impl PartialEq<XsdInteger> for i64 {
  fn eq(&self, other: &XsdInteger) -> bool {
    other == self
  }
}
impl PartialEq<BigInt> for XsdInteger {
  fn eq(&self, other: &BigInt) -> bool {
    &self.value == other
  }
}
impl std::fmt::Display for XsdInteger {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.value)
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use serde_json::json;

  fn round_trip<T: RdfValue + PartialEq + std::fmt::Debug>(v: T) {
    assert_eq!(T::deserialize(&v.serialize()).unwrap(), v);
    assert_eq!(T::deserialize_bytes(&v.serialize_bytes()).unwrap(), v);
  }

  #[test]
  fn representative_round_trips() {
    round_trip(RdfBytes::default());
    round_trip(RdfBytes::new(vec![0u8, 1, 0x7f, 0x80, 0xff]));
    round_trip(XsdString::default());
    round_trip(XsdString::from("Grüße, 世界 🦀"));
    round_trip(XsdInteger::from(0));
    round_trip(XsdInteger::from(-7));
    round_trip(XsdInteger::from(i64::MIN));
    round_trip(XsdInteger::new(BigInt::from(u64::MAX) * BigInt::from(1000u32)));
  }

  /* RdfBytes */
  #[test]
  fn hex_is_lowercase_and_even() {
    let b = RdfBytes::new(vec![0xab, 0x0c]);
    assert_eq!(b.serialize(), "ab0c");
    assert_eq!(RdfBytes::default().serialize(), "");
    assert_eq!(RdfBytes::deserialize("AB0C").unwrap(), b);
  }
  #[test]
  fn hex_rejects_malformed() {
    assert!(RdfBytes::deserialize("abc").unwrap_err().is_parse());
    assert!(RdfBytes::deserialize("zz").unwrap_err().is_parse());
    assert!(RdfBytes::deserialize("0g").unwrap_err().is_parse());
  }
  #[test]
  fn bytes_set() {
    let mut b = RdfBytes::default();
    b.set(&json!("hi")).unwrap();
    assert_eq!(b.serialize(), "6869");
    b.set(&json!([1, 255])).unwrap();
    assert_eq!(b.as_bytes(), &[1u8, 255][..]);
    assert!(b.set(&json!([256])).unwrap_err().is_type());
    assert!(b.set(&json!(7)).unwrap_err().is_type());
    assert_eq!(b.as_bytes(), &[1u8, 255][..]);
  }

  /* XsdString */
  #[test]
  fn string_bytes_are_utf8() {
    let s = XsdString::from("é");
    assert_eq!(s.serialize_bytes(), vec![0xc3, 0xa9]);
    assert!(XsdString::deserialize_bytes(&[0xc3]).unwrap_err().is_parse());
  }
  #[test]
  fn string_set() {
    let mut s = XsdString::default();
    s.set(&json!(12)).unwrap();
    assert_eq!(s.as_str(), "12");
    s.set(&json!(false)).unwrap();
    assert_eq!(s.as_str(), "false");
    assert!(s.set(&json!(null)).unwrap_err().is_type());
    assert!(s.set(&json!({"a": 1})).unwrap_err().is_type());
  }

  /* XsdInteger */
  #[test]
  fn integer_codec() {
    assert!(XsdInteger::deserialize("42").unwrap() == 42);
    assert!(42 == XsdInteger::deserialize("42").unwrap());
    assert_eq!(XsdInteger::deserialize("-7").unwrap().serialize(), "-7");
    assert_eq!(XsdInteger::deserialize("+007").unwrap().serialize(), "7");
    assert_eq!(XsdInteger::deserialize("-0").unwrap().serialize(), "0");
  }
  #[test]
  fn integer_rejects_garbage() {
    for raw in ["", " ", " 42", "42 ", "4 2", "42abc", "-", "+", "1_000", "0x10", "1.5", "--1"].iter() {
      assert!(XsdInteger::deserialize(raw).unwrap_err().is_parse(), "accepted {:?}", raw);
    }
  }
  #[test]
  fn integer_is_not_truncated() {
    let big = "123456789012345678901234567890";
    let i = XsdInteger::deserialize(big).unwrap();
    assert_eq!(i.serialize(), big);
    assert_eq!(i.to_i64(), None);
    assert_eq!(XsdInteger::from(-3).to_i64(), Some(-3));
  }
  #[test]
  fn integer_set() {
    let mut i = XsdInteger::default();
    i.set(&json!(u64::MAX)).unwrap();
    assert_eq!(i.serialize(), u64::MAX.to_string());
    assert!(i.set(&json!(1.5)).unwrap_err().is_type());
    assert!(i.set(&json!("3")).unwrap_err().is_type());
  }
}
