pub mod path;
pub mod quote;
pub mod member;

use {
  crate::{
    GraphTerm, Result,
    errors::ValueError as Error,
    rdf::{RdfValue, xsd, describe_native},
  },
};

/* Schemes written with a "//" authority marker even when the
  authority itself is empty, e.g. file:///tmp */
const AUTHORITY_SCHEMES: &[&str] = &[
  "file", "ftp", "http", "https", "shttp", "gopher", "nntp", "telnet", "imap",
  "wais", "mms", "snews", "prospero", "rtsp", "rtspu", "sftp", "svn", "svn+ssh",
];

pub const DEFAULT_SCHEME: &str = "file";

fn carries_authority(scheme: &str, authority: &str) -> bool {
  !authority.is_empty() || AUTHORITY_SCHEMES.contains(&scheme)
}

fn is_scheme(candidate: &str) -> bool {
  let mut chars = candidate.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() => {},
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

fn split_scheme(raw: &str) -> (Option<String>, &str) {
  if let Some(colon) = raw.find(':') {
    let candidate = &raw[..colon];
    if is_scheme(candidate) {
      return (Some(candidate.to_ascii_lowercase()), &raw[colon + 1..]);
    }
  }
  (None, raw)
}

/// The normalized components of a URN. `params` is never populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrnParts {
  pub scheme: String,
  pub authority: String,
  pub path: String,
  pub query: String,
  pub fragment: String,
}
impl UrnParts {
  /// Splits and normalizes; never fails.
  pub fn parse(raw: &str) -> Self {
    let (scheme, mut rest) = split_scheme(raw);
    let scheme = scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string());

    let mut authority = "";
    if rest.starts_with("//") {
      let after = &rest[2..];
      let end = after.find(|c: char| c == '/' || c == '?' || c == '#').unwrap_or_else(|| after.len());
      authority = &after[..end];
      rest = &after[end..];
    }
    let mut fragment = "";
    if let Some(hash) = rest.find('#') {
      fragment = &rest[hash + 1..];
      rest = &rest[..hash];
    }
    let mut query = "";
    if let Some(question) = rest.find('?') {
      query = &rest[question + 1..];
      rest = &rest[..question];
    }

    UrnParts {
      path: normalize_component_path(rest, !authority.is_empty()),
      scheme,
      authority: authority.to_string(),
      query: query.to_string(),
      fragment: fragment.to_string(),
    }
  }
  /// Reassembles the components in standard URI syntax.
  pub fn unparse(&self) -> String {
    let mut out = String::with_capacity(
      self.scheme.len() + self.authority.len() + self.path.len() + self.query.len() + self.fragment.len() + 6
    );
    out.push_str(&self.scheme);
    out.push(':');
    if carries_authority(&self.scheme, &self.authority) {
      out.push_str("//");
      out.push_str(&self.authority);
      /* a relative path is written rooted, so reparsing the
        output resolves it the same way every time */
      if !self.path.is_empty() && !self.path.starts_with('/') {
        out.push_str(&path::normalize(&format!("/{}", self.path)));
      }
      else {
        out.push_str(&self.path);
      }
    }
    else {
      out.push_str(&self.path);
    }
    if !self.query.is_empty() {
      out.push('?');
      out.push_str(&self.query);
    }
    if !self.fragment.is_empty() {
      out.push('#');
      out.push_str(&self.fragment);
    }
    out
  }
}

/* A path that normalizes to "." is stored empty. Next to a
  non-empty authority the path is rooted; otherwise relative
  paths stay relative in the components. */
fn normalize_component_path(raw: &str, rooted: bool) -> String {
  let normalized = path::normalize(raw);
  if normalized == "." {
    String::new()
  }
  else if rooted && !normalized.starts_with('/') {
    path::normalize(&format!("/{}", normalized))
  }
  else {
    normalized
  }
}

/// A normalized resource identifier. Equality, ordering and hashing all
/// follow the canonical serialized form.
#[derive(Clone)]
pub struct Urn {
  parts: UrnParts,
  value: String,
}
impl Urn {
  pub fn new(raw: &str) -> Self {
    let parts = UrnParts::parse(raw);
    let value = parts.unparse();
    Urn { parts, value }
  }
  /// A `file:` URN for a filesystem path, percent-encoding the path.
  pub fn from_filename(filename: &str) -> Self {
    Urn::new(&format!("file:{}", quote::quote_path(filename)))
  }
  pub fn parse(&self) -> &UrnParts {
    &self.parts
  }
  pub fn as_str(&self) -> &str {
    &self.value
  }
  pub fn scheme(&self) -> &str {
    &self.parts.scheme
  }
  pub fn authority(&self) -> &str {
    &self.parts.authority
  }
  pub fn path(&self) -> &str {
    &self.parts.path
  }
  pub fn query(&self) -> &str {
    &self.parts.query
  }
  pub fn fragment(&self) -> &str {
    &self.parts.fragment
  }
  /// The path of a `file:` URN, None for every other scheme.
  pub fn to_file_path(&self) -> Option<&str> {
    if self.parts.scheme == "file" {
      Some(&self.parts.path)
    }
    else {
      None
    }
  }
  /// Appends a single, percent-encoded path segment.
  pub fn append(&self, component: &str) -> Urn {
    self.append_with(component, true)
  }
  pub fn append_with(&self, component: &str, quote: bool) -> Urn {
    let component = if quote {
      quote::quote_segment(component)
    }
    else {
      component.to_string()
    };
    let parts = UrnParts {
      path: normalize_component_path(
        &path::join(&self.parts.path, &component),
        !self.parts.authority.is_empty(),
      ),
      ..self.parts.clone()
    };
    let value = parts.unparse();
    Urn { parts, value }
  }
  /// What `other` adds beyond this URN, when this URN's serialized form
  /// is a literal prefix of it. No path algebra is involved.
  pub fn relative_path<'a, U: AsRef<str> + ?Sized>(&self, other: &'a U) -> Option<&'a str> {
    let other = other.as_ref();
    if other.starts_with(self.value.as_str()) {
      Some(&other[self.value.len()..])
    }
    else {
      None
    }
  }
}
impl RdfValue for Urn {
  const DATATYPE: &'static str = xsd::ANY_URI;
  fn serialize(&self) -> String {
    self.value.clone()
  }
  fn deserialize(raw: &str) -> Result<Self> {
    Ok(Urn::new(raw))
  }
  fn set(&mut self, native: &serde_json::Value) -> Result<()> {
    match native {
      serde_json::Value::String(s) => {
        *self = Urn::new(s);
        Ok(())
      },
      other => Err(Error::Type(Self::DATATYPE, describe_native(other))),
    }
  }
  fn graph_term(&self) -> GraphTerm {
    GraphTerm::Named{ iri: self.value.clone() }
  }
}
impl Default for Urn {
  fn default() -> Self {
    Urn::new("")
  }
}
impl PartialEq for Urn {
  fn eq(&self, other: &Self) -> bool {
    self.value == other.value
  }
}
impl Eq for Urn {}
impl PartialOrd for Urn {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
impl Ord for Urn {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.value.cmp(&other.value)
  }
}
impl std::hash::Hash for Urn {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.value.hash(state);
  }
}
impl std::fmt::Debug for Urn {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "<{}>", self.value)
  }
}
impl std::fmt::Display for Urn {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.value)
  }
}
impl AsRef<str> for Urn {
  fn as_ref(&self) -> &str {
    &self.value
  }
}
impl std::convert::From<&str> for Urn {
  fn from(s: &str) -> Self {
    Urn::new(s)
  }
}
impl std::convert::From<String> for Urn {
  fn from(s: String) -> Self {
    Urn::new(&s)
  }
}
impl std::convert::From<UrnParts> for Urn {
  fn from(parts: UrnParts) -> Self {
    Urn::new(&parts.unparse())
  }
}
impl std::str::FromStr for Urn {
  type Err = std::convert::Infallible;
  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    Ok(Urn::new(s))
  }
}
impl serde::Serialize for Urn {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.value)
  }
}
impl<'de> serde::Deserialize<'de> for Urn {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    Ok(Urn::new(&raw))
  }
}
