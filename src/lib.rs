/* Exports */

pub mod errors;
pub mod rdf;
pub mod urn;
pub mod registry;

pub use errors::ValueError;
pub use rdf::{
  RdfValue, Value, ValueKind,
  scalar::{RdfBytes, XsdString, XsdInteger},
};
pub use urn::Urn;
pub use registry::{TypeRegistry, RegistryConfig};

/* Common Definitions */

pub type Result<T> = std::result::Result<T, ValueError>;

/* What a value looks like to the graph layer: URNs are
  plain resource references, everything else is a typed literal. */
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize, Hash)]
pub enum GraphTerm {
  Named{ iri: String },
  TypedLit{ val: String, datatype: String },
}
impl GraphTerm {
  pub fn datatype(&self) -> Option<&str> {
    match self {
      GraphTerm::Named{ .. } => None,
      GraphTerm::TypedLit{ datatype, .. } => Some(datatype),
    }
  }
  /// The serialized string, or the IRI for named terms.
  pub fn lexical(&self) -> &str {
    match self {
      GraphTerm::Named{ iri } => iri,
      GraphTerm::TypedLit{ val, .. } => val,
    }
  }
}
impl std::convert::From<&str> for GraphTerm {
  fn from(s: &str) -> Self {
    Self::Named{ iri: s.to_string() }
  }
}
