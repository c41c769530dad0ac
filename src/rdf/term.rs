/*
  Conversions between GraphTerm and the rio_api model, so that
  triples coming out of a rio parser can be decoded directly
  and typed values can be handed to a rio formatter.
*/

extern crate rio_api;

use {
  rio_api::model::{NamedNode, Term, Literal},
  crate::{GraphTerm, rdf::xsd},
};

impl GraphTerm {
  /// Borrows this term as a rio term.
  pub fn as_rio(&self) -> Term<'_> {
    match self {
      GraphTerm::Named{ iri } => Term::NamedNode(NamedNode{ iri: iri.as_str() }),
      GraphTerm::TypedLit{ val, datatype } => Term::Literal(Literal::Typed{
        value: val.as_str(),
        datatype: NamedNode{ iri: datatype.as_str() },
      }),
    }
  }
  /* Blank nodes and language tagged strings are not values
    this crate can represent. Plain literals are xsd:string. */
  pub fn from_rio(term: Term<'_>) -> Option<Self> {
    match term {
      Term::NamedNode(NamedNode{ iri }) => Some(GraphTerm::Named{ iri: iri.to_string() }),
      Term::Literal(Literal::Typed{ value, datatype: NamedNode{ iri } }) => {
        Some(GraphTerm::TypedLit{ val: value.to_string(), datatype: iri.to_string() })
      },
      Term::Literal(Literal::Simple{ value }) => {
        Some(GraphTerm::TypedLit{ val: value.to_string(), datatype: xsd::STRING.to_string() })
      },
      _ => None,
    }
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use rio_api::model::BlankNode;
  #[test]
  fn typed_literal_to_rio() {
    let term = GraphTerm::TypedLit{ val: "ff".into(), datatype: xsd::HEX_BINARY.into() };
    match term.as_rio() {
      Term::Literal(Literal::Typed{ value, datatype }) => {
        assert_eq!(value, "ff");
        assert_eq!(datatype.iri, xsd::HEX_BINARY);
      },
      other => panic!("unexpected term {:?}", other),
    }
  }
  #[test]
  fn named_round_trip() {
    let term = GraphTerm::from("aff4://vol");
    assert_eq!(GraphTerm::from_rio(term.as_rio()), Some(term));
  }
  #[test]
  fn plain_literals_are_strings() {
    let term = GraphTerm::from_rio(Term::Literal(Literal::Simple{ value: "hi" }));
    assert_eq!(term, Some(GraphTerm::TypedLit{ val: "hi".into(), datatype: xsd::STRING.into() }));
  }
  #[test]
  fn unrepresentable_terms() {
    assert_eq!(GraphTerm::from_rio(Term::BlankNode(BlankNode{ id: "b0" })), None);
    let tagged = Term::Literal(Literal::LanguageTaggedString{ value: "chat", language: "fr" });
    assert_eq!(GraphTerm::from_rio(tagged), None);
  }
}
