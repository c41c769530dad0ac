type Source<E> = Box<E>;

/* Everything that can go wrong while turning strings or native
  values into typed RDF values. Parse-like variants are always
  recoverable; the caller decides whether to skip the literal. */
#[derive(Debug)]
pub enum ValueError {
  Parse(&'static str, String),
  Hex(String, Source<hex::FromHexError>),
  Utf8(Source<std::str::Utf8Error>),
  Integer(String, Source<num_bigint::ParseBigIntError>),
  Type(&'static str, String),
  UnknownKind(String),
  Config(Source<serde_json::Error>),
}
impl ValueError {
  /// True for every failure caused by malformed serialized input.
  pub fn is_parse(&self) -> bool {
    use ValueError::*;
    match self {
      Parse(_, _) | Hex(_, _) | Utf8(_) | Integer(_, _) => true,
      _ => false,
    }
  }
  /// True when a native value could not be coerced by `set`.
  pub fn is_type(&self) -> bool {
    match self {
      ValueError::Type(_, _) => true,
      _ => false,
    }
  }
}
impl std::error::Error for ValueError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use ValueError::*;
    match self {
      Hex(_, e) => Some(&**e),
      Utf8(e) => Some(&**e),
      Integer(_, e) => Some(&**e),
      Config(e) => Some(&**e),
      _ => None,
    }
  }
}
impl std::fmt::Display for ValueError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    use ValueError::*;
    match self {
      Parse(datatype, input) => write!(f, "Could not parse {:?} as a literal of type <{}>", input, datatype),
      Hex(input, e) => write!(f, "Could not decode {:?} as hexBinary: {}", input, *e),
      Utf8(e) => write!(f, "Serialized literal is not valid UTF-8: {}", *e),
      Integer(input, e) => write!(f, "Could not parse {:?} as an integer: {}", input, *e),
      Type(datatype, found) => write!(f, "Cannot set a value of type <{}> from {}", datatype, found),
      UnknownKind(name) => write!(f, "{:?} does not name a value kind, expected one of bytes, string, integer, urn", name),
      Config(e) => write!(f, "Invalid type registry configuration: {}", *e),
    }
  }
}
impl From<std::str::Utf8Error> for ValueError {
  fn from(err: std::str::Utf8Error) -> ValueError {
    ValueError::Utf8(Box::new(err))
  }
}
impl From<serde_json::Error> for ValueError {
  fn from(err: serde_json::Error) -> ValueError {
    ValueError::Config(Box::new(err))
  }
}
