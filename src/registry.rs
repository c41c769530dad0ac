/*
  Datatype tag -> value kind dispatch. The process wide registry
  is filled once, either explicitly through install() or lazily
  with the defaults on first use, and is read-only from then on.
*/

use {
  std::collections::{HashMap, BTreeMap},
  once_cell::sync::OnceCell,
  tracing::{debug, trace},
  crate::{
    GraphTerm, Result,
    rdf::{Value, ValueKind, xsd},
  },
};

static GLOBAL: OnceCell<TypeRegistry> = OnceCell::new();

/// Freezes `registry` as the process wide registry. Fails, handing the
/// registry back, once a registry has been installed or `global()` ran.
pub fn install(registry: TypeRegistry) -> std::result::Result<(), TypeRegistry> {
  let count = registry.len();
  GLOBAL.set(registry)?;
  debug!(datatypes = count, "installed type registry");
  Ok(())
}

/// The frozen process wide registry.
pub fn global() -> &'static TypeRegistry {
  GLOBAL.get_or_init(|| {
    debug!("no type registry installed, freezing the defaults");
    TypeRegistry::with_defaults()
  })
}

pub fn lookup(tag: &str) -> Option<ValueKind> {
  global().lookup(tag)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
  types: HashMap<String, ValueKind>,
}
impl TypeRegistry {
  /* Constructors */
  pub fn new() -> Self {
    TypeRegistry {
      types: HashMap::new(),
    }
  }
  pub fn with_defaults() -> Self {
    let mut registry = TypeRegistry::new();
    registry.register(xsd::HEX_BINARY, ValueKind::Bytes);
    registry.register(xsd::STRING, ValueKind::String);
    registry.register(xsd::INTEGER, ValueKind::Integer);
    registry.register(xsd::INT, ValueKind::Integer);
    registry.register(xsd::LONG, ValueKind::Integer);
    registry.register(xsd::ANY_URI, ValueKind::Urn);
    registry
  }
  pub fn from_config(config: &RegistryConfig) -> Self {
    let mut registry = if config.include_defaults {
      TypeRegistry::with_defaults()
    }
    else {
      TypeRegistry::new()
    };
    for (tag, kind) in config.aliases.iter() {
      registry.register(tag.as_str(), *kind);
    }
    registry
  }
  pub fn from_json(json: &str) -> Result<Self> {
    let config: RegistryConfig = serde_json::from_str(json)?;
    Ok(TypeRegistry::from_config(&config))
  }

  /* Registration */
  /// Upserts `tag`, returning the kind it replaced.
  pub fn register(&mut self, tag: impl Into<String>, kind: ValueKind) -> Option<ValueKind> {
    let tag = tag.into();
    let previous = self.types.insert(tag.clone(), kind);
    match previous {
      Some(old) if old != kind => debug!(%tag, %old, new = %kind, "datatype re-registered"),
      Some(_) => {},
      None => debug!(%tag, %kind, "datatype registered"),
    }
    previous
  }

  /* Lookup */
  pub fn lookup(&self, tag: &str) -> Option<ValueKind> {
    let kind = self.types.get(tag).copied();
    if kind.is_none() {
      trace!(%tag, "no value kind registered for datatype");
    }
    kind
  }
  /// None when the tag is unknown: the literal should be left uninterpreted.
  pub fn decode(&self, tag: &str, raw: &str) -> Option<Result<Value>> {
    self.lookup(tag).map(|kind| kind.decode(raw))
  }
  pub fn decode_term(&self, term: &GraphTerm) -> Option<Result<Value>> {
    match term {
      GraphTerm::Named{ iri } => Some(ValueKind::Urn.decode(iri)),
      GraphTerm::TypedLit{ val, datatype } => self.decode(datatype, val),
    }
  }
  pub fn len(&self) -> usize {
    self.types.len()
  }
  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
  pub fn iter(&self) -> impl Iterator<Item = (&str, ValueKind)> + '_ {
    self.types.iter().map(|(tag, kind)| (tag.as_str(), *kind))
  }
  pub fn to_config(&self) -> RegistryConfig {
    RegistryConfig {
      include_defaults: false,
      aliases: self.types.iter().map(|(tag, kind)| (tag.clone(), *kind)).collect(),
    }
  }
}

/* Serializable description of a registry:
  { "include_defaults": true, "aliases": { "<datatype iri>": "integer" } } */
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
  pub include_defaults: bool,
  pub aliases: BTreeMap<String, ValueKind>,
}
impl Default for RegistryConfig {
  fn default() -> Self {
    RegistryConfig {
      include_defaults: true,
      aliases: BTreeMap::new(),
    }
  }
}
