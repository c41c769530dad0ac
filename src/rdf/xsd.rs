//! Datatype IRIs from the XML Schema namespace.

pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

pub const HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
