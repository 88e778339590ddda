pub mod http;

pub use http::status::{Class, Entry, Registry, Status, SymbolText};
pub use http::{registry, Error, ErrorKind, Protocol, Result};
