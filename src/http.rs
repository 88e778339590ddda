use std::fmt::{Display, Formatter};

#[cfg(feature = "json")]
pub mod catalog;
pub mod error;
pub mod status;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, ErrorKind};
pub use status::{registry, Class, Entry, Registry, Status, SymbolText};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Eq, PartialEq, Copy)]
pub enum Protocol {
    HTTP1,
    #[cfg(feature = "http2")]
    HTTP2,
}

impl Default for Protocol {
    #[cfg(feature = "http2")]
    fn default() -> Self {
        Self::HTTP2
    }
    #[cfg(not(feature = "http2"))]
    fn default() -> Self {
        Self::HTTP1
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let p = match &self {
            Self::HTTP1 => "HTTP/1.1",
            #[cfg(feature = "http2")]
            Self::HTTP2 => "HTTP/2",
        };
        write!(f, "{p}")
    }
}
