use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
}

impl Error {
    pub fn new(message: &str, kind: ErrorKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
        }
    }
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    /// The offending code when the error came from a failed lookup.
    pub fn invalid_code(&self) -> Option<i32> {
        match self.kind {
            ErrorKind::InvalidStatusCode(code) => Some(code),
            #[cfg(feature = "json")]
            ErrorKind::Serialize => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}\nKind: {:?}", self.message, self.kind)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// No status is registered for the code. Retrying with the same code
    /// cannot succeed.
    InvalidStatusCode(i32),
    #[cfg(feature = "json")]
    Serialize,
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(
            &format!("could not serialize status catalog: {e}"),
            ErrorKind::Serialize,
        )
    }
}
