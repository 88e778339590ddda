mod registry;
#[cfg(feature = "serde")]
mod serde_impl;
mod symbol;
mod table;
#[cfg(test)]
mod tests;

use crate::http::error::ErrorKind;
use crate::http::{Error, Protocol, Result};
use std::fmt::{Debug, Display, Formatter};

pub use registry::{registry, Registry};
pub use symbol::SymbolText;

/// A known HTTP status.
///
/// Every value names one row of the fixed status table, so two statuses sharing a
/// numeric code (e.g. [`Status::UNORDERED_COLLECTION`] and [`Status::TOO_EARLY`]) are
/// still distinct. Use [`Status::resolve`] to go from a code received on the wire
/// to a `Status`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u16);

/// One row of the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    code: u16,
    reason: &'static str,
    symbol: &'static str,
    #[cfg_attr(feature = "serde", serde(skip))]
    status: Status,
}

impl Entry {
    pub(crate) const fn new(
        status: Status,
        code: u16,
        reason: &'static str,
        symbol: &'static str,
    ) -> Self {
        Self {
            code,
            reason,
            symbol,
            status,
        }
    }
    pub fn code(&self) -> u16 {
        self.code
    }
    pub fn reason(&self) -> &'static str {
        self.reason
    }
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }
    pub fn status(&self) -> Status {
        self.status
    }
}

impl Status {
    /// Looks up the status registered for `code`.
    ///
    /// When several statuses share a code the one declared first is returned.
    ///
    /// ```
    /// use status_registry::Status;
    ///
    /// assert_eq!(Status::resolve(404).unwrap(), Status::NOT_FOUND);
    /// assert!(Status::resolve(600).is_err());
    /// ```
    pub fn resolve(code: i32) -> Result<Self> {
        registry().resolve(code).map(Entry::status)
    }
    /// Every status in declaration order.
    pub fn all() -> impl Iterator<Item = Status> {
        registry().iter().map(Entry::status)
    }
    pub fn entry(self) -> &'static Entry {
        &table::ENTRIES[self.0 as usize]
    }
    pub fn code(self) -> u16 {
        self.entry().code
    }
    pub fn reason(self) -> &'static str {
        self.entry().reason
    }
    pub fn symbol(self) -> &'static str {
        self.entry().symbol
    }
    /// The symbol viewed as a sequence of characters.
    pub fn symbol_text(self) -> SymbolText {
        SymbolText::new(self.symbol())
    }
    pub fn class(self) -> Class {
        match Class::of(self.code()) {
            Some(class) => class,
            None => unreachable!("status table only holds codes in 100..=599"),
        }
    }
    pub fn is_informational(self) -> bool {
        self.class() == Class::Informational
    }
    pub fn is_success(self) -> bool {
        self.class() == Class::Success
    }
    pub fn is_redirection(self) -> bool {
        self.class() == Class::Redirection
    }
    pub fn is_client_error(self) -> bool {
        self.class() == Class::ClientError
    }
    pub fn is_server_error(self) -> bool {
        self.class() == Class::ServerError
    }
    pub fn is_error(self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
    /// Renders the status line sent at the start of a response, without the
    /// trailing CRLF.
    pub fn status_line(self, protocol: Protocol) -> String {
        format!("{protocol} {self}")
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl Debug for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status::{}({})", self.symbol(), self.code())
    }
}

impl TryFrom<i32> for Status {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::resolve(code)
    }
}

impl TryFrom<u16> for Status {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        Self::resolve(code.into())
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> u16 {
        status.code()
    }
}

/// The response class given by the first digit of a status code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Class {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl Class {
    /// Classifies a raw code, `None` outside `100..=599`.
    pub fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match &self {
            Self::Informational => "1xx Informational",
            Self::Success => "2xx Success",
            Self::Redirection => "3xx Redirection",
            Self::ClientError => "4xx Client Error",
            Self::ServerError => "5xx Server Error",
        };
        write!(f, "{c}")
    }
}

pub(crate) fn invalid_code(code: i32) -> Error {
    Error::new(
        &format!("Invalid HTTP status code: {code}"),
        ErrorKind::InvalidStatusCode(code),
    )
}
