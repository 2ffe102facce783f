use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;

use crate::bounded_name::{BoundedName, DEFAULT_NAME_CAPACITY};
use crate::errors::DomainError;

/// An address with an optional CIDR length, as typed by the operator.
///
/// Only the address part is used for resolution. The length is carried as
/// written and never checked against the address family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    raw: CompactString,
    address: BoundedName,
    length: Option<CompactString>,
}

impl Prefix {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (address, length) = match raw.split_once('/') {
            Some((address, length)) => (address, Some(CompactString::from(length))),
            None => (raw, None),
        };

        Ok(Self {
            raw: CompactString::from(raw),
            address: BoundedName::try_from_str(address, DEFAULT_NAME_CAPACITY)?,
            length,
        })
    }

    /// The address part with any `/<length>` suffix stripped.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn length(&self) -> Option<&str> {
        self.length.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Prefix {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
