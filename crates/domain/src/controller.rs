//! The `RDE:` TXT convention.
//!
//! A controller is published as a TXT record under the reverse name whose
//! first character-string is `RDE:` followed directly by the controller
//! address text.

use std::fmt;
use std::str::FromStr;

use crate::bounded_name::{BoundedName, DEFAULT_NAME_CAPACITY};
use crate::errors::DomainError;

pub const RDE_TAG: &[u8; 4] = b"RDE:";

/// Controller address text (dotted-quad, IPv6 literal or hostname).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerAddress(BoundedName);

impl ControllerAddress {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "empty controller address".to_string(),
            ));
        }
        Ok(Self(BoundedName::try_from_str(value, DEFAULT_NAME_CAPACITY)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ControllerAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ControllerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Outcome of a controller lookup that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerLookup {
    Found(ControllerAddress),
    /// The prefix has no qualifying `RDE:` record.
    NotFound,
}

impl ControllerLookup {
    pub fn found(&self) -> Option<&ControllerAddress> {
        match self {
            ControllerLookup::Found(addr) => Some(addr),
            ControllerLookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ControllerLookup::Found(_))
    }
}

/// Reads a controller address out of a TXT record's character-strings.
///
/// Only the first string is inspected. Returns `Ok(None)` when it does not
/// carry the `RDE:` tag. On a match, `min(len, capacity) - 4` bytes after
/// the tag become the address.
pub fn extract_controller<T: AsRef<[u8]>>(
    character_strings: &[T],
    capacity: usize,
) -> Result<Option<ControllerAddress>, DomainError> {
    let Some(first) = character_strings.first() else {
        return Err(DomainError::InvalidTxtRecord(
            "TXT record has no character-strings".to_string(),
        ));
    };
    let content = first.as_ref();

    if !content.starts_with(RDE_TAG) {
        return Ok(None);
    }

    let usable = content.len().min(capacity).saturating_sub(RDE_TAG.len());
    let payload = &content[RDE_TAG.len()..RDE_TAG.len() + usable];

    let text = std::str::from_utf8(payload).map_err(|_| {
        DomainError::InvalidTxtRecord("controller address is not valid UTF-8".to_string())
    })?;

    let mut address = BoundedName::with_capacity(capacity);
    address.try_push_str(text)?;
    Ok(Some(ControllerAddress(address)))
}
