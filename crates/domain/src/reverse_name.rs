//! Reverse-DNS name construction.
//!
//! Builds the `in-addr.arpa` / `ip6.arpa` name for an address string. The
//! family is picked by a positional heuristic on the first four characters:
//! a `.` at index 1, 2 or 3 means IPv4, anything else is parsed as IPv6.
//! Every IPv4 octet is 1-3 digits, so the first dot of a valid dotted-quad
//! always lands at one of those indexes.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::bounded_name::{BoundedName, DEFAULT_NAME_CAPACITY};
use crate::errors::DomainError;

const MIN_ADDRESS_LEN: usize = 4;
const IPV4_SUFFIX: &str = "in-addr.arpa";
const IPV6_SUFFIX: &str = "ip6.arpa";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Positional family heuristic. Callers must have checked the length.
    pub fn detect(address: &str) -> Self {
        let head = address.as_bytes();
        if head.get(1..4).is_some_and(|window| window.contains(&b'.')) {
            AddressFamily::V4
        } else {
            AddressFamily::V6
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// A reverse-DNS lookup name held in a bounded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseDnsName {
    name: BoundedName,
    family: AddressFamily,
}

impl ReverseDnsName {
    /// Builds the reverse name using the default name buffer capacity.
    pub fn from_address(address: &str) -> Result<Self, DomainError> {
        reverse(address, DEFAULT_NAME_CAPACITY)
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for ReverseDnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())
    }
}

impl AsRef<str> for ReverseDnsName {
    fn as_ref(&self) -> &str {
        self.name.as_str()
    }
}

/// Computes the reverse-DNS name of `address` into a buffer holding at most
/// `capacity` bytes.
///
/// Fails with [`DomainError::AddressTooShort`] for inputs under four bytes,
/// [`DomainError::InvalidIpAddress`] when the text does not parse in the
/// detected family and [`DomainError::CapacityExceeded`] when the name does
/// not fit. No partial name is ever returned.
pub fn reverse(address: &str, capacity: usize) -> Result<ReverseDnsName, DomainError> {
    if address.len() < MIN_ADDRESS_LEN {
        return Err(DomainError::AddressTooShort(address.to_string()));
    }

    let family = AddressFamily::detect(address);
    let mut name = BoundedName::with_capacity(capacity);

    match family {
        AddressFamily::V4 => {
            let ip = Ipv4Addr::from_str(address)
                .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?;
            write_ipv4(&mut name, &ip)?;
        }
        AddressFamily::V6 => {
            let ip = Ipv6Addr::from_str(address)
                .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?;
            write_ipv6(&mut name, &ip)?;
        }
    }

    Ok(ReverseDnsName { name, family })
}

fn write_ipv4(name: &mut BoundedName, ip: &Ipv4Addr) -> Result<(), DomainError> {
    let [o1, o2, o3, o4] = ip.octets();
    name.try_push_fmt(format_args!("{o4}.{o3}.{o2}.{o1}.{IPV4_SUFFIX}"))
}

fn write_ipv6(name: &mut BoundedName, ip: &Ipv6Addr) -> Result<(), DomainError> {
    // 16 bytes, last first; low nibble before high nibble.
    for byte in ip.octets().iter().rev() {
        name.try_push(HEX_DIGITS[(byte & 0x0f) as usize] as char)?;
        name.try_push('.')?;
        name.try_push(HEX_DIGITS[(byte >> 4) as usize] as char)?;
        name.try_push('.')?;
    }
    name.try_push_str(IPV6_SUFFIX)
}
