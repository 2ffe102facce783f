use compact_str::CompactString;
use std::fmt;

use crate::errors::DomainError;

/// Shared buffer size for names and addresses, terminator included.
pub const NAME_BUFFER_SIZE: usize = 128;

/// Usable bytes in a [`NAME_BUFFER_SIZE`] buffer.
pub const DEFAULT_NAME_CAPACITY: usize = NAME_BUFFER_SIZE - 1;

/// A string that never grows past a fixed byte capacity.
///
/// A write that would overflow clears the whole buffer and fails, so a
/// holder is either complete or empty, never partially written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedName {
    buf: CompactString,
    capacity: usize,
}

impl BoundedName {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: CompactString::with_capacity(capacity),
            capacity,
        }
    }

    pub fn try_from_str(value: &str, capacity: usize) -> Result<Self, DomainError> {
        let mut name = Self::with_capacity(capacity);
        name.try_push_str(value)?;
        Ok(name)
    }

    pub fn try_push_str(&mut self, value: &str) -> Result<(), DomainError> {
        let needed = self.buf.len() + value.len();
        if needed > self.capacity {
            self.buf.clear();
            return Err(DomainError::CapacityExceeded {
                needed,
                capacity: self.capacity,
            });
        }
        self.buf.push_str(value);
        Ok(())
    }

    pub fn try_push(&mut self, ch: char) -> Result<(), DomainError> {
        let mut tmp = [0u8; 4];
        self.try_push_str(ch.encode_utf8(&mut tmp))
    }

    /// Formats `args` into the buffer under the same overflow rule as
    /// [`BoundedName::try_push_str`].
    pub fn try_push_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), DomainError> {
        let rendered = fmt::format(args);
        self.try_push_str(&rendered)
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl fmt::Display for BoundedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl AsRef<str> for BoundedName {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}
