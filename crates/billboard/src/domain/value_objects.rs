//! # Value Objects
//!
//! Immutable domain primitives for the billboard.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte account address identifying a calling principal.
///
/// The billboard never inspects internal structure beyond equality; the
/// invoking environment is responsible for authenticating it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// MESSAGE (32 bytes)
// =============================================================================

/// The billboard message: exactly 32 opaque bytes.
///
/// Equality is byte-exact. Short text values are packed the conventional
/// way for 32-byte slots: up to [`Message::MAX_TEXT_LEN`] bytes of UTF-8
/// followed by zero padding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Message(pub [u8; 32]);

impl Message {
    /// The zero message.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Maximum UTF-8 byte length a packed text may have.
    ///
    /// One byte of the slot is always left as zero padding so that
    /// unpacking can find the end of the text.
    pub const MAX_TEXT_LEN: usize = 31;

    /// Creates a message from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a message from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Packs a short text into a message slot.
    ///
    /// Returns None if the text exceeds [`Message::MAX_TEXT_LEN`] bytes of
    /// UTF-8. The text is never truncated.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let raw = text.as_bytes();
        if raw.len() > Self::MAX_TEXT_LEN {
            return None;
        }
        let mut bytes = [0u8; 32];
        bytes[..raw.len()].copy_from_slice(raw);
        Some(Self(bytes))
    }

    /// Unpacks the text content, trimming trailing zero padding.
    ///
    /// Non-UTF-8 content is replaced lossily; a message that was packed
    /// with [`Message::from_text`] always round-trips exactly.
    #[must_use]
    pub fn to_text(&self) -> String {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero message.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[28..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Message {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Message> for [u8; 32] {
    fn from(message: Message) -> Self {
        message.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
