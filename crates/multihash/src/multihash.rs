use std::fmt;

use ipfs_kit_base58::{from_base58, to_base58, Base58Error};

/// The raw binary identity of a piece of content.
///
/// Byte equality is content identity. A `Multihash` is produced either by an
/// external hashing step or by decoding a base58 string; it is never
/// re-hashed here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash(Vec<u8>);

impl Multihash {
    /// Wraps raw multihash bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Multihash(bytes)
    }

    /// Decodes a base58 string (Bitcoin-style alphabet) into a multihash.
    pub fn from_base58(encoded: &str) -> Result<Self, Base58Error> {
        Ok(Multihash(from_base58(encoded)?))
    }

    /// Encodes the multihash as a base58 string (Bitcoin-style alphabet).
    pub fn to_base58(&self) -> String {
        to_base58(&self.0)
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the multihash, returning the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Truncated base58 form for display (first 8 characters).
    pub fn short(&self) -> String {
        let full = self.to_base58();
        full.chars().take(8).collect()
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multihash({}...)", self.short())
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl From<Vec<u8>> for Multihash {
    fn from(bytes: Vec<u8>) -> Self {
        Multihash(bytes)
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
