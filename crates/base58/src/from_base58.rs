//! Standard base58 decoding function.

use crate::create_from_base58;

/// Decodes a base58 string to bytes using the Bitcoin-style alphabet.
///
/// # Arguments
///
/// * `encoded` - The base58-encoded string to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if any character falls outside the
/// alphabet.
///
/// # Example
///
/// ```
/// use ipfs_kit_base58::from_base58;
///
/// let decoded = from_base58("StV1DL6CwTryKyV").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base58(encoded: &str) -> Result<Vec<u8>, crate::Base58Error> {
    let decoder = create_from_base58(None)?;
    decoder(encoded)
}
