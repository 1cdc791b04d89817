//! Standard base58 encoding function.

use crate::constants::ALPHABET;
use crate::create_to_base58::encode_with;

/// Encodes bytes to a base58 string using the Bitcoin-style alphabet.
///
/// # Arguments
///
/// * `bytes` - The bytes to encode.
///
/// # Returns
///
/// The base58 representation of `bytes`.
///
/// # Example
///
/// ```
/// use ipfs_kit_base58::to_base58;
///
/// assert_eq!(to_base58(b"hello world"), "StV1DL6CwTryKyV");
/// ```
pub fn to_base58(bytes: &[u8]) -> String {
    encode_with(bytes, ALPHABET.as_bytes())
}
