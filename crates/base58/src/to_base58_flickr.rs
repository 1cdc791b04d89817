//! Flickr-alphabet base58 encoding function.

use crate::constants::ALPHABET_FLICKR;
use crate::create_to_base58::encode_with;

/// Encodes bytes to a base58 string using the Flickr-style alphabet.
///
/// The Flickr alphabet orders lowercase before uppercase, so output differs
/// from [`to_base58`](crate::to_base58) for any digit value of 9 or above.
///
/// # Example
///
/// ```
/// use ipfs_kit_base58::to_base58_flickr;
///
/// assert_eq!(to_base58_flickr(&[100]), "2J");
/// ```
pub fn to_base58_flickr(bytes: &[u8]) -> String {
    encode_with(bytes, ALPHABET_FLICKR.as_bytes())
}
