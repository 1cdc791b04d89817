//! Flickr-alphabet base58 decoding function.

use crate::constants::ALPHABET_FLICKR;
use crate::create_from_base58;

/// Decodes a base58 string to bytes using the Flickr-style alphabet.
///
/// # Example
///
/// ```
/// use ipfs_kit_base58::from_base58_flickr;
///
/// let decoded = from_base58_flickr("2J").unwrap();
/// assert_eq!(decoded, [100]);
/// ```
pub fn from_base58_flickr(encoded: &str) -> Result<Vec<u8>, crate::Base58Error> {
    let decoder = create_from_base58(Some(ALPHABET_FLICKR))?;
    decoder(encoded)
}
