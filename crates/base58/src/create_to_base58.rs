//! Factory function for creating base58 encoders with custom alphabets.

use crate::constants::ALPHABET;
use crate::{validate_alphabet, Base58Error};

/// Creates a base58 encoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 58-character string giving the alphabet, most significant
///   symbol first. Defaults to the Bitcoin-style alphabet.
///
/// # Returns
///
/// A function that encodes a `&[u8]` to a base58 `String`.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 58 distinct ASCII characters.
///
/// # Example
///
/// ```
/// use ipfs_kit_base58::create_to_base58;
///
/// let encode = create_to_base58(None).unwrap();
/// assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
/// ```
pub fn create_to_base58(chars: Option<&str>) -> Result<impl Fn(&[u8]) -> String, Base58Error> {
    let alphabet: Vec<u8> = validate_alphabet(chars.unwrap_or(ALPHABET))?.to_vec();
    Ok(move |bytes: &[u8]| -> String { encode_with(bytes, &alphabet) })
}

/// Encodes `bytes` against an already-validated alphabet.
///
/// The input is treated as an unbounded big-endian integer held in a byte
/// buffer; each round of the outer loop divides the whole buffer by 58 and
/// emits the remainder as the next least-significant digit. Leading zero
/// bytes are stripped up front and re-emitted as `alphabet[0]` symbols, since
/// they vanish from the integer interpretation.
pub(crate) fn encode_with(bytes: &[u8], alphabet: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Big-endian base-256 magnitude, leading zeros removed.
    let mut magnitude = bytes[zeros..].to_vec();

    // ceil(log(256) / log(58)) digits per input byte.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    while !magnitude.is_empty() {
        let mut quotient: Vec<u8> = Vec::with_capacity(magnitude.len());
        let mut remainder: u32 = 0;
        for &byte in &magnitude {
            let accumulator = (remainder << 8) | byte as u32;
            let q = accumulator / 58;
            remainder = accumulator % 58;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }
        digits.push(remainder as u8);
        magnitude = quotient;
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push(alphabet[0] as char);
    }
    for &digit in digits.iter().rev() {
        out.push(alphabet[digit as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALPHABET_FLICKR;

    #[test]
    fn encodes_leading_zeros_as_zero_symbols() {
        let encode = create_to_base58(None).unwrap();
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[0, 0, 0, 0]), "1111");
        assert_eq!(encode(&[0, 0, 1]), "112");
        assert_eq!(encode(&[0, 0, 0, 1]), "1112");
    }

    #[test]
    fn encodes_with_alternate_alphabet() {
        let encode = create_to_base58(Some(ALPHABET_FLICKR)).unwrap();
        assert_eq!(encode(&[100]), "2J");
        assert_eq!(encode(&[0, 100]), "12J");
    }

    #[test]
    fn rejects_invalid_alphabets() {
        assert!(matches!(
            create_to_base58(Some("abc")),
            Err(Base58Error::InvalidCharSetLength)
        ));
    }
}
