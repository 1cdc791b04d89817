//! Factory function for creating base58 decoders with custom alphabets.

use crate::constants::ALPHABET;
use crate::{validate_alphabet, Base58Error};

/// Creates a base58 decoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 58-character string giving the alphabet, most significant
///   symbol first. Defaults to the Bitcoin-style alphabet.
///
/// # Returns
///
/// A function that decodes a base58 `&str` to bytes. Decoding is
/// all-or-nothing: any character outside the alphabet fails the whole call.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 58 distinct ASCII characters.
///
/// # Example
///
/// ```
/// use ipfs_kit_base58::create_from_base58;
///
/// let decode = create_from_base58(None).unwrap();
/// assert_eq!(decode("StV1DL6CwTryKyV").unwrap(), b"hello world");
/// ```
pub fn create_from_base58(
    chars: Option<&str>,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base58Error>, Base58Error> {
    let alphabet = validate_alphabet(chars.unwrap_or(ALPHABET))?;

    // Reverse lookup table over the ASCII range, built once per decoder.
    let mut lookup = [-1i16; 128];
    for (digit, &symbol) in alphabet.iter().enumerate() {
        lookup[symbol as usize] = digit as i16;
    }
    let zero_symbol = alphabet[0] as char;

    Ok(move |encoded: &str| -> Result<Vec<u8>, Base58Error> {
        decode_with(encoded, &lookup, zero_symbol)
    })
}

/// Decodes `encoded` against a prebuilt reverse lookup table.
///
/// Accumulates `value = value*58 + digit` into a little-endian byte buffer,
/// which keeps the arithmetic unbounded for hashes of any length. Leading
/// `zero_symbol` characters contribute nothing to the integer, so they are
/// counted separately and restored as leading zero bytes.
pub(crate) fn decode_with(
    encoded: &str,
    lookup: &[i16; 128],
    zero_symbol: char,
) -> Result<Vec<u8>, Base58Error> {
    let zeros = encoded.chars().take_while(|&c| c == zero_symbol).count();

    // Little-endian magnitude; ceil(log(58) / log(256)) bytes per symbol.
    let mut magnitude: Vec<u8> = Vec::with_capacity(encoded.len() * 733 / 1000 + 1);
    for ch in encoded.chars() {
        if !ch.is_ascii() {
            return Err(Base58Error::InvalidCharacter(ch));
        }
        let digit = lookup[ch as usize];
        if digit < 0 {
            return Err(Base58Error::InvalidCharacter(ch));
        }
        let mut carry = digit as u32;
        for byte in magnitude.iter_mut() {
            carry += *byte as u32 * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            magnitude.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(magnitude.iter().rev());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_to_base58;

    #[test]
    fn decodes_leading_zero_symbols_as_zero_bytes() {
        let decode = create_from_base58(None).unwrap();
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("1111").unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(decode("1112").unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        let decode = create_from_base58(None).unwrap();
        assert_eq!(decode("x0y"), Err(Base58Error::InvalidCharacter('0')));
        assert_eq!(decode("abOc"), Err(Base58Error::InvalidCharacter('O')));
        assert_eq!(decode("é"), Err(Base58Error::InvalidCharacter('é')));
    }

    #[test]
    fn inverts_the_encoder() {
        let encode = create_to_base58(None).unwrap();
        let decode = create_from_base58(None).unwrap();
        let bytes = [0u8, 0, 40, 127, 180, 205];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }
}
