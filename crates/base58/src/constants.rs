/// Bitcoin-style base58 alphabet (the default).
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Flickr-style base58 alphabet (lowercase before uppercase).
pub const ALPHABET_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
