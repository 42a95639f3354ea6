//! The final SHA-1 digest and its byte and hex encodings.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a SHA-1 digest as a hexadecimal string.
pub const DIGEST_HEX_LEN: usize = 40;

/// Lowercase hexadecimal alphabet.
const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// A 160-bit SHA-1 digest.
///
/// Holds the five state words `a..e` left after the last block. The byte
/// form is each word big-endian, in order; the hex form is the lowercase
/// encoding of those bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest {
    words: [u32; 5],
}

impl Digest {
    /// Wrap final state words.
    #[must_use]
    pub const fn from_words(words: [u32; 5]) -> Self {
        Self { words }
    }

    /// Create a digest from its 20-byte big-endian form.
    #[must_use]
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        let mut words = [0u32; 5];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    /// Parse a 40-character hexadecimal string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use sha1lite::Digest;
    ///
    /// let digest = Digest::from_hex("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709").unwrap();
    /// assert_eq!(digest, sha1lite::hash(b"").unwrap());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidHex(hex.to_string());
        if hex.len() != DIGEST_HEX_LEN {
            return Err(invalid());
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let high = hex_digit_to_value(pair[0]).ok_or_else(invalid)?;
            let low = hex_digit_to_value(pair[1]).ok_or_else(invalid)?;
            *byte = (high << 4) | low;
        }
        Ok(Self::from_bytes(bytes))
    }

    /// The raw state words `[a, b, c, d, e]`.
    #[must_use]
    pub const fn words(&self) -> [u32; 5] {
        self.words
    }

    /// The 20-byte digest: each word big-endian, in order `a..e`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut bytes = [0u8; DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// The 40-character lowercase hex form of [`Digest::to_bytes`].
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(DIGEST_HEX_LEN);
        for byte in self.to_bytes() {
            hex.push(char::from(HEX_CHARS[usize::from(byte >> 4)]));
            hex.push(char::from(HEX_CHARS[usize::from(byte & 0x0f)]));
        }
        hex
    }
}

/// Converts a hexadecimal ASCII character to its numeric value.
fn hex_digit_to_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex().to_ascii_uppercase())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    const EMPTY_WORDS: [u32; 5] = [0xda39a3ee, 0x5e6b4b0d, 0x3255bfef, 0x95601890, 0xafd80709];

    const EMPTY_BYTES: [u8; 20] = [
        0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60, 0x18,
        0x90, 0xaf, 0xd8, 0x07, 0x09,
    ];

    #[test]
    fn test_to_bytes_is_big_endian() {
        let digest = Digest::from_words(EMPTY_WORDS);
        assert_eq!(digest.to_bytes(), EMPTY_BYTES);
    }

    #[test]
    fn test_to_hex() {
        let digest = Digest::from_words(EMPTY_WORDS);
        assert_eq!(digest.to_hex(), EMPTY_SHA1);
        assert_eq!(digest.to_hex().len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn test_hex_keeps_leading_zeros() {
        let digest = Digest::from_words([0, 1, 0x0f, 0x00ab_0000, u32::MAX]);
        assert_eq!(
            digest.to_hex(),
            "00000000000000010000000f00ab0000ffffffff"
        );
    }

    #[test]
    fn test_from_bytes() {
        let digest = Digest::from_bytes(EMPTY_BYTES);
        assert_eq!(digest.words(), EMPTY_WORDS);
        assert_eq!(Digest::from(EMPTY_BYTES), digest);
        assert_eq!(<[u8; 20]>::from(digest), EMPTY_BYTES);
    }

    #[test]
    fn test_from_hex_case_insensitive() {
        let lower = Digest::from_hex(EMPTY_SHA1).unwrap();
        let upper = Digest::from_hex(&EMPTY_SHA1.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper.to_hex(), EMPTY_SHA1);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        for bad in [
            "",
            "da39a3ee5e6b4b0d3255bfef95601890afd8070",
            "da39a3ee5e6b4b0d3255bfef95601890afd807090",
            "ga39a3ee5e6b4b0d3255bfef95601890afd80709",
            "da39a3ee5e6b4b0d3255bfef95601890afd8070 ",
            "0xda39a3ee5e6b4b0d3255bfef95601890afd807",
        ] {
            assert_eq!(
                Digest::from_hex(bad),
                Err(Error::InvalidHex(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_from_hex_rejects_multibyte_chars() {
        // 40 bytes long but not ASCII.
        let s = format!("{}é", &EMPTY_SHA1[..38]);
        assert_eq!(s.len(), 40);
        assert!(Digest::from_hex(&s).is_err());
    }

    #[test]
    fn test_formatting() {
        let digest = Digest::from_words(EMPTY_WORDS);
        assert_eq!(format!("{digest}"), EMPTY_SHA1);
        assert_eq!(format!("{digest:x}"), EMPTY_SHA1);
        assert_eq!(format!("{digest:X}"), EMPTY_SHA1.to_uppercase());
        assert_eq!(format!("{digest:?}"), format!("Digest({EMPTY_SHA1})"));
    }

    #[test]
    fn test_from_str() {
        let digest: Digest = EMPTY_SHA1.parse().unwrap();
        assert_eq!(digest.words(), EMPTY_WORDS);
        assert!("invalid".parse::<Digest>().is_err());
    }

    #[test]
    fn test_traits() {
        use std::collections::HashSet;

        let a = Digest::from_words(EMPTY_WORDS);
        let zero = Digest::from_words([0; 5]);
        assert!(zero < a);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&Digest::from_bytes(EMPTY_BYTES)));
    }
}
