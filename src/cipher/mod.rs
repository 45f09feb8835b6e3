pub mod shift;
pub mod vernam;
pub mod vigenere;

use crate::error::{Result, TabulaError};

/// Cipher scheme options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    Caesar,
    Vigenere,
    Vernam,
}

impl std::str::FromStr for Cipher {
    type Err = TabulaError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "vigenere" => Ok(Self::Vigenere),
            "vernam" => Ok(Self::Vernam),
            _ => Err(TabulaError::UnsupportedCipher(s.to_string())),
        }
    }
}

/// Encode `text` under the selected cipher.
/// The key is an integer shift for caesar and a keyword otherwise.
pub fn encode(cipher: Cipher, key: &str, text: &str) -> Result<String> {
    match cipher {
        Cipher::Caesar => Ok(shift::encode(text, parse_shift_key(key)?)),
        Cipher::Vigenere => vigenere::encode(text, key),
        Cipher::Vernam => vernam::encode(text, key),
    }
}

/// Decode `text` under the selected cipher with the same key that encoded it.
pub fn decode(cipher: Cipher, key: &str, text: &str) -> Result<String> {
    match cipher {
        Cipher::Caesar => Ok(shift::decode(text, parse_shift_key(key)?)),
        Cipher::Vigenere => vigenere::decode(text, key),
        Cipher::Vernam => vernam::decode(text, key),
    }
}

/// The keyword repeated and truncated to exactly `len` symbols.
pub(crate) fn key_stream(keyword: &str, len: usize) -> Vec<char> {
    keyword.chars().cycle().take(len).collect()
}

fn parse_shift_key(key: &str) -> Result<i64> {
    key.trim()
        .parse()
        .map_err(|_| TabulaError::InvalidShiftKey(key.to_string()))
}
