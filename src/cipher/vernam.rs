//! Vernam stream codec: XOR of text and repeating key, self-inverse.

use crate::cipher::key_stream;
use crate::error::{Result, TabulaError};

/// XOR the code points of two symbols and rebuild a character.
///
/// XOR of two valid scalars can land in the surrogate gap (only reachable
/// with non-ASCII operands); that is an error rather than a panic. No
/// printability is promised for the result.
pub fn combine(key_symbol: char, symbol: char) -> Result<char> {
    let combined = (key_symbol as u32) ^ (symbol as u32);
    char::from_u32(combined).ok_or(TabulaError::UnencodableSymbol(combined))
}

/// Encode by combining each text symbol with the repeating key stream.
pub fn encode(text: &str, keyword: &str) -> Result<String> {
    if keyword.is_empty() {
        return Err(TabulaError::InvalidKeyword("must not be empty".into()));
    }
    let stream = key_stream(keyword, text.chars().count());
    text.chars()
        .zip(stream)
        .map(|(symbol, key_symbol)| combine(key_symbol, symbol))
        .collect()
}

/// Decoding a Vernam stream is the same XOR with the same key.
pub fn decode(text: &str, keyword: &str) -> Result<String> {
    encode(text, keyword)
}
