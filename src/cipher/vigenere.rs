//! Vigenere polyalphabetic codec.
//!
//! The substitution table keeps one shift row per key symbol of the combined
//! alphabet; a key symbol's row shifts every plaintext class by the key
//! symbol's combined index. Class sizes normalize the shift, so `b` and `B`
//! act identically on letters while the table is built only once.

use crate::alphabet::Alphabet;
use crate::cipher::shift::ClassTables;
use crate::error::{Result, TabulaError};

/// One shift row per key symbol of the combined alphabet.
#[derive(Debug)]
pub struct SubstitutionTable {
    rows: Vec<ClassTables>,
}

impl SubstitutionTable {
    /// Build the forward table over the combined alphabet.
    pub fn build() -> Self {
        let combined = Alphabet::combined();
        Self {
            rows: (0..combined.len())
                .map(|key_index| ClassTables::build(key_index as i64))
                .collect(),
        }
    }

    /// Build the decoding table, row-wise inverse of [`SubstitutionTable::build`].
    pub fn build_reverse() -> Self {
        let combined = Alphabet::combined();
        Self {
            rows: (0..combined.len())
                .map(|key_index| ClassTables::build_reverse(key_index as i64))
                .collect(),
        }
    }

    /// Substitute `symbol` through the row selected by the key symbol's
    /// combined-alphabet index. Unrecognized symbols pass through.
    pub fn substitute(&self, key_index: usize, symbol: char) -> char {
        self.rows[key_index % self.rows.len()].substitute(symbol)
    }
}

fn keyword_indices(keyword: &str, combined: &Alphabet) -> Result<Vec<usize>> {
    if keyword.is_empty() {
        return Err(TabulaError::InvalidKeyword("must not be empty".into()));
    }
    keyword
        .chars()
        .map(|symbol| {
            combined.index_of(symbol).ok_or_else(|| {
                TabulaError::InvalidKeyword(format!(
                    "symbol {symbol:?} is outside the cipher alphabet"
                ))
            })
        })
        .collect()
}

/// Encode with a repeating keyword; the key stream spans every text
/// position, including pass-through symbols.
pub fn encode(text: &str, keyword: &str) -> Result<String> {
    let key_indices = keyword_indices(keyword, &Alphabet::combined())?;
    let table = SubstitutionTable::build();
    Ok(text
        .chars()
        .zip(key_indices.iter().cycle())
        .map(|(symbol, &key_index)| table.substitute(key_index, symbol))
        .collect())
}

/// Decode with the same keyword, through the reverse table.
pub fn decode(text: &str, keyword: &str) -> Result<String> {
    let key_indices = keyword_indices(keyword, &Alphabet::combined())?;
    let table = SubstitutionTable::build_reverse();
    Ok(text
        .chars()
        .zip(key_indices.iter().cycle())
        .map(|(symbol, &key_index)| table.substitute(key_index, symbol))
        .collect())
}
