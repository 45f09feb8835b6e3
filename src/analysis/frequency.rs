//! Symbol-frequency distributions and their L1 comparison index.

use crate::alphabet::{classify, Alphabet, SymbolClass};
use crate::error::{Result, TabulaError};

/// Per-symbol occurrence rates over the reference alphabet, normalized by
/// total text length.
///
/// Letters count case-insensitively into lowercase buckets; digits,
/// punctuation, and the space character count by exact symbol. Everything
/// else has no bucket but still counts toward the divisor, so the bucket
/// sum reaches 1.0 only for fully classified text.
#[derive(Debug, Clone)]
pub struct FrequencyDistribution {
    values: Vec<f64>,
}

impl FrequencyDistribution {
    /// Measure the distribution of `text`. Empty text is an error: the
    /// divisor would be zero.
    pub fn of(text: &str) -> Result<Self> {
        let reference = Alphabet::reference();
        let mut counts = vec![0u64; reference.len()];
        let mut length = 0u64;

        for symbol in text.chars() {
            length += 1;
            let bucket = match classify(symbol) {
                SymbolClass::Lower | SymbolClass::Digit | SymbolClass::Punctuation => Some(symbol),
                SymbolClass::Upper => Some(symbol.to_ascii_lowercase()),
                SymbolClass::Other => (symbol == ' ').then_some(' '),
            };
            if let Some(position) = bucket.and_then(|b| reference.index_of(b)) {
                counts[position] += 1;
            }
        }

        if length == 0 {
            return Err(TabulaError::EmptyText);
        }

        let values = counts
            .iter()
            .map(|&count| count as f64 / length as f64)
            .collect();
        Ok(Self { values })
    }

    /// Bucket values in reference-alphabet order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The rate of one reference symbol, or `None` outside the alphabet.
    pub fn rate(&self, symbol: char) -> Option<f64> {
        Alphabet::reference()
            .index_of(symbol)
            .map(|position| self.values[position])
    }
}

/// L1 distance between two distributions supplied in the same bucket order.
pub fn approximation_index(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(TabulaError::DistributionLength {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}
