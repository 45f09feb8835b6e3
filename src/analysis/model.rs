//! Trained frequency models and their on-disk format.
//!
//! A model is the flattened frequency distribution of a reference corpus:
//! one line of space-separated floats, one per bucket, in reference-alphabet
//! order, with a trailing space after the last value.

use crate::alphabet::Alphabet;
use crate::analysis::frequency::FrequencyDistribution;
use crate::error::{Result, TabulaError};
use std::path::Path;

/// A persisted frequency distribution of a reference language sample.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    values: Vec<f64>,
}

impl FrequencyModel {
    /// Train a model from a sample text.
    pub fn train(sample: &str) -> Result<Self> {
        let distribution = FrequencyDistribution::of(sample)?;
        Ok(Self {
            values: distribution.values().to_vec(),
        })
    }

    /// Bucket values in reference-alphabet order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of buckets; also the candidate range of shift recovery.
    pub fn bucket_count(&self) -> usize {
        self.values.len()
    }

    /// Write the model file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut line = String::new();
        for value in &self.values {
            line.push_str(&value.to_string());
            line.push(' ');
        }
        line.push('\n');
        std::fs::write(path, line)?;
        Ok(())
    }

    /// Read a model file back, rejecting anything that does not parse as
    /// floats or whose bucket count disagrees with the reference alphabet.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let values: Vec<f64> = contents
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| TabulaError::MalformedModel(format!("{token:?} is not a number")))
            })
            .collect::<Result<_>>()?;

        let expected = Alphabet::reference().len();
        if values.len() != expected {
            return Err(TabulaError::ModelLength {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { values })
    }
}
