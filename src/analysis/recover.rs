//! Brute-force Caesar shift recovery against a trained model.

use crate::analysis::frequency::{approximation_index, FrequencyDistribution};
use crate::analysis::model::FrequencyModel;
use crate::cipher::shift;
use crate::error::Result;

/// Try every candidate shift in the model's bucket range and return the one
/// whose re-encoded text most resembles the model's frequency profile.
///
/// Candidates are forward encodes, so the winner is the additive complement
/// of the key that produced the ciphertext; applying it forward decodes.
/// Ties keep the first candidate seen (strict less-than).
pub fn recover_shift(text: &str, model: &FrequencyModel) -> Result<usize> {
    let mut best_index = f64::INFINITY;
    let mut best_shift = 0usize;

    for candidate in 0..model.bucket_count() {
        let decoded = shift::encode(text, candidate as i64);
        let distribution = FrequencyDistribution::of(&decoded)?;
        let index = approximation_index(distribution.values(), model.values())?;
        if index < best_index {
            best_index = index;
            best_shift = candidate;
        }
    }

    Ok(best_shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabulaError;

    const SAMPLE: &str = "it was a bright cold day in april and the clocks were \
striking thirteen winston smith his chin nuzzled into his breast in an effort \
to escape the vile wind slipped quickly through the glass doors though not \
quickly enough to prevent a swirl of gritty dust from entering along with him";

    #[test]
    fn test_recovers_the_complement_of_the_applied_shift() {
        let model = FrequencyModel::train(SAMPLE).unwrap();
        for key in [1usize, 7, 13, 25] {
            let ciphertext = shift::encode(SAMPLE, key as i64);
            let recovered = recover_shift(&ciphertext, &model).unwrap();
            assert_eq!(recovered, 26 - key, "key {key}");
            assert_eq!(shift::encode(&ciphertext, recovered as i64), SAMPLE);
        }
    }

    #[test]
    fn test_unencoded_text_recovers_shift_zero() {
        let model = FrequencyModel::train(SAMPLE).unwrap();
        assert_eq!(recover_shift(SAMPLE, &model).unwrap(), 0);
    }

    #[test]
    fn test_ties_keep_the_first_candidate() {
        // For letter-only text, candidates 26 apart transform identically;
        // the smaller index must win.
        let model = FrequencyModel::train(SAMPLE).unwrap();
        let ciphertext = shift::encode(SAMPLE, 3);
        let recovered = recover_shift(&ciphertext, &model).unwrap();
        assert!(recovered < 26);
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let model = FrequencyModel::train(SAMPLE).unwrap();
        assert!(matches!(
            recover_shift("", &model),
            Err(TabulaError::EmptyText)
        ));
    }
}
