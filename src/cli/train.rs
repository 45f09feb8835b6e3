use crate::analysis::FrequencyModel;
use crate::cli::read_text;
use crate::error::Result;
use std::path::Path;

/// Train a frequency model from a sample text and persist it.
/// Reads the sample from `text_file` (stdin when `None`).
pub fn run_train(text_file: Option<&Path>, model_file: &Path) -> Result<()> {
    let sample = read_text(text_file)?;
    let model = FrequencyModel::train(&sample)?;
    model.save(model_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::error::TabulaError;
    use tempfile::tempdir;

    #[test]
    fn test_train_writes_a_loadable_model() {
        let dir = tempdir().unwrap();
        let sample = dir.path().join("sample.txt");
        let model = dir.path().join("english.model");

        std::fs::write(&sample, "the quick brown fox jumps over the lazy dog").unwrap();
        run_train(Some(&sample), &model).unwrap();

        let loaded = FrequencyModel::load(&model).unwrap();
        assert_eq!(loaded.bucket_count(), Alphabet::reference().len());
        let sum: f64 = loaded.values().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_train_rejects_empty_sample() {
        let dir = tempdir().unwrap();
        let sample = dir.path().join("empty.txt");
        let model = dir.path().join("english.model");

        std::fs::write(&sample, "").unwrap();
        let result = run_train(Some(&sample), &model);
        assert!(matches!(result, Err(TabulaError::EmptyText)));
        assert!(!model.exists());
    }
}
