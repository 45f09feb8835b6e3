use crate::analysis::{recover_shift, FrequencyModel};
use crate::cipher::shift;
use crate::cli::{read_text, write_text};
use crate::error::Result;
use std::path::Path;

/// Recover the Caesar shift of `input` with a trained model and write the
/// decoded text. Reads `input` (stdin when `None`) and writes `output`
/// (stdout when `None`).
pub fn run_hack(input: Option<&Path>, output: Option<&Path>, model_file: &Path) -> Result<()> {
    let text = read_text(input)?;
    let model = FrequencyModel::load(model_file)?;
    let recovered = recover_shift(&text, &model)?;
    write_text(output, &shift::encode(&text, recovered as i64))
}
