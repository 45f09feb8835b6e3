use crate::cipher::{self, Cipher};
use crate::cli::{read_text, write_text};
use crate::error::Result;
use std::path::Path;

/// Options for the encode command
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub cipher: Cipher,
    /// Integer shift for caesar, keyword for vigenere/vernam.
    pub key: String,
}

/// Encode text under the selected cipher.
/// Reads `input` (stdin when `None`) and writes `output` (stdout when `None`).
pub fn run_encode(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &EncodeOptions,
) -> Result<()> {
    let text = read_text(input)?;
    let encoded = cipher::encode(options.cipher, &options.key, &text)?;
    write_text(output, &encoded)
}
