use crate::cipher::{self, Cipher};
use crate::cli::{read_text, write_text};
use crate::error::Result;
use std::path::Path;

/// Options for the decode command
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub cipher: Cipher,
    /// The same key that encoded the text.
    pub key: String,
}

/// Decode text under the selected cipher.
/// Reads `input` (stdin when `None`) and writes `output` (stdout when `None`).
pub fn run_decode(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &DecodeOptions,
) -> Result<()> {
    let text = read_text(input)?;
    let decoded = cipher::decode(options.cipher, &options.key, &text)?;
    write_text(output, &decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encode::{run_encode, EncodeOptions};
    use tempfile::tempdir;

    #[test]
    fn test_encode_then_decode_round_trips_files() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let encoded = dir.path().join("cipher.txt");
        let decoded = dir.path().join("decoded.txt");

        let text = "Attack at dawn! Bring 12 shields.";
        std::fs::write(&plain, text).unwrap();

        for (cipher, key) in [
            (Cipher::Caesar, "19"),
            (Cipher::Vigenere, "lemon"),
            (Cipher::Vernam, "lemon"),
        ] {
            let encode_options = EncodeOptions {
                cipher,
                key: key.into(),
            };
            run_encode(Some(&plain), Some(&encoded), &encode_options).unwrap();
            assert_ne!(std::fs::read_to_string(&encoded).unwrap(), text);

            let decode_options = DecodeOptions {
                cipher,
                key: key.into(),
            };
            run_decode(Some(&encoded), Some(&decoded), &decode_options).unwrap();
            assert_eq!(std::fs::read_to_string(&decoded).unwrap(), text);
        }
    }
}
