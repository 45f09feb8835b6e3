use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabulaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text is empty: frequency analysis needs at least one symbol")]
    EmptyText,

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("Invalid caesar key {0:?}: expected an integer shift")]
    InvalidShiftKey(String),

    #[error("Invalid keyword: {0}")]
    InvalidKeyword(String),

    #[error("Distribution length mismatch: expected {expected} buckets, found {found}")]
    DistributionLength { expected: usize, found: usize },

    #[error("Combined symbol U+{0:04X} is not a representable character")]
    UnencodableSymbol(u32),

    #[error("Malformed model: {0}")]
    MalformedModel(String),

    #[error("Model has {found} buckets but the reference alphabet has {expected}")]
    ModelLength { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, TabulaError>;
