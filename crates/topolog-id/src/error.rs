/// Errors produced by commit id parsing.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },
}
