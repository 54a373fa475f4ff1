use std::path::PathBuf;

/// Errors from board construction and mutation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NonBinaryCell { row: usize, col: usize, value: u8 },

    #[error("position ({row}, {col}) is outside a {n}x{n} board")]
    OutOfBounds { row: usize, col: usize, n: usize },
}

/// Errors from loading a board file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read board file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON board {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse TOML board {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unrecognized board file extension for {0} (expected .json or .toml)")]
    UnknownFormat(PathBuf),

    #[error("invalid board contents: {0}")]
    Board(#[from] BoardError),
}
