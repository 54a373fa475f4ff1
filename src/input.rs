//! Board-file loading for the validator binary.
//!
//! Two host-boundary formats, both funneled through [`Board::from_rows`] so
//! file input obeys the same shape and value rules as API input: a `.json`
//! file holds the bare matrix (`[[0,1],[1,0]]`), a `.toml` file holds a table
//! with a `rows` key.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::board::Board;
use crate::error::InputError;

/// TOML board file: the matrix under a `rows` key.
#[derive(Debug, Deserialize)]
struct TomlBoardFile {
    rows: Vec<Vec<u8>>,
}

/// Load a board from `path`, picking the format by file extension.
pub fn load_board(path: &Path) -> Result<Board, InputError> {
    let values = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let content = read_file(path)?;
            serde_json::from_str(&content).map_err(|e| InputError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        Some("toml") => {
            let content = read_file(path)?;
            let file: TomlBoardFile =
                toml::from_str(&content).map_err(|e| InputError::TomlParse {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            file.rows
        }
        _ => return Err(InputError::UnknownFormat(path.to_path_buf())),
    };

    let board = Board::from_rows(values)?;
    debug!(
        path = %path.display(),
        n = board.size(),
        pieces = board.piece_count(),
        "board loaded"
    );
    Ok(board)
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
