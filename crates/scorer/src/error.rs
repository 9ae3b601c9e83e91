use std::path::PathBuf;

use thiserror::Error;

use crate::types::Category;

pub type Result<T> = std::result::Result<T, ScorerError>;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Failed to read keyword table {path}: {source}")]
    KeywordTableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid keyword table: {0}")]
    KeywordTableParse(#[from] toml::de::Error),

    #[error("Keyword set `{0}` is empty")]
    EmptyKeywordSet(Category),

    #[error("Keyword set `{0}` contains a blank keyword")]
    BlankKeyword(Category),

    #[error("Unknown track `{0}` (expected BSCS, BSIT or BSCPE)")]
    UnknownTrack(String),
}
