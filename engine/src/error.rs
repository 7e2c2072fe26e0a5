use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// IDF is undefined over zero units.
    #[error("cannot compute IDF over an empty unit set")]
    EmptyUnitSet,

    #[error("corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list corpus directory: {0}")]
    Walk(#[from] walkdir::Error),
}
