use std::{io, path::PathBuf, result};

/// Error types for vlw2array.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("must vlw file.")]
    NotVlw { path: PathBuf },

    #[error("no file name in path: {}", path.display())]
    NoFileName { path: PathBuf },

    #[error("{0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
