use std::io;
use std::path::PathBuf;

use iconflow_archive::Error as ArchiveError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("output directory '{path}' is not usable: {source}")]
    OutputDir { path: PathBuf, source: io::Error },

    #[error("selection index {index} is out of range for {len} previews")]
    SelectionOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Names the stage of a run that failed, for user-facing reports.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Archive(e) => match e {
                ArchiveError::NoInnerArchive { .. }
                | ArchiveError::InnerSelectionRequired { .. }
                | ArchiveError::UnknownInner { .. } => "resolve inner package",
                ArchiveError::EntryRead { .. } => "read entry",
                _ => "open package",
            },
            Self::OutputDir { .. } => "prepare output directory",
            Self::SelectionOutOfRange { .. } => "apply selection",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
