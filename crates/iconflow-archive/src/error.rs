use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open container '{path}': {source}")]
    ArchiveOpen { path: PathBuf, source: io::Error },

    #[error("'{path}' is not a zip container")]
    NotAZip { path: PathBuf },

    #[error("container '{path}' is corrupted: {source}")]
    Corrupted {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("failed to read entry '{entry}': {source}")]
    EntryRead { entry: String, source: io::Error },

    #[error("no inner package found in '{path}'")]
    NoInnerArchive { path: PathBuf },

    #[error("split package holds {} inner packages, one must be chosen", .candidates.len())]
    InnerSelectionRequired { candidates: Vec<String> },

    #[error("'{name}' is not an inner package of this container")]
    UnknownInner { name: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Entry-level failures leave the container usable for further reads.
    pub fn is_entry_level(&self) -> bool {
        matches!(self, Self::EntryRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
