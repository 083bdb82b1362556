use std::fs::File;
use std::io::{self, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::detect::{PACKAGE_EXTENSION, detect_from_reader};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::split::resolve_inner;

/// An opened zip container.
///
/// The container owns its reader; the underlying handle is released when the
/// container is dropped.
pub struct Container<R: Read + Seek> {
    archive: ZipArchive<R>,
    origin: PathBuf,
}

impl Container<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::ArchiveOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(file, path)
    }
}

impl Container<Cursor<Vec<u8>>> {
    pub fn from_bytes(bytes: Vec<u8>, origin: impl Into<PathBuf>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes), origin)
    }
}

impl<R: Read + Seek> Container<R> {
    /// Opens a container over any seekable reader.
    ///
    /// `origin` only labels the container in errors and logs.
    pub fn from_reader(mut reader: R, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();

        let format = detect_from_reader(&mut reader).map_err(|e| Error::ArchiveOpen {
            path: origin.clone(),
            source: e,
        })?;
        if format.is_none() {
            return Err(Error::NotAZip { path: origin });
        }

        let archive = ZipArchive::new(reader).map_err(|e| Error::Corrupted {
            path: origin.clone(),
            source: e,
        })?;
        debug!(container = %origin.display(), records = archive.len(), "opened container");

        Ok(Self { archive, origin })
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Number of records in the central directory, directories included.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// File entries in central-directory order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        (0..self.archive.len()).filter_map(|index| {
            let name = self.archive.name_for_index(index)?;
            let entry = Entry::new(index, name);
            (!entry.is_directory()).then_some(entry)
        })
    }

    pub fn read_bytes(&mut self, entry: &Entry) -> Result<Vec<u8>> {
        let read_error = |source: io::Error| Error::EntryRead {
            entry: entry.path.clone(),
            source,
        };

        let mut file = self
            .archive
            .by_index(entry.index)
            .map_err(|e| read_error(io::Error::other(e)))?;

        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(read_error)?;
        Ok(content)
    }

    /// Paths of the packages nested in this container.
    pub fn inner_containers(&self) -> Vec<String> {
        self.entries()
            .filter(|entry| entry.extension().as_deref() == Some(PACKAGE_EXTENSION))
            .map(|entry| entry.path)
            .collect()
    }

    /// Reads a nested package fully into memory.
    pub fn extract_inner(&mut self, inner_path: &str) -> Result<Vec<u8>> {
        let entry = self
            .entries()
            .find(|entry| {
                entry.path == inner_path
                    && entry.extension().as_deref() == Some(PACKAGE_EXTENSION)
            })
            .ok_or_else(|| Error::UnknownInner {
                name: inner_path.to_string(),
            })?;

        let bytes = self.read_bytes(&entry)?;
        debug!(inner = inner_path, bytes = bytes.len(), "materialized inner package");
        Ok(bytes)
    }

    pub fn open_inner(&mut self, inner_path: &str) -> Result<Container<Cursor<Vec<u8>>>> {
        let bytes = self.extract_inner(inner_path)?;
        Container::from_bytes(bytes, self.origin.join(inner_path))
    }

    /// Chooses and opens the inner package of a split bundle.
    ///
    /// See [`resolve_inner`] for how `choice` is applied.
    pub fn resolve_inner(&mut self, choice: Option<&str>) -> Result<Container<Cursor<Vec<u8>>>> {
        let chosen = resolve_inner(&self.origin, self.inner_containers(), choice)?;
        self.open_inner(&chosen)
    }
}
