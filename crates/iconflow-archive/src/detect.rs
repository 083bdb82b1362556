use std::io::{self, Read, Seek};
use std::path::Path;

/// Extension of a single Android package.
pub const PACKAGE_EXTENSION: &str = "apk";

/// Extensions of split-package bundles that carry inner packages.
pub const SPLIT_EXTENSIONS: &[&str] = &["xapk", "apks", "apkm"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerFormat {
    /// Starts with a local file header.
    Zip,
    /// An archive holding nothing but its end-of-central-directory record.
    EmptyZip,
    /// First segment of a spanned archive.
    SpannedZip,
}

pub fn detect_format(data: &[u8]) -> Option<ContainerFormat> {
    match data {
        [0x50, 0x4B, 0x03, 0x04, ..] => Some(ContainerFormat::Zip),
        [0x50, 0x4B, 0x05, 0x06, ..] => Some(ContainerFormat::EmptyZip),
        [0x50, 0x4B, 0x07, 0x08, ..] => Some(ContainerFormat::SpannedZip),
        _ => None,
    }
}

pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<ContainerFormat>> {
    let mut header = Vec::with_capacity(4);
    reader.by_ref().take(4).read_to_end(&mut header)?;
    reader.rewind()?;
    Ok(detect_format(&header))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageKind {
    /// A plain package whose resources live at the top level.
    Package,
    /// A bundle whose packages are nested one level down.
    Split,
}

impl PackageKind {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some(ext) if SPLIT_EXTENSIONS.contains(&ext) => Self::Split,
            _ => Self::Package,
        }
    }

    pub fn is_split(self) -> bool {
        self == Self::Split
    }
}
