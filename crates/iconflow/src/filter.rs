//! Candidate heuristic.
//!
//! An entry is a candidate when its path ends in a whitelisted image
//! extension and lives somewhere that looks like the resource tree.
//! Drawables that are not icons pass; icons stored outside the markers do not.

use iconflow_archive::split_file_name;
use image::ImageFormat;

/// Accepted extensions, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".webp", ".jpg", ".jpeg"];

/// Substrings marking the resource area of a package, matched as stored.
pub const RESOURCE_MARKERS: &[&str] = &["res/", "drawable"];

pub fn is_candidate(entry_path: &str) -> bool {
    SourceEncoding::from_path(entry_path).is_some()
        && RESOURCE_MARKERS
            .iter()
            .any(|marker| entry_path.contains(marker))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceEncoding {
    Png,
    Webp,
    Jpeg,
}

impl SourceEncoding {
    /// Encoding named by the file extension. Leading dots belong to the stem,
    /// so `res/drawable/.png` has none.
    pub fn from_path(path: &str) -> Option<Self> {
        split_file_name(path).1.and_then(Self::from_extension)
    }

    /// Accepts the extension with or without its leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Webp => ImageFormat::WebP,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Everything but PNG goes through a decode and re-encode.
    pub fn needs_conversion(self) -> bool {
        self != Self::Png
    }
}
