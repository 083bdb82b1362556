use image::{DynamicImage, GenericImageView};

use iconflow_archive::Entry;

/// Extension of every written icon.
pub const TARGET_EXTENSION: &str = "png";

pub fn target_filename(basename: &str) -> String {
    format!("{basename}.{TARGET_EXTENSION}")
}

/// A decoded icon waiting for export.
///
/// Only the decoded pixels and the naming are kept; export goes back to the
/// container for the raw bytes. PNG entries are copied as is on export, so
/// one that fails to decode is still kept, without pixels.
#[derive(Clone, Debug)]
pub struct IconRecord {
    pub source_entry_path: String,
    pub display_basename: String,
    pub decoded_pixels: Option<DynamicImage>,
}

impl IconRecord {
    pub fn new(entry: &Entry, decoded_pixels: Option<DynamicImage>) -> Self {
        Self {
            source_entry_path: entry.path.clone(),
            display_basename: entry.basename().to_string(),
            decoded_pixels,
        }
    }

    pub fn target_filename(&self) -> String {
        target_filename(&self.display_basename)
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.decoded_pixels.as_ref().map(|pixels| pixels.dimensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_naming() {
        let entry = Entry::new(2, "res/drawable-xhdpi/ic_launcher.webp");
        let record = IconRecord::new(&entry, Some(DynamicImage::new_rgba8(4, 6)));
        assert_eq!(record.source_entry_path, "res/drawable-xhdpi/ic_launcher.webp");
        assert_eq!(record.display_basename, "ic_launcher");
        assert_eq!(record.target_filename(), "ic_launcher.png");
        assert_eq!(record.dimensions(), Some((4, 6)));

        let blank = IconRecord::new(&entry, None);
        assert_eq!(blank.dimensions(), None);
        assert_eq!(blank.target_filename(), "ic_launcher.png");
    }
}
