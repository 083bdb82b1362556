/// A file record inside a container.
///
/// Entries are plain values; reading one needs the container it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub index: usize,
    pub path: String,
}

impl Entry {
    pub fn new(index: usize, path: impl Into<String>) -> Self {
        Self {
            index,
            path: path.into(),
        }
    }

    /// Lower-cased extension without the leading dot.
    pub fn extension(&self) -> Option<String> {
        split_file_name(&self.path).1.map(str::to_ascii_lowercase)
    }

    /// File name stripped of its directory and extension.
    pub fn basename(&self) -> &str {
        split_file_name(&self.path).0
    }

    pub fn is_directory(&self) -> bool {
        self.path.ends_with('/')
    }
}

/// Splits the last path component into stem and extension.
///
/// Leading dots belong to the stem, so `res/.hidden` has no extension.
pub fn split_file_name(path: &str) -> (&str, Option<&str>) {
    let name = path.rsplit('/').next().unwrap_or(path);
    let leading = name.len() - name.trim_start_matches('.').len();

    match name[leading..].rfind('.') {
        Some(dot) => {
            let dot = leading + dot;
            (&name[..dot], Some(&name[dot + 1..]))
        }
        None => (name, None),
    }
}
