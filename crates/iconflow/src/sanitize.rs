use std::path::{Component, Path, PathBuf};

/// Joins an icon file name onto the output directory.
///
/// The name must be a single plain component so a crafted entry cannot write
/// outside `out_dir`; backslashes are rejected on every platform.
pub(crate) fn output_path(out_dir: &Path, file_name: &str) -> Option<PathBuf> {
    if file_name.contains(['/', '\\']) {
        return None;
    }

    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(out_dir.join(file_name)),
        _ => None,
    }
}
