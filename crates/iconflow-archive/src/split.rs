use std::path::Path;

use crate::error::{Error, Result};

/// Picks the inner package to work on.
///
/// A single candidate is taken as is. Several candidates need an explicit
/// `choice`, which may name either the full entry path or its file name.
pub fn resolve_inner(
    origin: &Path,
    candidates: Vec<String>,
    choice: Option<&str>,
) -> Result<String> {
    if candidates.is_empty() {
        return Err(Error::NoInnerArchive {
            path: origin.to_path_buf(),
        });
    }

    if let Some(name) = choice {
        return candidates
            .into_iter()
            .find(|candidate| candidate == name || candidate.rsplit('/').next() == Some(name))
            .ok_or_else(|| Error::UnknownInner {
                name: name.to_string(),
            });
    }

    if let [only] = candidates.as_slice() {
        return Ok(only.clone());
    }

    Err(Error::InnerSelectionRequired { candidates })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_candidate_is_automatic() {
        let chosen = resolve_inner(Path::new("a.xapk"), names(&["base.apk"]), None).unwrap();
        assert_eq!(chosen, "base.apk");
    }

    #[test]
    fn no_candidates_is_an_error() {
        let err = resolve_inner(Path::new("a.xapk"), Vec::new(), None).unwrap_err();
        assert!(matches!(err, Error::NoInnerArchive { .. }));
    }

    #[test]
    fn several_candidates_require_a_choice() {
        let err = resolve_inner(
            Path::new("a.xapk"),
            names(&["base.apk", "config.xxhdpi.apk"]),
            None,
        )
        .unwrap_err();
        match err {
            Error::InnerSelectionRequired { candidates } => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn choice_by_path_or_file_name() {
        let candidates = names(&["apks/base.apk", "apks/config.xxhdpi.apk"]);
        let by_path =
            resolve_inner(Path::new("a.apks"), candidates.clone(), Some("apks/base.apk")).unwrap();
        assert_eq!(by_path, "apks/base.apk");

        let by_name =
            resolve_inner(Path::new("a.apks"), candidates, Some("config.xxhdpi.apk")).unwrap();
        assert_eq!(by_name, "apks/config.xxhdpi.apk");
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let err = resolve_inner(Path::new("a.xapk"), names(&["base.apk"]), Some("other.apk"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownInner { name } if name == "other.apk"));
    }
}
