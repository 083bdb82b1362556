use std::io::{Cursor, Write};

use iconflow_archive::{Container, Error};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in files {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Container::open(dir.path().join("missing.apk"));
    assert!(matches!(result, Err(Error::ArchiveOpen { .. })));
}

#[test]
fn open_non_zip_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.apk");
    std::fs::write(&path, b"definitely not a zip").unwrap();

    let result = Container::open(&path);
    assert!(matches!(result, Err(Error::NotAZip { .. })));
}

#[test]
fn open_truncated_zip() {
    let mut bytes = build_zip(&[("res/drawable/a.png", b"a")]);
    bytes.truncate(bytes.len() / 2);
    let result = Container::from_bytes(bytes, "truncated.apk");
    assert!(matches!(result, Err(Error::Corrupted { .. })));
}

#[test]
fn open_from_disk_and_list_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pack.apk");
    std::fs::write(
        &path,
        build_zip(&[
            ("res/", b""),
            ("res/drawable/a.png", b"first"),
            ("assets/b.txt", b"second"),
        ]),
    )
    .unwrap();

    let container = Container::open(&path).unwrap();
    assert_eq!(container.len(), 3);
    assert_eq!(container.origin(), path.as_path());

    let paths: Vec<String> = container.entries().map(|e| e.path).collect();
    assert_eq!(paths, vec!["res/drawable/a.png", "assets/b.txt"]);
}

#[test]
fn read_entry_bytes() {
    let bytes = build_zip(&[("res/drawable/a.png", b"first"), ("assets/b.txt", b"second")]);
    let mut container = Container::from_bytes(bytes, "pack.apk").unwrap();

    let entries: Vec<_> = container.entries().collect();
    assert_eq!(container.read_bytes(&entries[0]).unwrap(), b"first");
    assert_eq!(container.read_bytes(&entries[1]).unwrap(), b"second");
}

#[test]
fn checksum_mismatch_is_an_entry_error() {
    let payload = b"payload-that-will-be-damaged";
    let mut bytes = build_zip(&[("res/drawable/bad.png", payload), ("res/drawable/ok.png", b"ok")]);
    let offset = bytes
        .windows(payload.len())
        .position(|w| w == payload)
        .unwrap();
    bytes[offset] ^= 0xFF;

    let mut container = Container::from_bytes(bytes, "pack.apk").unwrap();
    let entries: Vec<_> = container.entries().collect();

    let err = container.read_bytes(&entries[0]).unwrap_err();
    assert!(err.is_entry_level());
    assert!(matches!(err, Error::EntryRead { ref entry, .. } if entry == "res/drawable/bad.png"));

    // The container stays usable after a failed entry.
    assert_eq!(container.read_bytes(&entries[1]).unwrap(), b"ok");
}

#[test]
fn split_package_with_single_inner() {
    let inner = build_zip(&[("res/drawable/icon.png", b"icon")]);
    let outer = build_zip(&[("manifest.json", b"{}"), ("com.example.apk", &inner)]);
    let mut container = Container::from_bytes(outer, "bundle.xapk").unwrap();

    assert_eq!(container.inner_containers(), vec!["com.example.apk"]);

    let mut resolved = container.resolve_inner(None).unwrap();
    let entries: Vec<_> = resolved.entries().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(resolved.read_bytes(&entries[0]).unwrap(), b"icon");
    assert!(resolved.origin().ends_with("com.example.apk"));
}

#[test]
fn split_package_with_two_inner_requires_selection() {
    let inner = build_zip(&[("res/drawable/icon.png", b"icon")]);
    let outer = build_zip(&[("base.apk", &inner), ("config.xxhdpi.apk", &inner)]);
    let mut container = Container::from_bytes(outer, "bundle.xapk").unwrap();

    match container.resolve_inner(None) {
        Err(Error::InnerSelectionRequired { candidates }) => {
            assert_eq!(candidates, vec!["base.apk", "config.xxhdpi.apk"]);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("an inner package was picked without a choice"),
    }

    let chosen = container.resolve_inner(Some("config.xxhdpi.apk")).unwrap();
    assert_eq!(chosen.entries().count(), 1);
}

#[test]
fn split_package_without_inner() {
    let outer = build_zip(&[("manifest.json", b"{}")]);
    let mut container = Container::from_bytes(outer, "bundle.xapk").unwrap();
    assert!(matches!(
        container.resolve_inner(None),
        Err(Error::NoInnerArchive { .. })
    ));
}

#[test]
fn extract_unknown_inner() {
    let outer = build_zip(&[("manifest.json", b"{}")]);
    let mut container = Container::from_bytes(outer, "bundle.xapk").unwrap();
    assert!(matches!(
        container.extract_inner("manifest.json"),
        Err(Error::UnknownInner { .. })
    ));
}
