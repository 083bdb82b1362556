//! Zip container access for Android packages and split-package bundles.
//!
//! # Architecture
//!
//! - `detect.rs` - Container format sniffing and package kind
//! - `container.rs` - Opened containers, entry enumeration and reads
//! - `entry.rs` - Entry records and path helpers
//! - `split.rs` - Inner package resolution for split packages

pub use container::Container;
pub use detect::{
    ContainerFormat, PACKAGE_EXTENSION, PackageKind, SPLIT_EXTENSIONS, detect_format,
    detect_from_reader,
};
pub use entry::{Entry, split_file_name};
pub use error::{Error, Result};
pub use split::resolve_inner;

mod container;
mod detect;
mod entry;
mod error;
mod split;
