//! Icon extraction for Android packages.
//!
//! Candidate entries are picked out of a package by a path heuristic,
//! normalized to PNG and written to an output directory, either all at once
//! or after a caller-driven selection over decoded previews.
//!
//! # Architecture
//!
//! - `filter.rs` - Candidate heuristic and source encodings
//! - `normalize.rs` - Decoding and PNG re-encoding
//! - `pipeline.rs` - Direct and preview/export runs over a container
//! - `session.rs` - Package opening, split resolution and mode dispatch
//! - `collaborator.rs` - The request/response boundary to the presentation layer
//! - `options.rs`, `record.rs`, `report.rs` - Shared types

pub use collaborator::{Collaborator, PreviewItem, ScriptedCollaborator};
pub use error::{Error, Result};
pub use filter::{IMAGE_EXTENSIONS, RESOURCE_MARKERS, SourceEncoding, is_candidate};
pub use normalize::{NormalizeError, decode, normalize, normalize_encoding};
pub use options::{ExtractOptions, Mode, Progress};
pub use pipeline::IconPipeline;
pub use record::{IconRecord, TARGET_EXTENSION, target_filename};
pub use report::{EntryOutcome, ExtractionResult, SkipReason, Summary};
pub use session::{Package, run};

pub use iconflow_archive as archive;

pub mod collaborator;
mod error;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod pipeline;
mod record;
mod report;
mod sanitize;
pub mod session;
