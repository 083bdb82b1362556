//! One extraction run from a package path to an output directory.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use iconflow_archive::{Container, Entry, PackageKind, resolve_inner};
use tracing::{debug, info};

use crate::collaborator::{Collaborator, PreviewItem};
use crate::error::Result;
use crate::options::{ExtractOptions, Mode};
use crate::pipeline::{IconPipeline, ensure_output_dir};
use crate::record::IconRecord;
use crate::report::ExtractionResult;

/// A package ready for icon work, with split bundles already narrowed down
/// to one inner package.
pub enum Package {
    Plain(Container<File>),
    Inner {
        name: String,
        container: Container<Cursor<Vec<u8>>>,
    },
}

impl Package {
    /// Opens `source`. Split bundles (by extension) are resolved to one inner
    /// package: `inner` if given, the only one if there is exactly one,
    /// otherwise whatever the collaborator picks.
    pub fn open(
        source: &Path,
        inner: Option<&str>,
        collaborator: &mut dyn Collaborator,
    ) -> Result<Self> {
        let mut outer = Container::open(source)?;
        if !PackageKind::from_path(source).is_split() {
            return Ok(Self::Plain(outer));
        }

        let candidates = outer.inner_containers();
        let choice = match inner {
            Some(name) => Some(name.to_string()),
            None if candidates.len() > 1 => collaborator.choose_inner(&candidates),
            None => None,
        };

        let name = resolve_inner(outer.origin(), candidates, choice.as_deref())?;
        let container = outer.open_inner(&name)?;
        debug!(package = %source.display(), inner = %name, "resolved split package");

        Ok(Self::Inner { name, container })
    }

    pub fn inner_name(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Inner { name, .. } => Some(name),
        }
    }

    pub fn candidates(&self, pipeline: &IconPipeline) -> Vec<Entry> {
        match self {
            Self::Plain(container) => pipeline.candidates(container),
            Self::Inner { container, .. } => pipeline.candidates(container),
        }
    }

    pub fn extract_all(
        &mut self,
        pipeline: &IconPipeline,
        out_dir: &Path,
    ) -> Result<ExtractionResult> {
        match self {
            Self::Plain(container) => pipeline.extract_all(container, out_dir),
            Self::Inner { container, .. } => pipeline.extract_all(container, out_dir),
        }
    }

    pub fn preview(&mut self, pipeline: &IconPipeline) -> Vec<IconRecord> {
        match self {
            Self::Plain(container) => pipeline.preview(container),
            Self::Inner { container, .. } => pipeline.preview(container),
        }
    }

    pub fn export_selected(
        &mut self,
        pipeline: &IconPipeline,
        records: &[IconRecord],
        indices: &[usize],
        out_dir: &Path,
    ) -> Result<ExtractionResult> {
        match self {
            Self::Plain(container) => {
                pipeline.export_selected(container, records, indices, out_dir)
            }
            Self::Inner { container, .. } => {
                pipeline.export_selected(container, records, indices, out_dir)
            }
        }
    }
}

/// Extracts icons from the package at `source` into `out_dir`.
///
/// In preview mode the package is closed while the collaborator selects and
/// opened again for the export.
pub fn run(
    source: &Path,
    out_dir: &Path,
    options: ExtractOptions,
    collaborator: &mut dyn Collaborator,
) -> Result<ExtractionResult> {
    ensure_output_dir(out_dir)?;

    let pipeline = IconPipeline::new(options);
    let mut package = Package::open(source, pipeline.options().inner.as_deref(), collaborator)?;

    let result = match pipeline.options().mode {
        Mode::Direct => package.extract_all(&pipeline, out_dir)?,
        Mode::Preview => {
            let records = package.preview(&pipeline);
            let inner = package.inner_name().map(str::to_owned);
            drop(package);

            let indices = if records.is_empty() {
                Vec::new()
            } else {
                collaborator.select(&PreviewItem::from_records(&records))
            };

            if indices.is_empty() {
                info!(package = %source.display(), previews = records.len(), "nothing selected");
                ExtractionResult::default()
            } else {
                let mut package = Package::open(source, inner.as_deref(), collaborator)?;
                package.export_selected(&pipeline, &records, &indices, out_dir)?
            }
        }
    };

    collaborator.report(&result);
    Ok(result)
}
