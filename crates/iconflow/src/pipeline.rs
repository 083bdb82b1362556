//! Extraction over an opened container.
//!
//! Every candidate is handled on its own: a read, decode, encode or write
//! failure turns into a skipped [`EntryOutcome`] and the run moves on.
//! Only an unusable output directory or a bad selection stops a run.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use iconflow_archive::{Container, Entry};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::filter::{SourceEncoding, is_candidate};
use crate::normalize::{decode, normalize_encoding};
use crate::options::ExtractOptions;
use crate::record::{IconRecord, target_filename};
use crate::report::{EntryOutcome, ExtractionResult, SkipReason};
use crate::sanitize::output_path;

/// Runs extraction with one set of options. Holds no state between runs.
#[derive(Clone, Debug, Default)]
pub struct IconPipeline {
    options: ExtractOptions,
}

impl IconPipeline {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Candidate entries in container order.
    pub fn candidates<R: Read + Seek>(&self, container: &Container<R>) -> Vec<Entry> {
        container
            .entries()
            .filter(|entry| is_candidate(&entry.path))
            .collect()
    }

    /// Writes every candidate to `out_dir` as `<basename>.png`.
    ///
    /// Later entries overwrite earlier ones that share a basename.
    pub fn extract_all<R: Read + Seek>(
        &self,
        container: &mut Container<R>,
        out_dir: &Path,
    ) -> Result<ExtractionResult> {
        ensure_output_dir(out_dir)?;

        let candidates = self.candidates(container);
        let total = candidates.len();

        let result: ExtractionResult = candidates
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let outcome = self.extract_entry(container, entry, out_dir);
                self.options.report_progress(i + 1, total, &entry.path);
                outcome
            })
            .collect();

        info!(
            container = %container.origin().display(),
            extracted = result.extracted_count,
            attempted = result.attempted_count,
            "extraction finished"
        );
        Ok(result)
    }

    /// Decodes every candidate for display.
    ///
    /// Exactly the entries direct mode would write are kept: unreadable
    /// entries and undecodable conversions are left out, while a PNG that
    /// fails to decode stays in without pixels since export copies its bytes.
    pub fn preview<R: Read + Seek>(&self, container: &mut Container<R>) -> Vec<IconRecord> {
        let candidates = self.candidates(container);
        let total = candidates.len();
        let mut records = Vec::with_capacity(total);

        for (i, entry) in candidates.iter().enumerate() {
            match self.preview_entry(container, entry) {
                Ok(record) => records.push(record),
                Err(reason) => warn!(entry = %entry.path, %reason, "skipping preview"),
            }
            self.options.report_progress(i + 1, total, &entry.path);
        }

        debug!(previews = records.len(), candidates = total, "preview ready");
        records
    }

    /// Writes the selected previews.
    ///
    /// Records are matched back to entries by basename, first candidate wins,
    /// and the bytes are read and normalized again. When two entries share a
    /// basename the written file may come from a different entry than the
    /// one previewed.
    pub fn export_selected<R: Read + Seek>(
        &self,
        container: &mut Container<R>,
        records: &[IconRecord],
        indices: &[usize],
        out_dir: &Path,
    ) -> Result<ExtractionResult> {
        let selected: BTreeSet<usize> = indices.iter().copied().collect();
        if let Some(&index) = selected.range(records.len()..).next() {
            return Err(Error::SelectionOutOfRange {
                index,
                len: records.len(),
            });
        }
        if selected.is_empty() {
            debug!("nothing selected");
            return Ok(ExtractionResult::default());
        }

        ensure_output_dir(out_dir)?;

        let candidates = self.candidates(container);
        let total = selected.len();

        let result: ExtractionResult = selected
            .iter()
            .enumerate()
            .map(|(i, &index)| {
                let record = &records[index];
                let outcome = match candidates
                    .iter()
                    .find(|entry| entry.basename() == record.display_basename)
                {
                    Some(entry) => self.extract_entry(container, entry, out_dir),
                    None => {
                        warn!(
                            entry = %record.source_entry_path,
                            "selected icon no longer resolves"
                        );
                        EntryOutcome::Skipped {
                            source: record.source_entry_path.clone(),
                            reason: SkipReason::Missing,
                        }
                    }
                };
                self.options
                    .report_progress(i + 1, total, &record.source_entry_path);
                outcome
            })
            .collect();

        info!(
            container = %container.origin().display(),
            extracted = result.extracted_count,
            selected = result.attempted_count,
            "export finished"
        );
        Ok(result)
    }

    fn extract_entry<R: Read + Seek>(
        &self,
        container: &mut Container<R>,
        entry: &Entry,
        out_dir: &Path,
    ) -> EntryOutcome {
        let written = self
            .convert_entry(container, entry)
            .and_then(|bytes| write_icon(out_dir, &target_filename(entry.basename()), &bytes));

        match written {
            Ok(target) => {
                debug!(entry = %entry.path, target = %target.display(), "extracted");
                EntryOutcome::Extracted {
                    source: entry.path.clone(),
                    target,
                }
            }
            Err(reason) => {
                warn!(entry = %entry.path, %reason, "skipping entry");
                EntryOutcome::Skipped {
                    source: entry.path.clone(),
                    reason,
                }
            }
        }
    }

    fn convert_entry<R: Read + Seek>(
        &self,
        container: &mut Container<R>,
        entry: &Entry,
    ) -> std::result::Result<Vec<u8>, SkipReason> {
        let (encoding, raw) = read_candidate(container, entry)?;
        Ok(normalize_encoding(raw, encoding)?)
    }

    fn preview_entry<R: Read + Seek>(
        &self,
        container: &mut Container<R>,
        entry: &Entry,
    ) -> std::result::Result<IconRecord, SkipReason> {
        let (encoding, raw) = read_candidate(container, entry)?;
        match decode(&raw, encoding) {
            Ok(pixels) => Ok(IconRecord::new(entry, Some(pixels))),
            Err(err) if !encoding.needs_conversion() => {
                warn!(entry = %entry.path, reason = %err, "no preview for pass-through icon");
                Ok(IconRecord::new(entry, None))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn read_candidate<R: Read + Seek>(
    container: &mut Container<R>,
    entry: &Entry,
) -> std::result::Result<(SourceEncoding, Vec<u8>), SkipReason> {
    let encoding = SourceEncoding::from_path(&entry.path)
        .ok_or_else(|| SkipReason::Decode(format!("unsupported encoding for '{}'", entry.path)))?;
    let raw = container
        .read_bytes(entry)
        .map_err(|e| SkipReason::Read(e.to_string()))?;
    Ok((encoding, raw))
}

/// Fails unless `out_dir` is an existing directory we can create files in.
pub(crate) fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    let output_error = |source: io::Error| Error::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(out_dir).map_err(output_error)?;
    if !metadata.is_dir() {
        return Err(output_error(io::Error::other("not a directory")));
    }

    tempfile::tempfile_in(out_dir).map_err(output_error)?;
    Ok(())
}

/// Writes through a temporary file in `out_dir` so a failed write never
/// leaves a truncated icon behind.
fn write_icon(
    out_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> std::result::Result<PathBuf, SkipReason> {
    let target = output_path(out_dir, file_name)
        .ok_or_else(|| SkipReason::Write(format!("unsafe file name '{file_name}'")))?;
    let write_error = |e: io::Error| SkipReason::Write(format!("{}: {e}", target.display()));

    let mut staged = tempfile::Builder::new()
        .prefix(".iconflow-")
        .tempfile_in(out_dir)
        .map_err(write_error)?;
    staged.write_all(bytes).map_err(write_error)?;
    staged.persist(&target).map_err(|e| write_error(e.error))?;

    Ok(target)
}
