//! The request/response boundary towards whatever presents a run to a user.
//!
//! The core only ever asks three things: which inner package to use, which
//! previews to export, and how to present the outcome. A terminal, a GUI or a
//! test harness can answer.

use image::{DynamicImage, GenericImageView};

use crate::record::IconRecord;
use crate::report::{ExtractionResult, Summary};

/// One decoded icon offered for selection.
#[derive(Clone, Copy, Debug)]
pub struct PreviewItem<'a> {
    pub index: usize,
    pub display_basename: &'a str,
    /// `None` for a pass-through PNG whose data could not be decoded.
    pub pixels: Option<&'a DynamicImage>,
}

impl<'a> PreviewItem<'a> {
    pub fn from_records(records: &'a [IconRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self {
                index,
                display_basename: &record.display_basename,
                pixels: record.decoded_pixels.as_ref(),
            })
            .collect()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.pixels.map(|pixels| pixels.dimensions())
    }
}

pub trait Collaborator {
    /// Picks one of several inner packages. `None` leaves the choice open,
    /// which fails the run.
    fn choose_inner(&mut self, candidates: &[String]) -> Option<String>;

    /// Returns the indices to export. An empty selection means nothing is
    /// exported.
    fn select(&mut self, previews: &[PreviewItem<'_>]) -> Vec<usize>;

    fn report(&mut self, _result: &ExtractionResult) {}
}

/// Answers from fixed values, for headless callers and tests.
///
/// Without a scripted selection every preview is selected.
#[derive(Clone, Debug, Default)]
pub struct ScriptedCollaborator {
    pub inner: Option<String>,
    pub selection: Option<Vec<usize>>,
    pub offered_inner: Vec<String>,
    pub offered_previews: Vec<String>,
    pub summaries: Vec<Summary>,
}

impl ScriptedCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inner(mut self, name: impl Into<String>) -> Self {
        self.inner = Some(name.into());
        self
    }

    pub fn with_selection(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.selection = Some(indices.into());
        self
    }
}

impl Collaborator for ScriptedCollaborator {
    fn choose_inner(&mut self, candidates: &[String]) -> Option<String> {
        self.offered_inner = candidates.to_vec();
        self.inner.clone()
    }

    fn select(&mut self, previews: &[PreviewItem<'_>]) -> Vec<usize> {
        self.offered_previews = previews
            .iter()
            .map(|item| item.display_basename.to_string())
            .collect();

        match &self.selection {
            Some(indices) => indices.clone(),
            None => previews.iter().map(|item| item.index).collect(),
        }
    }

    fn report(&mut self, result: &ExtractionResult) {
        self.summaries.push(result.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconflow_archive::Entry;

    fn records() -> Vec<IconRecord> {
        ["res/drawable/a.png", "res/drawable/b.webp"]
            .iter()
            .enumerate()
            .map(|(i, path)| {
                IconRecord::new(&Entry::new(i, *path), Some(DynamicImage::new_rgba8(1, 1)))
            })
            .collect()
    }

    #[test]
    fn preview_items_follow_record_order() {
        let records = records();
        let items = PreviewItem::from_records(&records);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].display_basename, "b");
        assert_eq!(items[1].dimensions(), Some((1, 1)));
    }

    #[test]
    fn scripted_defaults_to_everything() {
        let records = records();
        let items = PreviewItem::from_records(&records);
        let mut collaborator = ScriptedCollaborator::new();
        assert_eq!(collaborator.select(&items), vec![0, 1]);
        assert_eq!(collaborator.offered_previews, vec!["a", "b"]);
        assert_eq!(collaborator.choose_inner(&["x.apk".to_string()]), None);
    }

    #[test]
    fn scripted_answers() {
        let records = records();
        let items = PreviewItem::from_records(&records);
        let mut collaborator = ScriptedCollaborator::new()
            .with_inner("base.apk")
            .with_selection([1]);
        assert_eq!(collaborator.select(&items), vec![1]);
        assert_eq!(
            collaborator.choose_inner(&["base.apk".to_string(), "config.apk".to_string()]),
            Some("base.apk".to_string())
        );
        assert_eq!(collaborator.offered_inner.len(), 2);

        collaborator.report(&ExtractionResult::default());
        assert_eq!(collaborator.summaries, vec![Summary::NothingToDo]);
    }
}
