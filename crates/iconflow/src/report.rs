use std::fmt;
use std::path::{Path, PathBuf};

use crate::normalize::NormalizeError;

/// Why a single entry was left out of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Read(String),
    Decode(String),
    Encode(String),
    Write(String),
    /// A selected record no longer resolves to a candidate entry.
    Missing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(msg) => write!(f, "read failed: {msg}"),
            Self::Decode(msg) => write!(f, "decode failed: {msg}"),
            Self::Encode(msg) => write!(f, "encode failed: {msg}"),
            Self::Write(msg) => write!(f, "write failed: {msg}"),
            Self::Missing => f.write_str("no matching entry in the package"),
        }
    }
}

impl From<NormalizeError> for SkipReason {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::Encode { .. } => Self::Encode(err.to_string()),
            NormalizeError::Unsupported(_) | NormalizeError::Decode { .. } => {
                Self::Decode(err.to_string())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    Extracted { source: String, target: PathBuf },
    Skipped { source: String, reason: SkipReason },
}

impl EntryOutcome {
    pub fn source(&self) -> &str {
        match self {
            Self::Extracted { source, .. } | Self::Skipped { source, .. } => source,
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }
}

/// What the caller should tell the user about a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Summary {
    /// No candidates, or nothing selected.
    NothingToDo,
    Complete { extracted: usize },
    Partial { extracted: usize, attempted: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub extracted_count: usize,
    pub attempted_count: usize,
    pub outcomes: Vec<EntryOutcome>,
}

impl ExtractionResult {
    pub fn push(&mut self, outcome: EntryOutcome) {
        self.attempted_count += 1;
        if outcome.is_extracted() {
            self.extracted_count += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn summary(&self) -> Summary {
        match (self.attempted_count, self.extracted_count) {
            (0, _) => Summary::NothingToDo,
            (attempted, extracted) if attempted == extracted => Summary::Complete { extracted },
            (attempted, extracted) => Summary::Partial {
                extracted,
                attempted,
            },
        }
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Extracted { target, .. } => Some(target.as_path()),
            EntryOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Skipped { source, reason } => Some((source.as_str(), reason)),
            EntryOutcome::Extracted { .. } => None,
        })
    }
}

impl FromIterator<EntryOutcome> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = EntryOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut result, outcome| {
            result.push(outcome);
            result
        })
    }
}
