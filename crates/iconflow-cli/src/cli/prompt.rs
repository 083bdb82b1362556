//! Terminal side of the collaborator boundary.
//!
//! Lists go to stderr; answers come from the command line when given, and
//! from a prompt otherwise.

use console::{Term, style};
use iconflow::{Collaborator, ExtractionResult, PreviewItem, Summary};

use crate::cli::selection::Selection;

pub struct TerminalCollaborator {
    term: Term,
    selection: Option<Selection>,
    out_dir: Option<String>,
}

impl TerminalCollaborator {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            selection: None,
            out_dir: None,
        }
    }

    pub fn with_selection(mut self, selection: Option<Selection>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<String>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    fn say(&self, line: &str) {
        let _ = self.term.write_line(line);
    }

    /// `None` when there is no one to ask or the answer is empty.
    fn ask(&self, question: &str) -> Option<String> {
        if !self.term.is_term() {
            return None;
        }
        self.term.write_str(question).ok()?;
        let answer = self.term.read_line().ok()?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| answer.to_string())
    }
}

impl Collaborator for TerminalCollaborator {
    fn choose_inner(&mut self, candidates: &[String]) -> Option<String> {
        self.say(&format!("{}", style("This split package holds several packages:").bold()));
        for (i, name) in candidates.iter().enumerate() {
            self.say(&format!("  [{i}] {name}"));
        }

        let answer = self.ask("Package to use (index or name): ")?;
        match answer.parse::<usize>() {
            Ok(i) => candidates.get(i).cloned(),
            Err(_) => Some(answer),
        }
    }

    fn select(&mut self, previews: &[PreviewItem<'_>]) -> Vec<usize> {
        self.say(&format!("{}", style(format!("{} icons found:", previews.len())).bold()));
        for item in previews {
            let size = match item.dimensions() {
                Some((width, height)) => format!("{width}x{height}"),
                None => "undecodable".to_string(),
            };
            self.say(&format!(
                "  [{}] {} {}",
                item.index,
                item.display_basename,
                style(size).dim()
            ));
        }

        if let Some(selection) = &self.selection {
            return selection.resolve(previews.len());
        }

        loop {
            let Some(answer) = self.ask("Icons to export (e.g. 0,2,4-6 or all; empty cancels): ")
            else {
                return Vec::new();
            };
            match answer.parse::<Selection>() {
                Ok(selection) => return selection.resolve(previews.len()),
                Err(err) => self.say(&format!("{} {err}", style("invalid selection:").yellow())),
            }
        }
    }

    fn report(&mut self, result: &ExtractionResult) {
        let target = self.out_dir.as_deref().unwrap_or(".");
        match result.summary() {
            Summary::NothingToDo => {
                self.say(&format!("{}", style("No icons were extracted.").yellow()));
            }
            Summary::Complete { extracted } => {
                self.say(&format!(
                    "{} Extracted {extracted} icons to {target}",
                    style("done:").green().bold()
                ));
            }
            Summary::Partial {
                extracted,
                attempted,
            } => {
                self.say(&format!(
                    "{} Extracted {extracted} of {attempted} icons to {target}",
                    style("done:").yellow().bold()
                ));
                for (source, reason) in result.skipped() {
                    self.say(&format!("  {} {source}: {reason}", style("skipped").dim()));
                }
            }
        }
    }
}
