use std::path::PathBuf;

use anyhow::anyhow;
use iconflow::{ExtractOptions, Mode, run};

use crate::cli::prompt::TerminalCollaborator;
use crate::cli::selection::Selection;

#[derive(Clone, Debug, clap::Args)]
pub struct ExtractArg {
    /// Package to read (.apk, or a split .xapk/.apks/.apkm)
    pub package: PathBuf,

    /// Existing directory the icons are written to
    pub out_dir: PathBuf,

    /// Inner package to use when the package is a split bundle
    #[arg(long)]
    pub inner: Option<String>,

    /// Decode all candidates first and export only the selected ones
    #[arg(long)]
    pub preview: bool,

    /// Icons to export in preview mode (`all`, `none`, `0,2,4-6`); asked for when omitted
    #[arg(long, requires = "preview")]
    pub select: Option<Selection>,
}

impl ExtractArg {
    pub fn run(self) -> anyhow::Result<()> {
        let mut options = ExtractOptions::default().mode(if self.preview {
            Mode::Preview
        } else {
            Mode::Direct
        });
        if let Some(inner) = self.inner {
            options = options.inner(inner);
        }

        let mut collaborator = TerminalCollaborator::new()
            .with_selection(self.select)
            .with_out_dir(self.out_dir.display().to_string());

        run(&self.package, &self.out_dir, options, &mut collaborator)
            .map_err(|e| anyhow!("failed to {}: {e}", e.stage()))?;
        Ok(())
    }
}
