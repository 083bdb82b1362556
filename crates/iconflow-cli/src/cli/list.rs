use std::path::PathBuf;

use anyhow::anyhow;
use iconflow::{IconPipeline, Package, SourceEncoding};

use crate::cli::prompt::TerminalCollaborator;

#[derive(Clone, Debug, clap::Args)]
pub struct ListArg {
    /// Package to inspect
    pub package: PathBuf,

    /// Inner package to use when the package is a split bundle
    #[arg(long)]
    pub inner: Option<String>,
}

impl ListArg {
    pub fn run(self) -> anyhow::Result<()> {
        let mut collaborator = TerminalCollaborator::new();
        let package = Package::open(&self.package, self.inner.as_deref(), &mut collaborator)
            .map_err(|e| anyhow!("failed to {}: {e}", e.stage()))?;

        let candidates = package.candidates(&IconPipeline::default());
        if let Some(inner) = package.inner_name() {
            println!("# {inner}");
        }
        for entry in &candidates {
            let encoding = SourceEncoding::from_path(&entry.path)
                .map(|encoding| format!("{encoding:?}").to_lowercase())
                .unwrap_or_default();
            println!("{}\t{encoding}", entry.path);
        }
        tracing::info!(candidates = candidates.len(), "listed candidates");
        Ok(())
    }
}
