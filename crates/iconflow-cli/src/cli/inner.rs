use std::path::PathBuf;

use anyhow::Context;
use iconflow::archive::Container;

#[derive(Clone, Debug, clap::Args)]
pub struct InnerArg {
    /// Split package to inspect
    pub package: PathBuf,
}

impl InnerArg {
    pub fn run(self) -> anyhow::Result<()> {
        let container = Container::open(&self.package)
            .with_context(|| format!("failed to open package '{}'", self.package.display()))?;

        let inner = container.inner_containers();
        if inner.is_empty() {
            eprintln!("{}", console::style("No inner packages found.").yellow());
        }
        for name in inner {
            println!("{name}");
        }
        Ok(())
    }
}
