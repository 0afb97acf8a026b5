use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use sprout_manifest::{MANIFEST_FILE, SproutToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sprout.toml (defaults to ./sprout.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Print the resolved project and its files as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let sprout_toml = SproutToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(sprout_toml.description(), sprout_toml.path())?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("failed to serialize report")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
