use std::{fs, io, path::PathBuf};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, WrapErr};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cli = Cli::command();
        let bin = cli.get_name().to_string();
        match &self.output {
            Some(path) => {
                let mut file = fs::File::create(path)
                    .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
                clap_complete::generate(self.shell, &mut cli, bin, &mut file);
                eprintln!("Wrote {} completions to {}", self.shell, path.display());
            }
            None => clap_complete::generate(self.shell, &mut cli, bin, &mut io::stdout()),
        }
        Ok(())
    }
}
