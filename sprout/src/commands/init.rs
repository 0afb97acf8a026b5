use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use sprout_core::{BuildSystem, GeneratedFile, Language, Overwrite, WriteResult};
use sprout_manifest::{MANIFEST_FILE, SproutToml, StarterManifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Artifact of the project (defaults to the current directory name)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Group of the project
    #[arg(short, long, default_value = "com.example")]
    pub group: String,

    /// Source language
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Build system
    #[arg(short, long)]
    pub build: Option<BuildSystem>,

    /// Replace an existing sprout.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (artifact, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;
        let build = match self.build {
            Some(build) => build,
            None => Self::prompt_build()?,
        };
        let language = match self.language {
            Some(language) => language,
            None => Self::prompt_language()?,
        };
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let starter = StarterManifest::new(&self.group, &artifact)
            .with_language(language)
            .with_build(build)
            .with_overwrite(overwrite);
        if starter.write(&output_dir)? == WriteResult::Skipped {
            println!(
                "{} already exists in {}, use --force to replace it",
                MANIFEST_FILE,
                output_dir.display()
            );
            return Ok(());
        }

        // The artifact comes from the directory name and must still form a package.
        SproutToml::open(starter.path(&output_dir)).unwrap_or_exit();

        println!("Created {} in {}", MANIFEST_FILE, output_dir.display());
        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  sprout generate");

        Ok(())
    }

    fn prompt_build() -> Result<BuildSystem> {
        let builds = ["Maven", "Gradle"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a build system")
            .items(&builds)
            .default(0)
            .interact()
            .wrap_err("Failed to get build system selection")?;

        Ok(match selection {
            0 => BuildSystem::Maven,
            _ => BuildSystem::Gradle,
        })
    }

    fn prompt_language() -> Result<Language> {
        let languages = ["Java", "Kotlin", "Groovy"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a language")
            .items(&languages)
            .default(0)
            .interact()
            .wrap_err("Failed to get language selection")?;

        Ok(match selection {
            0 => Language::Java,
            1 => Language::Kotlin,
            _ => Language::Groovy,
        })
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            Ok((dir_name, output.unwrap_or_else(|| PathBuf::from("."))))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_project() {
        let (artifact, dir) = InitCommand::resolve_paths("demo", None).unwrap();
        assert_eq!(artifact, "demo");
        assert_eq!(dir, PathBuf::from("demo"));

        let (_, dir) = InitCommand::resolve_paths("demo", Some(PathBuf::from("out"))).unwrap();
        assert_eq!(dir, PathBuf::from("out"));
    }
}
