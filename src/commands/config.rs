//! Config command - show or create the settings file.

use anyhow::{bail, Context as _, Result};
use clap::Args;

use paritysteg::config::default_config_path;
use paritysteg::Settings;

use super::{CommandExecutor, Context};

/// Show the active settings, or write a default settings file.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Write a settings file with the default values
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing settings file (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let path = match ctx.config_path.clone().or_else(default_config_path) {
            Some(p) => p,
            None => bail!("Unable to determine home directory; pass --config <path>"),
        };

        if self.init {
            if path.exists() && !self.force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Settings::default()
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote default settings to {}", path.display());
            return Ok(());
        }

        let shown = toml::to_string_pretty(&ctx.settings).context("Failed to render settings")?;
        println!("# {}", path.display());
        print!("{}", shown);
        Ok(())
    }
}
