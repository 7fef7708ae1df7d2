use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the configuration file location
    Path,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> anyhow::Result<String> {
        match self {
            Self::Schema => {
                let schema = crate::shared::config::generate_schema();
                Ok(format!("{}\n", serde_json::to_string_pretty(&schema)?))
            }
            Self::Path => {
                let dir = crate::shared::dirs::config_dir()
                    .ok_or_else(|| anyhow::anyhow!("Cannot locate config directory: HOME is not set"))?;
                Ok(format!("{}\n", dir.join("ghdesk").join("config.yaml").display()))
            }
        }
    }
}
