use clap::Parser;
use config::ConfigError;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "sagestream")]
#[command(version)]
#[command(about = "Replay a recorded inference event stream and print the generated text", long_about = None)]
pub struct Cli {
    /// JSON-lines event log to replay ("-" for stdin)
    pub event_log: Option<String>,

    /// Read configuration from this file instead of config/
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load configuration; the positional event log beats the configured path
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::load()?,
        };

        if let Some(path) = &self.event_log {
            config.input.path = Some(path.clone());
        }

        Ok(config)
    }
}
