use config::{Config as ConfigLoader, ConfigError, File};
use sagestream_llm::LineBuffer;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Event log path; stdin when unset or "-"
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
    /// Consumed bytes kept before the line buffer is compacted (0 disables)
    #[serde(default = "default_compact_threshold")]
    pub compact_threshold: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_buffer_capacity() -> usize {
    4096
}

fn default_compact_threshold() -> usize {
    64 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            buffer_capacity: default_buffer_capacity(),
            compact_threshold: default_compact_threshold(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl InputConfig {
    /// Path to read from, or None for stdin
    pub fn source_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty() && *p != "-")
    }

    pub fn line_buffer(&self) -> LineBuffer {
        let buffer = LineBuffer::with_capacity(self.buffer_capacity);
        if self.compact_threshold == 0 {
            buffer
        } else {
            buffer.with_compaction(self.compact_threshold)
        }
    }
}

/// Environment variables and the config keys they override
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("INPUT_PATH", "input.path"),
    ("INPUT_BUFFER_CAPACITY", "input.buffer_capacity"),
    ("INPUT_COMPACT_THRESHOLD", "input.compact_threshold"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (`INPUT_PATH`, `INPUT_COMPACT_THRESHOLD`, `LOG_LEVEL`, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("config"), &env, std::env::vars())
    }

    /// Same layering as `load`, with an explicit config directory and environment
    pub fn load_from<I>(dir: &Path, env: &str, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let default_file = dir.join("default");
        let env_file = dir.join(env);

        let mut builder = ConfigLoader::builder()
            // 1. Load default config
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            // 2. Load environment-specific config
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false));

        // 3. Environment variables override everything
        for (name, value) in vars {
            if let Some((_, key)) = ENV_OVERRIDES.iter().find(|(var, _)| *var == name) {
                builder = builder.set_override(*key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder()
            .add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
