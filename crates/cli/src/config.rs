//! Runtime configuration from environment variables and arguments.
//!
//! | variable              | values            | default  |
//! |-----------------------|-------------------|----------|
//! | `WAREFLOW_MODE`       | `api`, `script`   | `script` |
//! | `WAREFLOW_LOG_FORMAT` | `json`, `pretty`  | `json`   |
//! | `WAREFLOW_SEED_PATH`  | path to JSON seed | built-in |
//! | `RUST_LOG`            | tracing filter    | `info`   |
//!
//! A leading `--api` argument selects API mode regardless of the environment.

use std::path::PathBuf;

use wareflow_observability::LogFormat;

/// How the session talks to its caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Announces `{"status":"ready"}` before reading commands.
    Api,
    /// Reads commands silently (piped scripts, tests).
    #[default]
    Script,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub mode: Mode,
    pub log_format: LogFormat,
    pub seed_path: Option<PathBuf>,
    /// Problems found while reading configuration. Reported once logging is up.
    pub warnings: Vec<String>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("WAREFLOW_MODE") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "api" => config.mode = Mode::Api,
                "script" => config.mode = Mode::Script,
                _ => config
                    .warnings
                    .push(format!("unknown WAREFLOW_MODE '{raw}'; using script")),
            }
        }

        if let Some(raw) = lookup("WAREFLOW_LOG_FORMAT") {
            match LogFormat::parse(&raw) {
                Some(format) => config.log_format = format,
                None => config
                    .warnings
                    .push(format!("unknown WAREFLOW_LOG_FORMAT '{raw}'; using json")),
            }
        }

        config.seed_path = lookup("WAREFLOW_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    /// Apply command-line arguments (program name already stripped).
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        for arg in args {
            match arg.as_str() {
                "--api" => self.mode = Mode::Api,
                other => self.warnings.push(format!("ignoring argument '{other}'")),
            }
        }
        self
    }
}
