//! Command-line interface for the terminal game.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ConfigError};

/// Teeko - four in a row, or a square, on a 5x5 board
#[derive(Parser, Debug)]
#[command(name = "teeko")]
#[command(version)]
pub struct Cli {
    /// TOML config file; missing file means defaults
    #[arg(short, long, default_value = "teeko.toml")]
    pub config: PathBuf,

    /// Cursor blink period in milliseconds
    #[arg(long)]
    pub blink_ms: Option<u32>,

    /// Player who moves first (a or b)
    #[arg(long)]
    pub first: Option<String>,

    /// Where log output goes
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config file values with command-line overrides applied on top.
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(ms) = self.blink_ms {
            config.blink_interval_ms = ms;
        }
        if let Some(first) = &self.first {
            config.first_player = first.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let cli = Cli::parse_from([
            "teeko",
            "--config",
            "/nonexistent/teeko.toml",
            "--blink-ms",
            "250",
            "--first",
            "b",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.blink_interval_ms, 250);
        assert_eq!(config.first_player, "b");
    }

    #[test]
    fn bad_override_fails_validation() {
        let cli = Cli::parse_from(["teeko", "-c", "/nonexistent/teeko.toml", "--blink-ms", "0"]);
        assert!(cli.resolve().is_err());
    }
}
