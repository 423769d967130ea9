//! Command-line flags for the action binary.
//!
//! Action inputs come from the environment; the flags here only control
//! logging and where inputs are looked up.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sass_build_core::DEFAULT_INPUT_PREFIX;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "sass-build",
    version,
    about = "Compile Sass/SCSS to CSS from GitHub Action inputs",
    long_about = "Compile a Sass/SCSS entry file to CSS.\n\n\
                  Inputs are read from INPUT_* environment variables, e.g.\n\
                  INPUT_SOURCE=src/main.scss INPUT_DESTINATION=assets/css/main.css"
)]
pub struct Cli {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix of the environment variables holding action inputs.
    #[arg(long = "input-prefix", value_name = "PREFIX", default_value = DEFAULT_INPUT_PREFIX)]
    pub input_prefix: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Build logging configuration from the flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn_and_runner_prefix() {
        let cli = Cli::try_parse_from(["sass-build"]).unwrap();
        let config = cli.log_config();
        assert_eq!(cli.input_prefix, "INPUT_");
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn explicit_level_overrides_verbosity() {
        let cli = Cli::try_parse_from([
            "sass-build",
            "-v",
            "--log-level",
            "error",
            "--log-format",
            "json",
            "--color",
            "never",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
    }

    #[test]
    fn verbosity_flags_raise_level() {
        let cli = Cli::try_parse_from(["sass-build", "-vv"]).unwrap();
        assert_eq!(cli.log_config().level_filter, LevelFilter::DEBUG);
    }

    #[test]
    fn input_prefix_can_be_overridden() {
        let cli = Cli::try_parse_from(["sass-build", "--input-prefix", "SASS_"]).unwrap();
        assert_eq!(cli.input_prefix, "SASS_");
    }
}
