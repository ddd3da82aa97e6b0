//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_USER_AGENT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// Audits one URL and prints the report as JSON, or runs the HTTP boundary
/// with `--serve`.
#[derive(Debug, Clone, Parser)]
#[command(name = "page_audit", about = "Audit a web page and produce a scored report")]
pub struct Config {
    /// URL to audit (required unless --serve is given)
    pub url: Option<String>,

    /// Target keyword to analyze (repeatable); derived from the page when omitted
    #[arg(long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Ask the screenshot collaborator for viewport captures
    #[arg(long)]
    pub include_screenshot: bool,

    /// Per-request timeout in seconds for the primary page fetch
    #[arg(long, default_value_t = 20)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Run the HTTP API server instead of a one-shot audit
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP API server
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            keywords: Vec::new(),
            include_screenshot: false,
            timeout_seconds: 20,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            serve: false,
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 20);
        assert_eq!(config.port, 8080);
        assert!(!config.serve);
        assert!(!config.include_screenshot);
        assert!(config.keywords.is_empty());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_config_parses_url_and_keywords() {
        let config = Config::parse_from([
            "page_audit",
            "https://example.com",
            "--keyword",
            "rust",
            "--keyword",
            "audit",
        ]);
        assert_eq!(config.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.keywords, vec!["rust", "audit"]);
    }

    #[test]
    fn test_config_parses_serve_mode() {
        let config = Config::parse_from(["page_audit", "--serve", "--port", "9090"]);
        assert!(config.serve);
        assert_eq!(config.port, 9090);
        assert!(config.url.is_none());
    }
}
