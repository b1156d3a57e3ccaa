//! Command-line argument parsing for mcpscout
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::errors::{Result, ScoutError};
use crate::ranking::{HostingPreference, RankRequest};
use crate::source::{CatalogSource, FileCatalogSource, HttpCatalogSource};

/// mcpscout - Find the right MCP server in the awesome-mcp-servers catalog
#[derive(Parser, Debug)]
#[command(name = "mcpscout")]
#[command(version)]
#[command(about = "Browse and rank the awesome-mcp-servers catalog", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog document URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Read the catalog from a local Markdown file instead of the network
    #[arg(long, global = true, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print structured JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print the result)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog entries grouped by category
    List {
        /// Only show categories containing this text (case-insensitive)
        #[arg(long)]
        category: Option<String>,
    },

    /// Recommend servers for a problem description
    Recommend {
        /// What you need the server for
        #[arg(value_name = "PROBLEM")]
        problem: String,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Preferred implementation language
        #[arg(short, long)]
        language: Option<String>,

        /// Hosting preference: cloud, local or any
        #[arg(long, default_value = "any")]
        hosting: HostingPreference,
    },

    /// List categories with entry counts
    Categories,

    /// Display current configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Path of the config file in effect
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Apply command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_secs = timeout;
        }
    }

    /// Build the document source selected by flags and config
    pub fn catalog_source(&self, config: &Config) -> Result<Box<dyn CatalogSource>> {
        if config.source.timeout_secs == 0 {
            return Err(ScoutError::ConfigError(
                "timeout must be at least 1 second".to_string(),
            ));
        }

        match &self.file {
            Some(path) => Ok(Box::new(FileCatalogSource::new(
                path.clone(),
                config.source.max_document_bytes,
            ))),
            None => Ok(Box::new(HttpCatalogSource::new(
                Some(config.source.url.clone()),
                Duration::from_secs(config.source.timeout_secs),
                config.source.max_document_bytes,
            )?)),
        }
    }
}

impl Commands {
    /// Ranking request for the recommend subcommand
    pub fn rank_request(&self, config: &Config) -> Option<RankRequest> {
        match self {
            Commands::Recommend {
                problem,
                max_results,
                language,
                hosting,
            } => {
                let mut request = RankRequest::new(problem.clone())
                    .with_max_results(max_results.unwrap_or(config.recommend.max_results))
                    .with_hosting(*hosting);
                if let Some(language) = language {
                    request = request.with_language(language.clone());
                }
                Some(request)
            }
            _ => None,
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Log filter used when RUST_LOG is not set
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "mcpscout=info",
            Verbosity::VeryVerbose => "mcpscout=debug",
        }
    }

    /// Check if should show the fetch spinner
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(parse(&["mcpscout", "-q", "categories"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        assert_eq!(parse(&["mcpscout", "categories"]).verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        assert_eq!(parse(&["mcpscout", "categories", "-v"]).verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_very_verbose() {
        assert_eq!(parse(&["mcpscout", "-vv", "list"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_recommend_defaults() {
        let args = parse(&["mcpscout", "recommend", "postgres database"]);
        let request = args.command.rank_request(&Config::default()).unwrap();

        assert_eq!(request.problem, "postgres database");
        assert_eq!(request.max_results, 5);
        assert_eq!(request.hosting, HostingPreference::Any);
        assert!(request.language.is_none());
    }

    #[test]
    fn test_recommend_options() {
        let args = parse(&[
            "mcpscout", "recommend", "browser", "-n", "3", "--language", "python", "--hosting", "LOCAL",
        ]);
        let request = args.command.rank_request(&Config::default()).unwrap();

        assert_eq!(request.max_results, 3);
        assert_eq!(request.language.as_deref(), Some("python"));
        assert_eq!(request.hosting, HostingPreference::Local);
    }

    #[test]
    fn test_invalid_hosting_rejected() {
        assert!(Args::try_parse_from(["mcpscout", "recommend", "x", "--hosting", "edge"]).is_err());
    }

    #[test]
    fn test_url_and_file_conflict() {
        let result = Args::try_parse_from([
            "mcpscout", "--url", "http://x", "--file", "README.md", "list",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_category() {
        let args = parse(&["mcpscout", "list", "--category", "data"]);
        match args.command {
            Commands::List { category } => assert_eq!(category.as_deref(), Some("data")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let args = parse(&["mcpscout", "--url", "http://mirror/README.md", "--timeout", "7", "list"]);
        let mut config = Config::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.source.url, "http://mirror/README.md");
        assert_eq!(config.source.timeout_secs, 7);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = parse(&["mcpscout", "--timeout", "0", "list"]);
        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert!(args.catalog_source(&config).is_err());
    }

    #[test]
    fn test_file_source_selected() {
        let args = parse(&["mcpscout", "--file", "README.md", "list"]);
        let source = args.catalog_source(&Config::default()).unwrap();
        assert_eq!(source.describe(), "README.md");
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert_eq!(Verbosity::Normal.filter_directive(), "warn");
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
    }
}
