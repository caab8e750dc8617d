//! Command-line interface definitions and parsing
//!
//! This module defines the CLI for taginput using the `clap` crate.
//!
//! # Commands
//!
//! - **edit**: Interactive tag editor in the terminal (default)
//! - **add**: Feed candidates through the tag input and print the result
//! - **check**: Show which validation modes accept a candidate
//! - **config**: Inspect or initialise the configuration file
//!
//! Input options (`--validate`, `--allow-duplicates`, `--read-only`, ...) are
//! global and override values from the configuration file.
//!
//! # Examples
//!
//! ```bash
//! taginput add --validate email a@b.io nope c@d.io
//! taginput -t rust -t go edit
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::TagInputConfig;
use crate::tags::SeedTag;
use crate::validation::ValidationMode;

/// Options that shape the tag input, overriding the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Validation applied to new tags
    #[arg(long = "validate", value_name = "MODE", global = true)]
    pub validate: Option<ValidationMode>,

    /// Custom validation regex (takes precedence over --validate)
    #[arg(long = "pattern", value_name = "REGEX", global = true)]
    pub pattern: Option<String>,

    /// Allow the same tag more than once
    #[arg(long = "allow-duplicates", global = true)]
    pub allow_duplicates: bool,

    /// Show tags without allowing changes
    #[arg(long = "read-only", global = true)]
    pub read_only: bool,

    /// Maximum number of tags
    #[arg(long = "limit", value_name = "N", global = true)]
    pub limit: Option<usize>,

    /// Initial tags (can specify multiple: -t tag1 -t tag2)
    #[arg(short = 't', long = "tag", value_name = "TAG", global = true)]
    pub tags: Vec<String>,

    /// Placeholder shown in the empty entry field
    #[arg(long = "placeholder", value_name = "TEXT", global = true)]
    pub placeholder: Option<String>,

    /// Commit the pending entry when the editor loses focus
    #[arg(long = "add-on-blur", global = true)]
    pub add_on_blur: bool,
}

impl InputArgs {
    /// Overlay these arguments onto a loaded configuration
    ///
    /// Flags only ever switch behaviour on; seed tags given on the command
    /// line replace the configured seed.
    pub fn apply(&self, config: &mut TagInputConfig) {
        if let Some(mode) = self.validate {
            config.validate = mode;
            if self.pattern.is_none() {
                config.pattern = None;
            }
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = Some(pattern.clone());
        }
        config.allow_duplicates |= self.allow_duplicates;
        config.read_only |= self.read_only;
        config.add_tag_on_blur |= self.add_on_blur;
        if let Some(limit) = self.limit {
            config.limit = Some(limit);
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder.clone_from(placeholder);
        }
        if !self.tags.is_empty() {
            config.tags = self.tags.iter().cloned().map(SeedTag::from).collect();
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "taginput")]
#[command(about = "Turn typed text into a validated list of tags", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Use this configuration file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Edit tags interactively (default)
    #[command(visible_alias = "e")]
    Edit {
        /// Title shown on the input
        #[arg(long = "title", value_name = "TEXT", default_value = "Tags")]
        title: String,
    },

    /// Add candidates in order and print the resulting tags
    #[command(visible_alias = "a")]
    Add {
        /// Candidate tags
        #[arg(value_name = "CANDIDATE", required = true)]
        candidates: Vec<String>,

        /// Print every change notification as a JSON line
        #[arg(long = "events")]
        events: bool,
    },

    /// Show which validation modes accept a candidate
    Check {
        /// Candidate to check (trimmed before matching)
        #[arg(value_name = "CANDIDATE")]
        candidate: String,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the configuration file location
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Edit if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Edit {
            title: "Tags".to_string(),
        })
    }
}
