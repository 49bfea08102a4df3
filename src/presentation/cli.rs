//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Flags that override configuration are collected into `CliOverrides`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CliOverrides, ColorMode};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Stackpilot - build, deploy and clean up a serverless stack
#[derive(Parser, Debug)]
#[command(name = "stackpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the final result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./stackpilot.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project directory containing the template
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "DIR")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the dependency layers, then the functions against stub manifests
    Build {
        /// Build resources in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Build (unless skipped), validate and deploy the stack
    Deploy {
        /// Build resources in parallel
        #[arg(long)]
        parallel: bool,

        /// Deploy the existing build output
        #[arg(long)]
        skip_build: bool,

        /// Stack name
        #[arg(long)]
        stack: Option<String>,

        /// Region
        #[arg(long)]
        region: Option<String>,
    },

    /// Find and delete leftover cloud resources
    Cleanup {
        /// Region
        #[arg(long)]
        region: Option<String>,

        /// Answer yes to every prompt
        #[arg(short, long)]
        yes: bool,

        /// Scan and report only
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the outputs of a deployed stack
    Outputs {
        /// Stack name
        #[arg(long)]
        stack: Option<String>,

        /// Region
        #[arg(long)]
        region: Option<String>,
    },
}

impl Cli {
    /// Flag values that override configuration and environment
    pub fn overrides(&self) -> CliOverrides {
        let (stack_name, region) = match &self.command {
            Commands::Build { .. } => (None, None),
            Commands::Deploy { stack, region, .. } | Commands::Outputs { stack, region } => {
                (stack.clone(), region.clone())
            }
            Commands::Cleanup { region, .. } => (None, region.clone()),
        };
        CliOverrides {
            stack_name,
            region,
            color: self.color.map(ColorMode::from),
        }
    }
}
