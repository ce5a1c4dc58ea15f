//! CLI argument parsing for planheader

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "planheader")]
#[command(author, version, about = "Presentation rules for plan card headers", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every known plan slug
    Plans,

    /// Show the discount tooltip template for a site owning the given plan
    Tooltip {
        /// Slug of the plan the site owns
        #[arg(required = true)]
        slug: String,
    },

    /// Evaluate the presentation rules for a props file
    Check {
        /// YAML or JSON props file
        #[arg(required = true)]
        props: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Render the complete header for a props file
    Render {
        /// YAML or JSON props file
        #[arg(required = true)]
        props: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
