//! Command-line argument definitions for the Limner CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global flags select the configuration file and logging
//! verbosity; each [`Command`] covers one pipeline stage.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Limner tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Pipeline stage to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether a message asks for a diagram, and which kind
    Detect {
        /// The user message
        text: String,
    },

    /// Build the generation prompt for a diagram request
    Prompt {
        /// The user message
        text: String,

        /// Force the diagram type instead of resolving it from the message
        #[arg(short = 't', long = "type")]
        diagram_type: Option<String>,

        /// Print the system prompt before the request prompt
        #[arg(long)]
        with_system: bool,

        /// Write the prompt to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract Mermaid source from a model reply
    Extract {
        /// Path to the reply file, or `-` to read stdin
        #[arg(help = "Path to the reply file, or - for stdin")]
        input: String,

        /// Write the diagram source to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}
