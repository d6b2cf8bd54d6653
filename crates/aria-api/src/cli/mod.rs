//! CLI command definitions for the `aria` binary.
//!
//! Uses clap derive macros for argument parsing. Two modes: `serve` runs the
//! relay HTTP server, `chat` runs the terminal client against a relay.

pub mod chat;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Forum-scanning AI research briefing agent.
#[derive(Parser)]
#[command(name = "aria", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay HTTP server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 8787)]
        port: u16,

        /// Host to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Chat with ARIA in the terminal.
    Chat {
        /// Base URL of a running relay server.
        #[arg(long, default_value = "http://127.0.0.1:8787")]
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
