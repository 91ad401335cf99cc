use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the tstools binary.
#[derive(Parser, Debug)]
#[command(
    name = "tstools",
    version,
    about = "Structural queries over a checked TypeScript program"
)]
pub struct CliArgs {
    /// Enable color and formatting in output. Defaults to on when stdout is a
    /// terminal.
    #[arg(long, global = true)]
    pub pretty: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve a tsconfig.json and list the project's input files.
    Config {
        /// Path to tsconfig.json or a directory containing it.
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print modifier and container flags for every node of a program snapshot.
    Classify {
        /// Program snapshot (JSON).
        snapshot: PathBuf,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Also list nodes with neither modifiers nor container flags.
        #[arg(long)]
        all: bool,
    },

    /// Print inherited members of every class and interface in a program snapshot.
    Heritage {
        /// Program snapshot (JSON).
        snapshot: PathBuf,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}
