//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Compute the skyline silhouette of axis-aligned buildings
#[derive(Parser, Debug)]
#[command(name = "skyline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where buildings come from. Without files or -b, stdin is read.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Files with one building per line, e.g. [1,4,1]
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Building given inline (repeatable), e.g. -b "[1,4,1]"
    #[arg(short = 'b', long = "building", value_name = "BUILDING")]
    pub buildings: Vec<String>,
}

impl InputArgs {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.buildings.is_empty()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the collapsed skyline, one building per line
    Build {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the line draw calls outlining the skyline
    Lines {
        #[command(flatten)]
        input: InputArgs,

        /// Map to screen coordinates using the [render] settings
        #[arg(long)]
        scaled: bool,
    },

    /// Show the internal skyline tree
    Tree {
        #[command(flatten)]
        input: InputArgs,

        /// Rebalance the tree before showing it (not supported yet)
        #[arg(long)]
        balance: bool,
    },

    /// Run the seven-building sample scene
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file location
    Path,
}
