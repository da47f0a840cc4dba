//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::traversal::TraversalKind;
use crate::view::ViewKind;

/// Incremental binary tree builder: traversals and silhouette views
#[derive(Parser, Debug)]
#[command(name = "treelab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (can be repeated: -d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree from an edit script and print a traversal
    Traverse {
        /// Traversal algorithm
        #[arg(value_enum)]
        kind: TraversalKind,
        /// Edit script file (stdin when omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        script: Option<PathBuf>,
    },

    /// Build a tree from an edit script and print a silhouette view
    View {
        /// View direction
        #[arg(value_enum)]
        kind: ViewKind,
        /// Edit script file (stdin when omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        script: Option<PathBuf>,
    },

    /// Render the presentation tree and its derived binary tree
    Show {
        /// Edit script file (stdin when omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        script: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
