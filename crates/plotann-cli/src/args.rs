//! Command-line argument definitions for the plotann CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the architecture, input/output paths,
//! configuration file and logging verbosity. The decoration flags override
//! the `[layout]` section of the configuration file.

use clap::Parser;

/// Command-line arguments for the plotann network plotting tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Layer sizes, input layer first
    #[arg(help = "Comma-separated layer sizes, e.g. 2,3,1")]
    pub architecture: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Draw the top node of every hidden layer as a bias unit
    #[arg(long)]
    pub bias: bool,

    /// Label every layer with "Layer k"
    #[arg(long)]
    pub layer_labels: bool,

    /// Label nodes with indexed inputs and activations
    #[arg(long)]
    pub node_labels: bool,

    /// Label edges with indexed weights
    #[arg(long)]
    pub edge_labels: bool,

    /// Color the input layer and the other layers differently
    #[arg(long)]
    pub node_colors: bool,

    /// Color the first edge group and the other edges differently
    #[arg(long)]
    pub edge_colors: bool,

    /// Let edges end at node outlines instead of node centers
    #[arg(long)]
    pub edge_from_border: bool,
}
