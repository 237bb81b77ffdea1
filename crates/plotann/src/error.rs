//! Error types for plotann operations.
//!
//! [`LayoutError`] covers invalid layout input and is raised before any
//! geometry is computed. [`PlotAnnError`] is the crate-level error that
//! wraps it together with I/O, configuration and export failures.

use std::io;

use thiserror::Error;

/// Invalid input for the layout engine.
///
/// Layer numbers in variants are 1-based, matching the automatic
/// "Layer k" labels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("architecture must contain at least one layer")]
    EmptyArchitecture,

    #[error("layer {layer} has no nodes")]
    EmptyLayer { layer: usize },

    #[error("invalid layer size `{value}`, expected a positive integer")]
    InvalidLayerSize { value: String },

    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),
}

/// The main error type for plotann operations.
#[derive(Debug, Error)]
pub enum PlotAnnError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PlotAnnError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
