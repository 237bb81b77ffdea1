//! Export of laid-out networks.
//!
//! This module provides the [`Exporter`] trait, the last stage of the
//! pipeline:
//!
//! ```text
//! Architecture + LayoutOptions
//!     ↓ layout
//! NetworkLayout
//!     ↓ primitives
//! Circles, lines and texts
//!     ↓ export (this module)
//! Output file
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! [`Error`] converts into [`PlotAnnError::Export`] at the crate boundary.
//!
//! [`PlotAnnError::Export`]: crate::PlotAnnError::Export

/// SVG export backend.
pub mod svg;

use crate::layout::NetworkLayout;

/// Abstraction for network export backends.
pub trait Exporter {
    /// Exports a laid-out network to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, [`Error::MissingOutput`] if the backend has nowhere to
    /// write, or [`Error::Io`] if writing the output fails.
    fn export_network(&mut self, layout: &NetworkLayout) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
    /// The exporter was built without an output path.
    MissingOutput,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::MissingOutput => write!(f, "no output path configured"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Render(_) | Self::MissingOutput => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
