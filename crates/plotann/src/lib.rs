//! plotann - Schematic diagrams of layered neural networks.
//!
//! Nodes are drawn as circles, connections as lines, with optional bias
//! units, labels and colors, laid out automatically within a bounded
//! drawing area.
//!
//! The pipeline has three stages: an [`Architecture`] and [`LayoutOptions`]
//! are turned into a [`layout::NetworkLayout`], which is flattened into
//! [`Primitives`] and finally exported, for example to SVG.

pub mod config;
pub mod export;
pub mod layout;

mod architecture;
mod error;
mod options;
mod primitives;

pub use plotann_core::{color, draw, geometry};

pub use architecture::Architecture;
pub use error::{LayoutError, PlotAnnError};
pub use options::{Decoration, LayoutOptions};
pub use primitives::Primitives;

use log::{debug, info, trace};

use config::{AppConfig, StyleConfig};
use layout::NetworkLayout;

/// Builder for laying out and rendering networks.
///
/// # Examples
///
/// ```
/// use plotann::{Architecture, Decoration, LayoutOptions, PlotBuilder};
///
/// let architecture: Architecture = "2,3,1".parse().unwrap();
/// let builder = PlotBuilder::new(
///     LayoutOptions::default()
///         .with_bias(true)
///         .with_node_labels(Decoration::Auto),
/// );
///
/// let layout = builder.layout(&architecture).unwrap();
/// assert_eq!(layout.edge_group_counts(), vec![4, 3]);
///
/// let svg = builder.render_svg(&layout).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlotBuilder {
    options: LayoutOptions,
    style: StyleConfig,
}

impl PlotBuilder {
    /// Creates a builder with the given layout options and the default style.
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            style: StyleConfig::default(),
        }
    }

    /// Creates a builder from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlotAnnError::Config`] if the `[layout]` section holds an
    /// invalid color.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlotAnnError> {
        Ok(Self {
            options: config.layout().to_options()?,
            style: config.style().clone(),
        })
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Lays out `architecture` with the builder's options.
    ///
    /// # Errors
    ///
    /// Returns [`PlotAnnError::Layout`] for invalid options.
    pub fn layout(&self, architecture: &Architecture) -> Result<NetworkLayout, PlotAnnError> {
        let layout = layout::layout(architecture, &self.options)?;
        trace!(layout:?; "Layout ready for rendering");
        Ok(layout)
    }

    /// Renders a layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PlotAnnError::Export`] if the style is invalid.
    pub fn render_svg(&self, layout: &NetworkLayout) -> Result<String, PlotAnnError> {
        info!(
            nodes = layout.node_count(),
            edges = layout.edge_count();
            "Rendering SVG"
        );

        let svg = export::svg::SvgBuilder::new()
            .with_style(&self.style)
            .build()?;
        let document = svg.render_network(layout).to_string();

        debug!(bytes = document.len(); "SVG rendered successfully");
        Ok(document)
    }

    /// Lays out `architecture` and writes the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotAnnError::Layout`] for invalid options and
    /// [`PlotAnnError::Export`] if rendering or writing fails.
    pub fn write_svg(&self, architecture: &Architecture, path: &str) -> Result<(), PlotAnnError> {
        let layout = self.layout(architecture)?;

        let mut svg = export::svg::SvgBuilder::new()
            .with_output(path)
            .with_style(&self.style)
            .build()?;
        export::Exporter::export_network(&mut svg, &layout)?;

        Ok(())
    }
}
