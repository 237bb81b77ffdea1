//! Drawable primitives for network diagrams.
//!
//! A laid-out network is reduced to three kinds of primitives: [`Circle`]s
//! for nodes, [`Line`]s for edges and [`Text`]s for labels. Every primitive
//! stores absolute positions in layout space and implements [`Drawable`],
//! which renders it onto an explicit [`Canvas`].
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically ordered
//! during final SVG generation.

mod canvas;
mod circle;
mod layer;
mod line;
mod stroke;
mod text;

pub use canvas::Canvas;
pub use circle::Circle;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::Line;
pub use stroke::StrokeDefinition;
pub use text::{Label, Text, TextAnchor, TextDefinition};

use crate::geometry::Bounds;

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Positions are converted from layout space to screen space through
    /// `canvas`; the drawable itself never assumes a default surface.
    fn render_to_layers(&self, canvas: &Canvas) -> LayeredOutput;

    /// Returns the extent of this drawable in layout space.
    fn bounds(&self) -> Bounds;
}
