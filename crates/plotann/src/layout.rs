//! Layout engine for layered networks.
//!
//! A layout is computed in two phases. The geometry phase places node
//! centers and edge endpoints; the decoration phase attaches labels and
//! colors and produces the final immutable [`NetworkLayout`]. Options are
//! validated before either phase runs, so both phases are infallible.

mod decorate;
mod geometry;

use log::{debug, info, trace, warn};

use plotann_core::{
    color::Color,
    draw::{Label, StrokeDefinition, TextDefinition},
    geometry::{Point, Size},
};

use crate::{Architecture, LayoutOptions, Primitives, error::LayoutError, options::Decoration};

/// Position of a node: its layer and its index within the layer, both 0-based.
///
/// Index 0 is the topmost node of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex {
    layer: usize,
    position: usize,
}

impl NodeIndex {
    pub fn new(layer: usize, position: usize) -> Self {
        Self { layer, position }
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// A laid-out node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    index: NodeIndex,
    center: Point,
    radius: f32,
    stroke: StrokeDefinition,
    fill: Color,
    label: Option<Label>,
    is_bias: bool,
}

impl Node {
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Outline color and node line width.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    /// The node label, `None` when the node is unlabeled.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Returns true for the bias unit of a hidden layer.
    pub fn is_bias(&self) -> bool {
        self.is_bias
    }
}

/// A laid-out connection between two nodes of adjacent layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeIndex,
    target: NodeIndex,
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
    label: Option<Label>,
    label_position: Point,
    label_rotation: f32,
}

impl Edge {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Anchor of the label text; the text's bottom edge sits on this point.
    ///
    /// Computed for every edge, labeled or not.
    pub fn label_position(&self) -> Point {
        self.label_position
    }

    /// Slope of the edge in degrees, counter-clockwise.
    pub fn label_rotation(&self) -> f32 {
        self.label_rotation
    }
}

/// A label drawn beneath a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerLabel {
    layer: usize,
    text: Label,
    position: Point,
}

impl LayerLabel {
    /// 0-based layer index.
    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn text(&self) -> &Label {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// The result of a layout call.
///
/// Nodes are grouped by layer, top to bottom. Edges are grouped per pair of
/// adjacent layers, then per source node, then by destination in order.
/// Coordinates use a y-up frame with the origin at the bottom-left corner of
/// the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLayout {
    size: Size,
    radius: f32,
    layers: Vec<Vec<Node>>,
    edges: Vec<Vec<Vec<Edge>>>,
    layer_labels: Vec<LayerLabel>,
}

impl NetworkLayout {
    /// Logical canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Radius shared by all nodes.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn layers(&self) -> &[Vec<Node>] {
        &self.layers
    }

    pub fn edges(&self) -> &[Vec<Vec<Edge>>] {
        &self.edges
    }

    pub fn layer_labels(&self) -> &[LayerLabel] {
        &self.layer_labels
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.layers.get(index.layer)?.get(index.position)
    }

    /// All nodes in layer-major, top-to-bottom order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.layers.iter().flatten()
    }

    /// All edges ordered by source layer, source node and destination.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_group_counts().iter().sum()
    }

    /// Number of edges between each pair of adjacent layers.
    pub fn edge_group_counts(&self) -> Vec<usize> {
        self.edges
            .iter()
            .map(|group| group.iter().map(Vec::len).sum())
            .collect()
    }

    /// Flattens the layout into drawable primitives.
    pub fn primitives(&self, text: &TextDefinition) -> Primitives {
        Primitives::from_layout(self, text)
    }
}

/// Computes network layouts for a fixed set of options.
///
/// # Examples
///
/// ```
/// use plotann::{Architecture, LayoutOptions, layout::Engine};
///
/// let architecture = Architecture::new(vec![2, 3, 1]).unwrap();
/// let layout = Engine::new(LayoutOptions::default())
///     .calculate(&architecture)
///     .unwrap();
///
/// assert_eq!(layout.edge_group_counts(), vec![6, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: LayoutOptions,
}

impl Engine {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lays out `architecture`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidCanvas`] for non-finite or non-positive
    /// sizes.
    pub fn calculate(&self, architecture: &Architecture) -> Result<NetworkLayout, LayoutError> {
        info!(architecture:%; "Calculating network layout");

        validate_options(&self.options)?;
        if self.options.bias() {
            warn_bias_only_layers(architecture);
        }

        let placement = geometry::place(architecture, &self.options);
        let edge_count: usize = placement.edges.iter().flatten().map(Vec::len).sum();

        warn_unused_entries(
            "layer_labels",
            self.options.layer_labels(),
            architecture.layer_count(),
        );
        warn_unused_entries(
            "node_labels",
            self.options.node_labels(),
            architecture.node_count(),
        );
        warn_unused_entries(
            "node_colors",
            self.options.node_colors(),
            architecture.node_count(),
        );
        warn_unused_entries("edge_labels", self.options.edge_labels(), edge_count);
        warn_unused_entries("edge_colors", self.options.edge_colors(), edge_count);

        let layout = decorate::decorate(architecture, &self.options, placement);

        debug!(
            nodes = layout.node_count(),
            edges = layout.edge_count(),
            layer_labels = layout.layer_labels().len();
            "Network layout calculated"
        );
        trace!(layout:?; "Network layout");

        Ok(layout)
    }
}

/// Lays out `architecture` with `options`.
///
/// Shorthand for `Engine::new(options.clone()).calculate(architecture)`.
pub fn layout(
    architecture: &Architecture,
    options: &LayoutOptions,
) -> Result<NetworkLayout, LayoutError> {
    Engine::new(options.clone()).calculate(architecture)
}

fn validate_options(options: &LayoutOptions) -> Result<(), LayoutError> {
    let positive = [
        ("width", options.width()),
        ("height", options.height()),
        ("radius", options.radius()),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::InvalidCanvas(format!(
                "{name} must be finite and positive, got {value}"
            )));
        }
    }

    let non_negative = [
        ("node line width", options.node_line_width()),
        ("edge line width", options.edge_line_width()),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(LayoutError::InvalidCanvas(format!(
                "{name} must be finite and non-negative, got {value}"
            )));
        }
    }

    if !options.edge_label_spacing().is_finite() {
        return Err(LayoutError::InvalidCanvas(format!(
            "edge label spacing must be finite, got {}",
            options.edge_label_spacing()
        )));
    }

    Ok(())
}

/// Hidden layers whose only node is a bias unit receive no edges.
fn warn_bias_only_layers(architecture: &Architecture) {
    for (layer, &size) in architecture.layers().iter().enumerate().skip(1) {
        if size == 1 && !architecture.is_last_layer(layer) {
            warn!(layer = layer + 1; "Hidden layer holds only a bias unit and has no incoming edges");
        }
    }
}

fn warn_unused_entries<T>(option: &str, decoration: &Decoration<T>, needed: usize) {
    let provided = decoration.explicit_len();
    if provided > needed {
        warn!(option, provided, needed; "Ignoring extra explicit entries");
    }
}
