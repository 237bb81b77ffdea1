//! Decoration phase: labels, colors and strokes.
//!
//! Explicit label and color sequences are indexed by running counters over
//! nodes (layer-major, top to bottom) and edges (source layer, source node,
//! destination). Automatic labels and colors depend only on position.

use plotann_core::{
    color::Color,
    draw::{Label, StrokeDefinition},
    geometry::{Point, Size},
};

use super::{
    Edge, LayerLabel, NetworkLayout, Node, NodeIndex,
    geometry::{self, Placement},
};
use crate::{Architecture, LayoutOptions, options::Decoration};

pub(super) fn decorate(
    architecture: &Architecture,
    options: &LayoutOptions,
    placement: Placement,
) -> NetworkLayout {
    let Placement {
        radius,
        layer_x,
        nodes,
        edges,
    } = placement;

    let node_stroke = |color| StrokeDefinition::new(color, options.node_line_width());
    let edge_stroke = |color| StrokeDefinition::new(color, options.edge_line_width());

    let mut node_counter = 0;
    let layers: Vec<Vec<Node>> = nodes
        .into_iter()
        .enumerate()
        .map(|(layer, centers)| {
            centers
                .into_iter()
                .enumerate()
                .map(|(position, center)| {
                    let index = NodeIndex::new(layer, position);
                    let counter = node_counter;
                    node_counter += 1;
                    Node {
                        index,
                        center,
                        radius,
                        stroke: node_stroke(group_color(options.node_colors(), layer, counter)),
                        fill: Color::white(),
                        label: node_label(architecture, options, index, counter),
                        is_bias: layer > 0
                            && geometry::is_bias_target(architecture, options.bias(), index),
                    }
                })
                .collect()
        })
        .collect();

    let mut edge_counter = 0;
    let edges: Vec<Vec<Vec<Edge>>> = edges
        .into_iter()
        .enumerate()
        .map(|(group, sources)| {
            sources
                .into_iter()
                .map(|targets| {
                    targets
                        .into_iter()
                        .map(|placed| {
                            let counter = edge_counter;
                            edge_counter += 1;
                            let (label_position, label_rotation) = geometry::edge_label_anchor(
                                placed.start,
                                placed.end,
                                options.edge_label_spacing(),
                            );
                            Edge {
                                source: placed.source,
                                target: placed.target,
                                start: placed.start,
                                end: placed.end,
                                stroke: edge_stroke(group_color(
                                    options.edge_colors(),
                                    group,
                                    counter,
                                )),
                                label: edge_label(
                                    architecture,
                                    options,
                                    placed.source,
                                    placed.target,
                                    counter,
                                ),
                                label_position,
                                label_rotation,
                            }
                        })
                        .collect()
                })
                .collect()
        })
        .collect();

    let layer_labels: Vec<LayerLabel> = layer_x
        .iter()
        .enumerate()
        .filter_map(|(layer, &x)| {
            let text = match options.layer_labels() {
                Decoration::Off => None,
                Decoration::Auto => Some(Label::plain(format!("Layer {}", layer + 1))),
                Decoration::Explicit(_) => options.layer_labels().explicit(layer).map(Label::plain),
            }?;
            Some(LayerLabel {
                layer,
                text,
                position: Point::new(x, 0.0),
            })
        })
        .collect();

    NetworkLayout {
        size: Size::new(options.width(), options.height()),
        radius,
        layers,
        edges,
        layer_labels,
    }
}

/// Index shown in automatic labels for the node at `index`.
///
/// Counting starts at 1; with bias units enabled every layer but the last
/// starts at 0 so the bias unit is numbered 0.
fn label_index(architecture: &Architecture, bias: bool, index: NodeIndex) -> usize {
    if bias && !architecture.is_last_layer(index.layer()) {
        index.position()
    } else {
        index.position() + 1
    }
}

fn node_label(
    architecture: &Architecture,
    options: &LayoutOptions,
    index: NodeIndex,
    counter: usize,
) -> Option<Label> {
    match options.node_labels() {
        Decoration::Off => None,
        Decoration::Auto => {
            let symbol = if index.layer() == 0 { "x" } else { "a" };
            Some(Label::indexed(
                symbol,
                label_index(architecture, options.bias(), index).to_string(),
                format!("({})", index.layer() + 1),
            ))
        }
        Decoration::Explicit(_) => options.node_labels().explicit(counter).map(Label::plain),
    }
}

fn edge_label(
    architecture: &Architecture,
    options: &LayoutOptions,
    source: NodeIndex,
    target: NodeIndex,
    counter: usize,
) -> Option<Label> {
    match options.edge_labels() {
        Decoration::Off => None,
        Decoration::Auto => {
            let j = label_index(architecture, options.bias(), target);
            let i = label_index(architecture, options.bias(), source);
            Some(Label::indexed(
                "Θ",
                format!("{j},{i}"),
                format!("({})", source.layer() + 1),
            ))
        }
        Decoration::Explicit(_) => options.edge_labels().explicit(counter).map(Label::plain),
    }
}

/// Color for an item in `group` (a node layer or an edge group).
///
/// Automatic colors use the first palette entry for group 0 and the second
/// for every other group; missing explicit entries fall back to black.
fn group_color(colors: &Decoration<Color>, group: usize, counter: usize) -> Color {
    match colors {
        Decoration::Off => Color::default(),
        Decoration::Auto => Color::palette(if group == 0 { 0 } else { 1 }),
        Decoration::Explicit(_) => colors.explicit(counter).copied().unwrap_or_default(),
    }
}
