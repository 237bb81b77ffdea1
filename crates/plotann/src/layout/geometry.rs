//! Geometry phase: node centers, radius and edge endpoints.
//!
//! Nothing in this phase knows about labels or colors; it produces plain
//! position records that the decoration phase turns into final nodes and
//! edges.

use log::debug;

use plotann_core::geometry::Point;

use super::NodeIndex;
use crate::{Architecture, LayoutOptions};

/// Share of an edge's span used to offset its label from the midpoint.
const EDGE_LABEL_OFFSET: f32 = 0.1;

/// Positions of every node and edge of a network.
#[derive(Debug, Clone)]
pub(super) struct Placement {
    pub radius: f32,
    pub layer_x: Vec<f32>,
    pub nodes: Vec<Vec<Point>>,
    pub edges: Vec<Vec<Vec<EdgeGeometry>>>,
}

/// Endpoints of a single connection.
#[derive(Debug, Clone, Copy)]
pub(super) struct EdgeGeometry {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub start: Point,
    pub end: Point,
}

/// Computes the placement for `architecture`.
///
/// The architecture is already validated, so both the layer count and the
/// largest layer are non-zero.
pub(super) fn place(architecture: &Architecture, options: &LayoutOptions) -> Placement {
    let layer_count = architecture.layer_count();
    let max_layer_size = architecture.max_layer_size();

    let v_spacing = options.height() / max_layer_size as f32;
    let h_spacing = options.width() / layer_count as f32;
    let radius = (v_spacing + h_spacing) / 2.0 * options.radius() / 10.0;

    debug!(v_spacing, h_spacing, radius; "Spacing computed");

    // Layers are spread over `h_spacing * (layer_count - 1)` and centered.
    let net_left = (options.width() - h_spacing * (layer_count - 1) as f32) / 2.0;
    let half_height = options.height() / 2.0;

    let layer_x: Vec<f32> = (0..layer_count)
        .map(|layer| net_left + layer as f32 * h_spacing)
        .collect();

    let nodes: Vec<Vec<Point>> = architecture
        .layers()
        .iter()
        .zip(&layer_x)
        .map(|(&layer_size, &x)| {
            let layer_top = v_spacing * (layer_size - 1) as f32 / 2.0 + half_height;
            (0..layer_size)
                .map(|position| Point::new(x, layer_top - position as f32 * v_spacing))
                .collect()
        })
        .collect();

    let edges = place_edges(architecture, options, &nodes, radius);

    Placement {
        radius,
        layer_x,
        nodes,
        edges,
    }
}

/// Returns true if no edge may end at `target` because it is a bias unit.
pub(super) fn is_bias_target(architecture: &Architecture, bias: bool, target: NodeIndex) -> bool {
    bias && target.position() == 0 && !architecture.is_last_layer(target.layer())
}

fn place_edges(
    architecture: &Architecture,
    options: &LayoutOptions,
    nodes: &[Vec<Point>],
    radius: f32,
) -> Vec<Vec<Vec<EdgeGeometry>>> {
    nodes
        .windows(2)
        .enumerate()
        .map(|(layer, pair)| {
            let (sources, targets) = (&pair[0], &pair[1]);
            sources
                .iter()
                .enumerate()
                .map(|(source_position, &source_center)| {
                    let source = NodeIndex::new(layer, source_position);
                    targets
                        .iter()
                        .enumerate()
                        .map(|(target_position, &target_center)| {
                            (NodeIndex::new(layer + 1, target_position), target_center)
                        })
                        .filter(|(target, _)| {
                            !is_bias_target(architecture, options.bias(), *target)
                        })
                        .map(|(target, target_center)| {
                            let (start, end) = if options.edge_from_center() {
                                (source_center, target_center)
                            } else {
                                inset_endpoints(source_center, target_center, radius)
                            };
                            EdgeGeometry {
                                source,
                                target,
                                start,
                                end,
                            }
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Moves both endpoints of a segment inward by `inset` along the segment.
///
/// Coincident endpoints are returned unchanged.
pub(super) fn inset_endpoints(start: Point, end: Point, inset: f32) -> (Point, Point) {
    match end.sub_point(start).normalize() {
        Some(direction) => {
            let offset = direction.scale(inset);
            (start.add_point(offset), end.sub_point(offset))
        }
        None => (start, end),
    }
}

/// Computes where an edge label sits and how it is rotated.
///
/// The rotation is the slope angle of the edge in degrees; a vertical edge
/// is treated as 90°. The label is shifted from the midpoint along the edge
/// by a tenth of its span (times `spacing`), towards the end of the edge for
/// descending edges and towards the start otherwise, which together with a
/// bottom text anchor keeps the text above the line.
pub(super) fn edge_label_anchor(start: Point, end: Point, spacing: f32) -> (Point, f32) {
    let delta = end.sub_point(start);
    let rotation = if delta.x() == 0.0 {
        90.0
    } else {
        (delta.y() / delta.x()).atan().to_degrees()
    };

    let direction = if rotation < 0.0 { 1.0 } else { -1.0 };
    let offset = delta.scale(direction * EDGE_LABEL_OFFSET * spacing);

    (start.midpoint(end).add_point(offset), rotation)
}
