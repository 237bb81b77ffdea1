//! End-to-end properties of computed network layouts.

use float_cmp::approx_eq;
use proptest::prelude::*;

use plotann::{
    Architecture, Decoration, LayoutOptions,
    draw::TextDefinition,
    layout::{NetworkLayout, layout},
};

fn compute(layers: &[usize], options: &LayoutOptions) -> NetworkLayout {
    let architecture = Architecture::new(layers.to_vec()).expect("valid architecture");
    layout(&architecture, options).expect("layout succeeds")
}

#[test]
fn test_small_network_primitive_counts() {
    let layout = compute(&[2, 3, 1], &LayoutOptions::default());

    let sizes: Vec<usize> = layout.layers().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 3, 1]);
    assert_eq!(layout.edge_group_counts(), vec![6, 3]);

    let primitives = layout.primitives(&TextDefinition::new());
    assert_eq!(primitives.circles().len(), 6);
    assert_eq!(primitives.lines().len(), 9);
    assert_eq!(primitives.len(), 15);
}

#[test]
fn test_bias_network_edge_counts() {
    let options = LayoutOptions::default().with_bias(true);
    let layout = compute(&[3, 4, 4, 2], &options);

    assert_eq!(layout.edge_group_counts(), vec![9, 12, 8]);
    assert!(
        layout
            .edges()
            .iter()
            .take(2)
            .flatten()
            .flatten()
            .all(|edge| edge.target().position() != 0)
    );
}

#[test]
fn test_short_explicit_node_labels() {
    let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let options = LayoutOptions::default().with_node_labels(Decoration::Explicit(labels));
    let layout = compute(&[2, 3, 2], &options);

    let labeled = layout.nodes().filter(|node| node.label().is_some()).count();
    assert_eq!(labeled, 3);
    assert!(layout.nodes().skip(3).all(|node| node.label().is_none()));
}

#[test]
fn test_edge_label_anchors_are_finite() {
    let options = LayoutOptions::default().with_edge_labels(Decoration::Auto);
    let layout = compute(&[5, 1, 5], &options);

    for edge in layout.all_edges() {
        assert!(edge.label_position().x().is_finite());
        assert!(edge.label_position().y().is_finite());
        assert!(edge.label_rotation().is_finite());
    }
}

fn architecture_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..8, 1..6)
}

proptest! {
    #[test]
    fn prop_layers_match_architecture(layers in architecture_strategy()) {
        let layout = compute(&layers, &LayoutOptions::default());

        prop_assert_eq!(layout.layers().len(), layers.len());
        for (nodes, &size) in layout.layers().iter().zip(&layers) {
            prop_assert_eq!(nodes.len(), size);
        }
    }

    #[test]
    fn prop_edge_counts_follow_bias_rule(
        layers in architecture_strategy(),
        bias in any::<bool>(),
    ) {
        let options = LayoutOptions::default().with_bias(bias);
        let layout = compute(&layers, &options);

        let expected: Vec<usize> = layers
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let (a, b) = (pair[0], pair[1]);
                let destination_is_last = index + 2 == layers.len();
                if bias && !destination_is_last { a * b - a } else { a * b }
            })
            .collect();
        prop_assert_eq!(layout.edge_group_counts(), expected);
    }

    #[test]
    fn prop_layer_nodes_are_stacked(
        layers in architecture_strategy(),
        width in 0.5f32..10.0,
        height in 0.5f32..10.0,
    ) {
        let options = LayoutOptions::default().with_canvas(width, height);
        let layout = compute(&layers, &options);
        let max_size = *layers.iter().max().unwrap();
        let v_spacing = height / max_size as f32;

        for nodes in layout.layers() {
            let x = nodes[0].center().x();
            for node in nodes {
                prop_assert_eq!(node.center().x(), x);
            }
            for pair in nodes.windows(2) {
                let step = pair[0].center().y() - pair[1].center().y();
                prop_assert!(step > 0.0);
                prop_assert!(approx_eq!(f32, step, v_spacing, epsilon = 0.0001));
            }
        }
    }

    #[test]
    fn prop_nodes_stay_inside_canvas(layers in architecture_strategy()) {
        let layout = compute(&layers, &LayoutOptions::default());
        for node in layout.nodes() {
            prop_assert!(node.center().x() > 0.0 && node.center().x() < 1.0);
            prop_assert!(node.center().y() > 0.0 && node.center().y() < 1.0);
        }
    }

    #[test]
    fn prop_inset_endpoints_touch_outline(
        layers in architecture_strategy(),
        radius in 0.5f32..3.0,
    ) {
        let options = LayoutOptions::default()
            .with_radius(radius)
            .with_edge_from_center(false);
        let layout = compute(&layers, &options);

        for edge in layout.all_edges() {
            let source = layout.node(edge.source()).unwrap().center();
            let target = layout.node(edge.target()).unwrap().center();
            prop_assert!(approx_eq!(
                f32,
                edge.start().distance(source),
                layout.radius(),
                epsilon = 0.0001
            ));
            prop_assert!(approx_eq!(
                f32,
                edge.end().distance(target),
                layout.radius(),
                epsilon = 0.0001
            ));
        }
    }
}
