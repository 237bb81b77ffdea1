//! Flat drawable primitives derived from a [`NetworkLayout`].

use log::debug;

use plotann_core::{
    draw::{Canvas, Circle, Drawable, LayeredOutput, Line, Text, TextAnchor, TextDefinition},
    geometry::Bounds,
};

use crate::layout::NetworkLayout;

/// Font size of the labels drawn beneath layers.
const LAYER_LABEL_FONT_SIZE: u16 = 10;

/// The circles, lines and texts of a laid-out network.
///
/// Unlabeled nodes and edges contribute no text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Primitives {
    circles: Vec<Circle>,
    lines: Vec<Line>,
    texts: Vec<Text>,
}

impl Primitives {
    /// Builds the primitive set for `layout`, using `text` for node and edge
    /// labels.
    pub fn from_layout(layout: &NetworkLayout, text: &TextDefinition) -> Self {
        let circles: Vec<Circle> = layout
            .nodes()
            .map(|node| {
                Circle::new(node.center(), node.radius(), node.stroke().clone())
                    .with_fill(node.fill())
            })
            .collect();

        let lines: Vec<Line> = layout
            .all_edges()
            .map(|edge| Line::new(edge.start(), edge.end(), edge.stroke().clone()))
            .collect();

        let mut layer_text = text.clone();
        layer_text.set_font_size(LAYER_LABEL_FONT_SIZE);

        let layer_labels = layout
            .layer_labels()
            .iter()
            .map(|label| Text::new(layer_text.clone(), label.text().clone(), label.position()));

        let node_labels = layout.nodes().filter_map(|node| {
            let label = node.label()?;
            Some(Text::new(text.clone(), label.clone(), node.center()))
        });

        let edge_labels = layout.all_edges().filter_map(|edge| {
            let label = edge.label()?;
            Some(
                Text::new(text.clone(), label.clone(), edge.label_position())
                    .with_rotation(edge.label_rotation())
                    .with_anchor(TextAnchor::Bottom),
            )
        });

        let texts: Vec<Text> = layer_labels
            .chain(node_labels)
            .chain(edge_labels)
            .filter(|text| !text.content().is_empty())
            .collect();

        debug!(
            circles = circles.len(),
            lines = lines.len(),
            texts = texts.len();
            "Primitives collected"
        );

        Self {
            circles,
            lines,
            texts,
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.circles.len() + self.lines.len() + self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All primitives in drawing order: edges, nodes, then labels.
    pub fn drawables(&self) -> impl Iterator<Item = &dyn Drawable> {
        let lines = self.lines.iter().map(|line| line as &dyn Drawable);
        let circles = self.circles.iter().map(|circle| circle as &dyn Drawable);
        let texts = self.texts.iter().map(|text| text as &dyn Drawable);
        lines.chain(circles).chain(texts)
    }

    /// Extent of all primitives in layout space, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.drawables()
            .map(|drawable| drawable.bounds())
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Renders every primitive onto `canvas`.
    pub fn render(&self, canvas: &Canvas) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for drawable in self.drawables() {
            output.merge(drawable.render_to_layers(canvas));
        }
        output
    }
}
