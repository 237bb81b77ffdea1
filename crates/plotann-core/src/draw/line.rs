//! Straight line segment primitive used for network edges.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Canvas, Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point},
};

/// A straight segment between two absolute layout positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self { start, end, stroke }
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
}

impl Drawable for Line {
    fn render_to_layers(&self, canvas: &Canvas) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let start = canvas.to_screen(self.start);
        let end = canvas.to_screen(self.end);

        let line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y());
        let line = apply_stroke!(line, &self.stroke);

        output.add_to_layer(RenderLayer::Edge, Box::new(line));
        output
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_points(self.start, self.end)
    }
}
