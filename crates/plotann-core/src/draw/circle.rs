//! Circle primitive used for network nodes.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Canvas, Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

/// A filled, outlined circle at an absolute layout position.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    stroke: StrokeDefinition,
    fill: Color,
}

impl Circle {
    /// Creates a white circle outlined with `stroke`.
    pub fn new(center: Point, radius: f32, stroke: StrokeDefinition) -> Self {
        Self {
            center,
            radius,
            stroke,
            fill: Color::white(),
        }
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill(&self) -> Color {
        self.fill
    }
}

impl Drawable for Circle {
    fn render_to_layers(&self, canvas: &Canvas) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let center = canvas.to_screen(self.center);

        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", canvas.to_screen_length(self.radius))
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        let circle = apply_stroke!(circle, &self.stroke);

        output.add_to_layer(RenderLayer::Node, Box::new(circle));
        output
    }

    fn bounds(&self) -> Bounds {
        let diameter = self.radius * 2.0;
        Bounds::new_from_center(self.center, Size::new(diameter, diameter))
    }
}
