//! Text primitives for layer, node and edge labels.
//!
//! # Overview
//!
//! - [`Label`] - The content of a label, either plain text or an indexed
//!   math-style symbol such as `a₁⁽²⁾`
//! - [`TextDefinition`] - Reusable font configuration
//! - [`Text`] - A positioned, optionally rotated label ready to render
//!
//! # Rendering
//!
//! Indexed labels render the symbol followed by two `<tspan>`s shifted to
//! subscript and superscript baselines. Rotation is given in degrees,
//! counter-clockwise in layout space, and converted to the clockwise SVG
//! convention by the renderer.

use std::fmt;

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Canvas, Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// Relative font size used for sub- and superscripts.
const SCRIPT_FONT_SIZE: &str = "70%";

/// The content of a label.
///
/// # Examples
///
/// ```
/// # use plotann_core::draw::Label;
/// let weight = Label::indexed("Θ", "2,1", "(1)");
/// assert_eq!(weight.to_string(), "$Θ_{2,1}^{(1)}$");
///
/// let plain = Label::plain("Layer 1");
/// assert_eq!(plain.to_string(), "Layer 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Literal text.
    Plain(String),
    /// A symbol with a subscript and a superscript.
    Indexed {
        symbol: String,
        subscript: String,
        superscript: String,
    },
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn indexed(
        symbol: impl Into<String>,
        subscript: impl Into<String>,
        superscript: impl Into<String>,
    ) -> Self {
        Self::Indexed {
            symbol: symbol.into(),
            subscript: subscript.into(),
            superscript: superscript.into(),
        }
    }

    /// Returns true if rendering this label would produce no visible text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::Indexed { .. } => false,
        }
    }
}

/// Displays the label in TeX notation (`$x_{1}^{(1)}$`) for indexed labels.
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => write!(f, "{text}"),
            Self::Indexed {
                symbol,
                subscript,
                superscript,
            } => write!(f, "${symbol}_{{{subscript}}}^{{{superscript}}}$"),
        }
    }
}

/// Which point of the text box sits on the text position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Horizontally and vertically centered.
    #[default]
    Center,
    /// Horizontally centered, bottom edge on the position.
    Bottom,
}

impl TextAnchor {
    fn to_svg_baseline(self) -> &'static str {
        match self {
            Self::Center => "central",
            Self::Bottom => "text-after-edge",
        }
    }
}

/// Font configuration shared by labels.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` keeps the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: None,
        }
    }
}

/// A positioned label.
///
/// # Examples
///
/// ```
/// # use plotann_core::draw::{Label, Text, TextAnchor, TextDefinition};
/// # use plotann_core::geometry::Point;
/// let text = Text::new(TextDefinition::new(), Label::plain("Layer 1"), Point::new(0.5, 0.0))
///     .with_rotation(30.0)
///     .with_anchor(TextAnchor::Bottom);
///
/// assert_eq!(text.rotation(), 30.0);
/// assert_eq!(text.content().to_string(), "Layer 1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: Label,
    position: Point,
    rotation: f32,
    anchor: TextAnchor,
}

impl Text {
    /// Creates an unrotated, centered label.
    pub fn new(definition: TextDefinition, content: Label, position: Point) -> Self {
        Self {
            definition,
            content,
            position,
            rotation: 0.0,
            anchor: TextAnchor::default(),
        }
    }

    /// Sets the rotation in degrees, counter-clockwise.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn content(&self) -> &Label {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl Drawable for Text {
    fn render_to_layers(&self, canvas: &Canvas) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let position = canvas.to_screen(self.position);

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", self.anchor.to_svg_baseline())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        if self.rotation != 0.0 {
            rendered_text = rendered_text.set(
                "transform",
                format!(
                    "rotate({} {} {})",
                    -self.rotation,
                    position.x(),
                    position.y()
                ),
            );
        }

        match &self.content {
            Label::Plain(text) => {
                rendered_text = rendered_text.add(SvgText::new(text.as_str()));
            }
            Label::Indexed {
                symbol,
                subscript,
                superscript,
            } => {
                let sub = svg_element::TSpan::new("")
                    .set("baseline-shift", "sub")
                    .set("font-size", SCRIPT_FONT_SIZE)
                    .add(SvgText::new(subscript.as_str()));
                let sup = svg_element::TSpan::new("")
                    .set("baseline-shift", "super")
                    .set("font-size", SCRIPT_FONT_SIZE)
                    .add(SvgText::new(superscript.as_str()));
                rendered_text = rendered_text
                    .add(SvgText::new(symbol.as_str()))
                    .add(sub)
                    .add(sup);
            }
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_center(self.position, Size::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &Text) -> String {
        let canvas = Canvas::new(Size::new(1.0, 1.0)).with_scale(100.0);
        text.render_to_layers(&canvas).render()[0].to_string()
    }

    #[test]
    fn test_label_display_plain() {
        assert_eq!(Label::plain("hidden").to_string(), "hidden");
    }

    #[test]
    fn test_label_display_indexed() {
        assert_eq!(Label::indexed("x", "1", "(1)").to_string(), "$x_{1}^{(1)}$");
        assert_eq!(Label::indexed("a", "0", "(3)").to_string(), "$a_{0}^{(3)}$");
    }

    #[test]
    fn test_label_is_empty() {
        assert!(Label::plain("").is_empty());
        assert!(!Label::plain("y").is_empty());
        assert!(!Label::indexed("x", "", "").is_empty());
    }

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.font_size(), 12);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_family("monospace");
        def.set_font_size(20);
        def.set_color(Some(Color::new("navy").unwrap()));

        assert_eq!(def.font_family(), "monospace");
        assert_eq!(def.font_size(), 20);
        assert!(def.color().is_some());
    }

    #[test]
    fn test_text_renders_plain_content() {
        let text = Text::new(
            TextDefinition::new(),
            Label::plain("Layer 2"),
            Point::new(0.5, 0.0),
        );
        let rendered = render(&text);

        assert!(rendered.contains("data-layer=\"text\""));
        assert!(rendered.contains("Layer 2"));
        assert!(rendered.contains("dominant-baseline=\"central\""));
        assert!(!rendered.contains("rotate("));
    }

    #[test]
    fn test_text_renders_indexed_content_with_scripts() {
        let text = Text::new(
            TextDefinition::new(),
            Label::indexed("a", "2", "(3)"),
            Point::new(0.5, 0.5),
        );
        let rendered = render(&text);

        assert!(rendered.contains("baseline-shift=\"sub\""));
        assert!(rendered.contains("baseline-shift=\"super\""));
        assert!(rendered.contains("(3)"));
    }

    #[test]
    fn test_text_rotation_is_flipped_for_screen() {
        let text = Text::new(
            TextDefinition::new(),
            Label::plain("w"),
            Point::new(0.5, 0.5),
        )
        .with_rotation(45.0)
        .with_anchor(TextAnchor::Bottom);
        let rendered = render(&text);

        assert!(rendered.contains("rotate(-45 50 50)"));
        assert!(rendered.contains("dominant-baseline=\"text-after-edge\""));
    }
}
