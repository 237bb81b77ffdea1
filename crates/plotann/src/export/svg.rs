//! SVG export backend.

use log::{debug, info, warn};
use svg::{self, node::element as svg_element};

use plotann_core::{
    color::Color,
    draw::{Canvas, LayeredOutput, RenderLayer, TextDefinition},
    geometry::{Bounds, Insets, Point},
};

use super::{Error, Exporter};
use crate::{Primitives, config::StyleConfig, layout::NetworkLayout};

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// use plotann::{config::StyleConfig, export::svg::SvgBuilder};
///
/// let svg = SvgBuilder::new()
///     .with_output("network.svg")
///     .with_style(&StyleConfig::default())
///     .build()
///     .unwrap();
/// assert_eq!(svg.output(), Some("network.svg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgBuilder {
    output: Option<String>,
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file written by [`Exporter::export_network`].
    pub fn with_output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Validates the style and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for an invalid background or text color, a
    /// scale that is not finite and positive, or a negative padding.
    pub fn build(self) -> Result<Svg, Error> {
        let background = self.style.background_color().map_err(Error::Render)?;

        let scale = self.style.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::Render(format!(
                "scale must be finite and positive, got {scale}"
            )));
        }
        let padding = self.style.padding();
        if !padding.is_finite() || padding < 0.0 {
            return Err(Error::Render(format!(
                "padding must be finite and non-negative, got {padding}"
            )));
        }

        Ok(Svg {
            output: self.output,
            scale,
            padding: Insets::uniform(padding),
            background,
            text: self.style.text_definition().map_err(Error::Render)?,
        })
    }
}

/// Renders networks to SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    output: Option<String>,
    scale: f32,
    padding: Insets,
    background: Option<Color>,
    text: TextDefinition,
}

impl Svg {
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// The drawing surface for `layout`.
    pub fn canvas(&self, layout: &NetworkLayout) -> Canvas {
        Canvas::new(layout.size())
            .with_scale(self.scale)
            .with_padding(self.padding)
    }

    /// Renders `layout` to an SVG document sized to the canvas bounds.
    pub fn render_network(&self, layout: &NetworkLayout) -> svg::Document {
        let canvas = self.canvas(layout);
        let bounds = canvas.bounds();
        let primitives = layout.primitives(&self.text);
        warn_on_overflow(&canvas, &primitives);

        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        let mut output = LayeredOutput::new();
        if let Some(background) = self.background {
            output.add_to_layer(
                RenderLayer::Background,
                Box::new(background_rect(background, bounds)),
            );
        }
        output.merge(primitives.render(&canvas));

        debug!(
            width = bounds.width(),
            height = bounds.height(),
            nodes = output.len();
            "SVG document rendered"
        );

        output
            .render()
            .into_iter()
            .fold(doc, |doc, group| doc.add(group))
    }

    fn write_document(&self, doc: &svg::Document) -> Result<(), Error> {
        let path = self.output.as_deref().ok_or(Error::MissingOutput)?;
        svg::save(path, doc)?;
        info!(output_file = path; "SVG exported successfully");
        Ok(())
    }
}

impl Exporter for Svg {
    fn export_network(&mut self, layout: &NetworkLayout) -> Result<(), Error> {
        let doc = self.render_network(layout);
        self.write_document(&doc)
    }
}

/// Logs when primitives reach outside the layout area and will be clipped
/// into the padding or beyond.
fn warn_on_overflow(canvas: &Canvas, primitives: &Primitives) {
    let Some(drawn) = primitives.bounds() else {
        return;
    };
    let area = canvas.logical_bounds();
    let corners = [
        Point::new(drawn.min_x(), drawn.min_y()),
        Point::new(drawn.max_x(), drawn.max_y()),
    ];
    if !corners.iter().all(|&corner| area.contains(corner)) {
        warn!(
            drawn:?,
            area:?;
            "Network extends beyond the layout area"
        );
    }
}

fn background_rect(color: Color, bounds: Bounds) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
        .set("fill", color.to_string())
        .set("fill-opacity", color.alpha())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Architecture, Decoration, LayoutOptions, layout::layout};

    fn network(options: &LayoutOptions) -> NetworkLayout {
        layout(&Architecture::new(vec![2, 3, 1]).unwrap(), options).unwrap()
    }

    fn style(toml_str: &str) -> StyleConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_document_is_sized_by_scale_and_padding() {
        let svg = SvgBuilder::new()
            .with_style(&style("scale = 100.0\npadding = 10.0"))
            .build()
            .unwrap();
        let doc = svg.render_network(&network(&LayoutOptions::default())).to_string();

        assert!(doc.contains("viewBox=\"0 0 120 120\""));
        assert!(doc.contains("width=\"120\""));
        assert_eq!(doc.matches("<circle").count(), 6);
        assert_eq!(doc.matches("<line").count(), 9);
        assert!(!doc.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_background_is_drawn_first() {
        let svg = SvgBuilder::new()
            .with_style(&style("background_color = \"#f0f0f0\""))
            .build()
            .unwrap();
        let doc = svg.render_network(&network(&LayoutOptions::default())).to_string();

        let background = doc.find("data-layer=\"background\"").unwrap();
        let edges = doc.find("data-layer=\"edge\"").unwrap();
        assert!(background < edges);
        assert!(doc.contains("<rect"));
    }

    #[test]
    fn test_labels_use_style_font() {
        let svg = SvgBuilder::new()
            .with_style(&style("font_family = \"serif\"\nfont_size = 16"))
            .build()
            .unwrap();
        let options = LayoutOptions::default().with_node_labels(Decoration::Auto);
        let doc = svg.render_network(&network(&options)).to_string();

        assert!(doc.contains("font-family=\"serif\""));
        assert!(doc.contains("font-size=\"16\""));
    }

    #[test]
    fn test_labels_use_style_text_color() {
        let svg = SvgBuilder::new()
            .with_style(&style("text_color = \"navy\""))
            .build()
            .unwrap();
        let options = LayoutOptions::default().with_layer_labels(Decoration::Auto);
        let doc = svg.render_network(&network(&options)).to_string();

        let navy = Color::new("navy").unwrap().to_string();
        assert_eq!(doc.matches(&format!("fill=\"{navy}\"")).count(), 3);
    }

    #[test]
    fn test_background_covers_canvas_bounds() {
        let svg = SvgBuilder::new()
            .with_style(&style("scale = 50.0\npadding = 5.0\nbackground_color = \"white\""))
            .build()
            .unwrap();
        let network = network(&LayoutOptions::default().with_canvas(2.0, 1.0));
        let bounds = svg.canvas(&network).bounds();
        let doc = svg.render_network(&network).to_string();

        assert_eq!((bounds.width(), bounds.height()), (110.0, 60.0));
        assert!(doc.contains("viewBox=\"0 0 110 60\""));
        let rect_start = doc.find("<rect").unwrap();
        let rect = &doc[rect_start..rect_start + doc[rect_start..].find("/>").unwrap()];
        assert!(rect.contains("x=\"0\""));
        assert!(rect.contains("width=\"110\""));
        assert!(rect.contains("height=\"60\""));
    }

    #[test]
    fn test_invalid_style_rejected() {
        let result = SvgBuilder::new()
            .with_style(&style("background_color = \"not-a-color\""))
            .build();
        assert!(matches!(result, Err(Error::Render(_))));

        let result = SvgBuilder::new()
            .with_style(&style("text_color = \"not-a-color\""))
            .build();
        assert!(matches!(result, Err(Error::Render(_))));

        let result = SvgBuilder::new().with_style(&style("scale = 0.0")).build();
        assert!(matches!(result, Err(Error::Render(_))));

        let result = SvgBuilder::new().with_style(&style("padding = -1.0")).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_export_without_output_fails() {
        let mut svg = SvgBuilder::new().build().unwrap();
        let result = svg.export_network(&network(&LayoutOptions::default()));
        assert!(matches!(result, Err(Error::MissingOutput)));
    }
}
