//! Configuration types for plotann rendering.
//!
//! All types implement [`serde::Deserialize`] and are usually loaded from a
//! TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Every [`LayoutOptions`] field, as plain values.
//! - [`StyleConfig`] - Output scale, padding, background color and font.
//!
//! # Example
//!
//! ```
//! # use plotann::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     bias = true
//!     node_labels = true
//!     layer_labels = ["Input", "Hidden", "Output"]
//!
//!     [style]
//!     background_color = "white"
//! "#).unwrap();
//!
//! let options = config.layout().to_options().unwrap();
//! assert!(options.bias());
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use serde::Deserialize;

use plotann_core::{color::Color, draw::TextDefinition};

use crate::{Decoration, LayoutOptions, error::PlotAnnError};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// A label or color setting: `false`, `true` or an array of strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DecorationSetting {
    Toggle(bool),
    Explicit(Vec<String>),
}

impl Default for DecorationSetting {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl From<DecorationSetting> for Decoration<String> {
    fn from(setting: DecorationSetting) -> Self {
        match setting {
            DecorationSetting::Toggle(enabled) => enabled.into(),
            DecorationSetting::Explicit(values) => values.into(),
        }
    }
}

/// The `[layout]` section.
///
/// Missing fields take the [`LayoutOptions`] defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    radius: f32,
    width: f32,
    height: f32,
    node_line_width: f32,
    edge_line_width: f32,
    bias: bool,
    edge_from_center: bool,
    layer_labels: DecorationSetting,
    node_labels: DecorationSetting,
    edge_labels: DecorationSetting,
    edge_label_spacing: f32,
    node_colors: DecorationSetting,
    edge_colors: DecorationSetting,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let defaults = LayoutOptions::default();
        Self {
            radius: defaults.radius(),
            width: defaults.width(),
            height: defaults.height(),
            node_line_width: defaults.node_line_width(),
            edge_line_width: defaults.edge_line_width(),
            bias: defaults.bias(),
            edge_from_center: defaults.edge_from_center(),
            layer_labels: DecorationSetting::default(),
            node_labels: DecorationSetting::default(),
            edge_labels: DecorationSetting::default(),
            edge_label_spacing: defaults.edge_label_spacing(),
            node_colors: DecorationSetting::default(),
            edge_colors: DecorationSetting::default(),
        }
    }
}

impl LayoutConfig {
    /// Converts the section into [`LayoutOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`PlotAnnError::Config`] if an explicit color cannot be parsed.
    pub fn to_options(&self) -> Result<LayoutOptions, PlotAnnError> {
        let node_colors = parse_colors("node_colors", &self.node_colors)?;
        let edge_colors = parse_colors("edge_colors", &self.edge_colors)?;

        Ok(LayoutOptions::new()
            .with_radius(self.radius)
            .with_canvas(self.width, self.height)
            .with_node_line_width(self.node_line_width)
            .with_edge_line_width(self.edge_line_width)
            .with_bias(self.bias)
            .with_edge_from_center(self.edge_from_center)
            .with_layer_labels(self.layer_labels.clone().into())
            .with_node_labels(self.node_labels.clone().into())
            .with_edge_labels(self.edge_labels.clone().into())
            .with_edge_label_spacing(self.edge_label_spacing)
            .with_node_colors(node_colors)
            .with_edge_colors(edge_colors))
    }
}

fn parse_colors(field: &str, setting: &DecorationSetting) -> Result<Decoration<Color>, PlotAnnError> {
    Decoration::from(setting.clone())
        .try_map(|value| Color::new(&value))
        .map_err(|err| PlotAnnError::Config(format!("Invalid color in `{field}`: {err}")))
}

/// The `[style]` section.
///
/// | Field | Default |
/// |-------|---------|
/// | `scale` | `400.0` pixels per layout unit |
/// | `padding` | `20.0` pixels |
/// | `background_color` | none |
/// | `font_family` | `"sans-serif"` |
/// | `font_size` | `12` |
/// | `text_color` | none (SVG default, black) |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    scale: f32,
    padding: f32,
    background_color: Option<String>,
    font_family: String,
    font_size: u16,
    text_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let text = TextDefinition::default();
        Self {
            scale: 400.0,
            padding: 20.0,
            background_color: None,
            font_family: text.font_family().to_string(),
            font_size: text.font_size(),
            text_color: None,
        }
    }
}

impl StyleConfig {
    /// Pixels per layout unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Padding around the drawing area, in pixels.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color("background", self.background_color.as_deref())
    }

    /// Returns the parsed label [`Color`], or `None` to keep the SVG default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color("text", self.text_color.as_deref())
    }

    /// Font and color settings for every label.
    ///
    /// # Errors
    ///
    /// Returns an error if `text_color` cannot be parsed.
    pub fn text_definition(&self) -> Result<TextDefinition, String> {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(self.font_size);
        text.set_color(self.text_color()?);
        Ok(text)
    }
}

fn parse_optional_color(kind: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {kind} color in config: {err}"))
}
