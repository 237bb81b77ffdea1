//! Options controlling network layout and decoration.

use plotann_core::color::Color;

/// How a family of decorations (labels or colors) is assigned.
///
/// Resolved once per layout call; explicit sequences are indexed
/// positionally and may be shorter than the number of decorated items.
///
/// # Examples
///
/// ```
/// use plotann::Decoration;
///
/// let labels: Decoration<String> = vec!["in".to_string(), "out".to_string()].into();
/// assert_eq!(labels.explicit(1).map(String::as_str), Some("out"));
/// assert_eq!(labels.explicit(2), None);
///
/// let auto: Decoration<String> = true.into();
/// assert!(auto.is_auto());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration<T> {
    /// No decoration.
    Off,
    /// Generated from the item's position in the network.
    Auto,
    /// One entry per item, in traversal order.
    Explicit(Vec<T>),
}

impl<T> Decoration<T> {
    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Returns the explicit entry at `index`, if present.
    pub fn explicit(&self, index: usize) -> Option<&T> {
        match self {
            Self::Explicit(values) => values.get(index),
            Self::Off | Self::Auto => None,
        }
    }

    /// Number of explicit entries, zero for `Off` and `Auto`.
    pub fn explicit_len(&self) -> usize {
        match self {
            Self::Explicit(values) => values.len(),
            Self::Off | Self::Auto => 0,
        }
    }

    /// Converts explicit entries, failing on the first entry `f` rejects.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Decoration<U>, E> {
        Ok(match self {
            Self::Off => Decoration::Off,
            Self::Auto => Decoration::Auto,
            Self::Explicit(values) => {
                Decoration::Explicit(values.into_iter().map(f).collect::<Result<_, _>>()?)
            }
        })
    }
}

impl<T> Default for Decoration<T> {
    fn default() -> Self {
        Self::Off
    }
}

impl<T> From<bool> for Decoration<T> {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Auto } else { Self::Off }
    }
}

impl<T> From<Vec<T>> for Decoration<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Explicit(values)
    }
}

/// Layout configuration for a single network diagram.
///
/// # Default Values
///
/// | Option | Default |
/// |--------|---------|
/// | radius | `1.0` |
/// | width × height | `1.0 × 1.0` |
/// | node line width | `1.0` |
/// | edge line width | `0.25` |
/// | bias | `false` |
/// | edges from center | `true` |
/// | edge label spacing | `1.0` |
/// | labels and colors | [`Decoration::Off`] |
///
/// # Examples
///
/// ```
/// use plotann::{Decoration, LayoutOptions};
///
/// let options = LayoutOptions::default()
///     .with_bias(true)
///     .with_node_labels(Decoration::Auto)
///     .with_canvas(2.0, 1.0);
///
/// assert!(options.bias());
/// assert_eq!(options.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    radius: f32,
    width: f32,
    height: f32,
    node_line_width: f32,
    edge_line_width: f32,
    bias: bool,
    edge_from_center: bool,
    layer_labels: Decoration<String>,
    node_labels: Decoration<String>,
    edge_labels: Decoration<String>,
    edge_label_spacing: f32,
    node_colors: Decoration<Color>,
    edge_colors: Decoration<Color>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 1.0,
            height: 1.0,
            node_line_width: 1.0,
            edge_line_width: 0.25,
            bias: false,
            edge_from_center: true,
            layer_labels: Decoration::Off,
            node_labels: Decoration::Off,
            edge_labels: Decoration::Off,
            edge_label_spacing: 1.0,
            node_colors: Decoration::Off,
            edge_colors: Decoration::Off,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scales the node radius derived from the layer spacing.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the logical drawing area.
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_node_line_width(mut self, width: f32) -> Self {
        self.node_line_width = width;
        self
    }

    pub fn with_edge_line_width(mut self, width: f32) -> Self {
        self.edge_line_width = width;
        self
    }

    /// Treats the top node of every hidden layer as a bias unit.
    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    /// When false, edges stop at node outlines instead of node centers.
    pub fn with_edge_from_center(mut self, edge_from_center: bool) -> Self {
        self.edge_from_center = edge_from_center;
        self
    }

    pub fn with_layer_labels(mut self, labels: Decoration<String>) -> Self {
        self.layer_labels = labels;
        self
    }

    pub fn with_node_labels(mut self, labels: Decoration<String>) -> Self {
        self.node_labels = labels;
        self
    }

    pub fn with_edge_labels(mut self, labels: Decoration<String>) -> Self {
        self.edge_labels = labels;
        self
    }

    /// Multiplies the offset between an edge and its label.
    pub fn with_edge_label_spacing(mut self, spacing: f32) -> Self {
        self.edge_label_spacing = spacing;
        self
    }

    pub fn with_node_colors(mut self, colors: Decoration<Color>) -> Self {
        self.node_colors = colors;
        self
    }

    pub fn with_edge_colors(mut self, colors: Decoration<Color>) -> Self {
        self.edge_colors = colors;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn node_line_width(&self) -> f32 {
        self.node_line_width
    }

    pub fn edge_line_width(&self) -> f32 {
        self.edge_line_width
    }

    pub fn bias(&self) -> bool {
        self.bias
    }

    pub fn edge_from_center(&self) -> bool {
        self.edge_from_center
    }

    pub fn layer_labels(&self) -> &Decoration<String> {
        &self.layer_labels
    }

    pub fn node_labels(&self) -> &Decoration<String> {
        &self.node_labels
    }

    pub fn edge_labels(&self) -> &Decoration<String> {
        &self.edge_labels
    }

    pub fn edge_label_spacing(&self) -> f32 {
        self.edge_label_spacing
    }

    pub fn node_colors(&self) -> &Decoration<Color> {
        &self.node_colors
    }

    pub fn edge_colors(&self) -> &Decoration<Color> {
        &self.edge_colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_default_is_off() {
        let decoration: Decoration<String> = Decoration::default();
        assert!(decoration.is_off());
        assert_eq!(decoration.explicit_len(), 0);
    }

    #[test]
    fn test_decoration_from_bool() {
        assert!(Decoration::<Color>::from(true).is_auto());
        assert!(Decoration::<Color>::from(false).is_off());
    }

    #[test]
    fn test_decoration_explicit_is_bounds_checked() {
        let decoration = Decoration::from(vec![1, 2, 3]);
        assert_eq!(decoration.explicit(0), Some(&1));
        assert_eq!(decoration.explicit(2), Some(&3));
        assert_eq!(decoration.explicit(3), None);
        assert_eq!(Decoration::<i32>::Auto.explicit(0), None);
    }

    #[test]
    fn test_decoration_try_map() {
        let colors = Decoration::from(vec!["red".to_string(), "blue".to_string()])
            .try_map(|value| Color::new(&value))
            .unwrap();
        assert_eq!(colors.explicit(1), Some(&Color::new("blue").unwrap()));

        let invalid = Decoration::from(vec!["red".to_string(), "nope".to_string()])
            .try_map(|value| Color::new(&value));
        assert!(invalid.is_err());

        let auto = Decoration::<String>::Auto.try_map(|value| Color::new(&value));
        assert_eq!(auto, Ok(Decoration::Auto));
    }

    #[test]
    fn test_layout_options_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.radius(), 1.0);
        assert_eq!(options.width(), 1.0);
        assert_eq!(options.height(), 1.0);
        assert_eq!(options.node_line_width(), 1.0);
        assert_eq!(options.edge_line_width(), 0.25);
        assert!(!options.bias());
        assert!(options.edge_from_center());
        assert_eq!(options.edge_label_spacing(), 1.0);
        assert!(options.layer_labels().is_off());
        assert!(options.node_colors().is_off());
    }

    #[test]
    fn test_layout_options_builders() {
        let options = LayoutOptions::new()
            .with_radius(2.0)
            .with_canvas(3.0, 2.0)
            .with_edge_from_center(false)
            .with_edge_label_spacing(1.5)
            .with_edge_colors(Decoration::Auto);

        assert_eq!(options.radius(), 2.0);
        assert_eq!(options.width(), 3.0);
        assert_eq!(options.height(), 2.0);
        assert!(!options.edge_from_center());
        assert_eq!(options.edge_label_spacing(), 1.5);
        assert!(options.edge_colors().is_auto());
    }
}
