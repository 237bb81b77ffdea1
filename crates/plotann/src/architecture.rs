//! Network architecture: the number of nodes in each layer.

use std::{fmt, str::FromStr};

use crate::error::LayoutError;

/// An ordered, validated list of layer sizes.
///
/// Every architecture has at least one layer and every layer at least one
/// node; the layout engine relies on both.
///
/// # Examples
///
/// ```
/// use plotann::Architecture;
///
/// let arch = Architecture::new(vec![2, 3, 1]).unwrap();
/// assert_eq!(arch.layer_count(), 3);
/// assert_eq!(arch.max_layer_size(), 3);
///
/// let parsed: Architecture = "2, 3, 1".parse().unwrap();
/// assert_eq!(parsed, arch);
///
/// assert!(Architecture::new(vec![]).is_err());
/// assert!(Architecture::new(vec![2, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Architecture {
    layers: Vec<usize>,
}

impl Architecture {
    /// Validates and wraps a list of layer sizes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyArchitecture`] for an empty list and
    /// [`LayoutError::EmptyLayer`] for the first layer with zero nodes.
    pub fn new(layers: impl Into<Vec<usize>>) -> Result<Self, LayoutError> {
        let layers = layers.into();
        if layers.is_empty() {
            return Err(LayoutError::EmptyArchitecture);
        }
        if let Some(position) = layers.iter().position(|&size| size == 0) {
            return Err(LayoutError::EmptyLayer {
                layer: position + 1,
            });
        }
        Ok(Self { layers })
    }

    /// Layer sizes, input layer first.
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Size of the largest layer.
    pub fn max_layer_size(&self) -> usize {
        self.layers.iter().copied().max().unwrap_or_default()
    }

    /// Total number of nodes across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().sum()
    }

    /// Returns true if `layer` (0-based) is the output layer.
    pub fn is_last_layer(&self, layer: usize) -> bool {
        layer + 1 == self.layers.len()
    }
}

impl TryFrom<Vec<usize>> for Architecture {
    type Error = LayoutError;

    fn try_from(layers: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(layers)
    }
}

/// Parses a comma separated list such as `"2,3,1"`.
impl FromStr for Architecture {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(LayoutError::EmptyArchitecture);
        }
        let layers = s
            .split(',')
            .map(str::trim)
            .map(|value| {
                value
                    .parse::<usize>()
                    .map_err(|_| LayoutError::InvalidLayerSize {
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(layers)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self.layers.iter().map(usize::to_string).collect();
        write!(f, "{}", sizes.join(","))
    }
}
