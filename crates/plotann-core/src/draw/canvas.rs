//! Explicit drawing surface for rendering primitives.

use crate::geometry::{Bounds, Insets, Point, Size};

/// The drawing surface a [`Drawable`](super::Drawable) renders onto.
///
/// A canvas maps the logical layout area (`size`, Y up) onto screen pixels
/// (Y down): every logical unit becomes `scale` pixels and the whole area is
/// surrounded by `padding`. Callers always construct one explicitly and hand
/// it to the renderer.
///
/// # Examples
///
/// ```
/// # use plotann_core::draw::Canvas;
/// # use plotann_core::geometry::{Insets, Point, Size};
/// let canvas = Canvas::new(Size::new(1.0, 1.0))
///     .with_scale(100.0)
///     .with_padding(Insets::uniform(10.0));
///
/// // The logical origin is the bottom-left corner of the drawing area.
/// let origin = canvas.to_screen(Point::new(0.0, 0.0));
/// assert_eq!(origin, Point::new(10.0, 110.0));
///
/// assert_eq!(canvas.screen_size(), Size::new(120.0, 120.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    size: Size,
    scale: f32,
    padding: Insets,
}

impl Canvas {
    /// Creates a canvas for a logical drawing area with a scale of one
    /// pixel per unit and no padding.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            scale: 1.0,
            padding: Insets::default(),
        }
    }

    /// Sets the number of pixels per logical unit.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the padding in pixels around the drawing area.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Logical size of the drawing area.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Pixels per logical unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Converts a layout-space point to screen pixels.
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(
            self.padding.left() + point.x() * self.scale,
            self.padding.top() + (self.size.height() - point.y()) * self.scale,
        )
    }

    /// Converts a layout-space length to pixels.
    pub fn to_screen_length(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Total output size in pixels, padding included.
    pub fn screen_size(&self) -> Size {
        self.size.scale(self.scale).add_padding(self.padding)
    }

    /// Final bounds of the rendered surface in screen pixels.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_min_point(Point::default(), self.screen_size())
    }

    /// The logical drawing area in layout space.
    pub fn logical_bounds(&self) -> Bounds {
        Bounds::new_from_min_point(Point::default(), self.size)
    }
}
