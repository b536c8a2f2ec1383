//! # Layer 3: Drawable Elements
//!
//! Elements own copies of their data. They take [`View`](crate::view::View)
//! parameters, copy them into `Vec`s before returning, and render
//! themselves as gnuplot command fragments on demand.

mod circles;
mod color;
mod error;

pub use circles::{Circles, CirclesStyle};
pub use color::Color;
pub use error::{PlotError, PlotResult};

use alloc::string::String;

/// Dimensionality of the axes an element needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AxesCategory {
    TwoDimensional,
}

/// Data extent of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds { x_min, x_max, y_min, y_max }
    }
}

/// Where elements get their automatic colors from.
///
/// The owning axes implement this; each call hands out the next color of
/// the cycle.
pub trait Palette {
    fn next_color(&mut self) -> Color;
}

/// Cycles through a fixed list of colors.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: &'static [Color],
    next: usize,
}

impl ColorCycle {
    /// The default plot colors.
    pub const DEFAULT: &'static [Color] = &[
        Color::rgb(0.0, 0.447, 0.741),
        Color::rgb(0.85, 0.325, 0.098),
        Color::rgb(0.929, 0.694, 0.125),
        Color::rgb(0.494, 0.184, 0.556),
        Color::rgb(0.466, 0.674, 0.188),
        Color::rgb(0.301, 0.745, 0.933),
        Color::rgb(0.635, 0.078, 0.184),
    ];

    /// `colors` must not be empty.
    pub fn new(colors: &'static [Color]) -> Self {
        debug_assert!(!colors.is_empty(), "ColorCycle needs at least one color");
        ColorCycle { colors, next: 0 }
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl Palette for ColorCycle {
    fn next_color(&mut self) -> Color {
        let color = self.colors.get(self.next).copied().unwrap_or_default();
        self.next = (self.next + 1) % self.colors.len().max(1);
        color
    }
}

/// Interface every drawable element offers to its axes.
pub trait AxesObject {
    /// The clause following `plot` for this element.
    fn plot_string(&mut self, palette: &mut dyn Palette) -> String;

    /// A legend-only clause titled `title`.
    fn legend_string(&self, title: &str) -> String;

    /// Inline data consumed by the `'-'` source of `plot_string`.
    fn data_string(&self) -> String;

    fn requires_colormap(&self) -> bool {
        false
    }

    fn xmin(&self) -> Option<f64> {
        None
    }

    fn xmax(&self) -> Option<f64> {
        None
    }

    fn ymin(&self) -> Option<f64> {
        None
    }

    fn ymax(&self) -> Option<f64> {
        None
    }

    /// All four extents, `None` when the element has no data.
    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(self.xmin()?, self.xmax()?, self.ymin()?, self.ymax()?))
    }

    fn axes_category(&self) -> AxesCategory;

    /// Whether the element changed since it was last serialized.
    fn is_dirty(&self) -> bool;
}

/// `values[index]`, else the first value, else `default`.
///
/// Per-point attributes shorter than the point list repeat their first
/// entry; empty attributes use the attribute's default.
#[inline]
pub fn value_or_default(values: &[f64], index: usize, default: f64) -> f64 {
    match values.get(index) {
        Some(&value) => value,
        None => values.first().copied().unwrap_or(default),
    }
}

/// Escape text for a double-quoted gnuplot string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_or_default() {
        assert_eq!(value_or_default(&[5.0, 6.0], 1, 1.0), 6.0);
        assert_eq!(value_or_default(&[5.0], 2, 1.0), 5.0);
        assert_eq!(value_or_default(&[], 0, 360.0), 360.0);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a "b" \c"#), r#"a \"b\" \\c"#);
        assert_eq!(escape("two\nlines"), "two\\nlines");
    }

    #[test]
    fn test_color_cycle_wraps() {
        static TWO: [Color; 2] = [Color::RED, Color::BLUE];
        let mut cycle = ColorCycle::new(&TWO);
        assert_eq!(cycle.next_color(), Color::RED);
        assert_eq!(cycle.next_color(), Color::BLUE);
        assert_eq!(cycle.next_color(), Color::RED);
    }
}
