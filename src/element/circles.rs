//! Filled circles and circle sectors.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use tracing::{debug, instrument, trace, warn};

use super::{value_or_default, escape, AxesCategory, AxesObject, Color, Palette, PlotError, PlotResult};
use crate::view::View;

const DEFAULT_RADIUS: f64 = 1.0;
const DEFAULT_START_ANGLE: f64 = 0.0;
const DEFAULT_END_ANGLE: f64 = 360.0;
const DEFAULT_COLOR: f64 = 1.0;

/// Style settings of a [`Circles`] element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CirclesStyle {
    /// Fixed fill color. `None` takes the next palette color.
    pub face_color: Option<Color>,
    pub line_width: f32,
    pub line_color: Color,
    pub visible: bool,
}

impl Default for CirclesStyle {
    fn default() -> Self {
        CirclesStyle {
            face_color: None,
            line_width: 2.0,
            line_color: Color::BLACK,
            visible: true,
        }
    }
}

/// Circles (or sectors) at `(x, y)` with per-point radius, angles and color.
///
/// Per-point attributes may be shorter than the point list: missing entries
/// repeat the first value, and an empty attribute uses its default (radius
/// 1, start angle 0, end angle 360).
///
/// ```
/// use plot_caps::element::Circles;
///
/// let c = Circles::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[5.0]);
/// assert_eq!(c.radius_at(2), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Circles {
    x: Vec<f64>,
    y: Vec<f64>,
    radius: Vec<f64>,
    start_angle: Vec<f64>,
    end_angle: Vec<f64>,
    // per-point colormap values
    color: Vec<f64>,

    face_color: Color,
    user_face_color: bool,
    line_width: f32,
    line_color: Color,
    visible: bool,

    dirty: bool,
}

impl Default for Circles {
    fn default() -> Self {
        let style = CirclesStyle::default();
        Circles {
            x: Vec::new(),
            y: Vec::new(),
            radius: Vec::new(),
            start_angle: Vec::new(),
            end_angle: Vec::new(),
            color: Vec::new(),
            face_color: Color::default(),
            user_face_color: false,
            line_width: style.line_width,
            line_color: style.line_color,
            visible: style.visible,
            dirty: true,
        }
    }
}

impl Circles {
    pub fn new<'a>(
        x: impl Into<View<'a, f64>>,
        y: impl Into<View<'a, f64>>,
        radius: impl Into<View<'a, f64>>,
    ) -> Self {
        Self::with_angles(x, y, radius, View::empty(), View::empty(), View::empty())
    }

    /// Sectors from `start_angle` to `end_angle` degrees, optionally colored
    /// per point through the colormap.
    pub fn with_angles<'a>(
        x: impl Into<View<'a, f64>>,
        y: impl Into<View<'a, f64>>,
        radius: impl Into<View<'a, f64>>,
        start_angle: impl Into<View<'a, f64>>,
        end_angle: impl Into<View<'a, f64>>,
        color: impl Into<View<'a, f64>>,
    ) -> Self {
        let circles = Circles {
            x: x.into().to_vec(),
            y: y.into().to_vec(),
            radius: radius.into().to_vec(),
            start_angle: start_angle.into().to_vec(),
            end_angle: end_angle.into().to_vec(),
            color: color.into().to_vec(),
            ..Self::default()
        };
        trace!(points = circles.x.len(), "circles created");
        circles
    }

    // =========================================================================
    // Data attributes
    // =========================================================================

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn set_x<'a>(&mut self, x: impl Into<View<'a, f64>>) -> &mut Self {
        assign(&mut self.x, x.into(), "x");
        self.touch()
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn set_y<'a>(&mut self, y: impl Into<View<'a, f64>>) -> &mut Self {
        assign(&mut self.y, y.into(), "y");
        self.touch()
    }

    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    pub fn set_radius<'a>(&mut self, radius: impl Into<View<'a, f64>>) -> &mut Self {
        assign(&mut self.radius, radius.into(), "radius");
        self.touch()
    }

    pub fn start_angle(&self) -> &[f64] {
        &self.start_angle
    }

    pub fn set_start_angle<'a>(&mut self, start_angle: impl Into<View<'a, f64>>) -> &mut Self {
        assign(&mut self.start_angle, start_angle.into(), "start_angle");
        self.touch()
    }

    pub fn end_angle(&self) -> &[f64] {
        &self.end_angle
    }

    pub fn set_end_angle<'a>(&mut self, end_angle: impl Into<View<'a, f64>>) -> &mut Self {
        assign(&mut self.end_angle, end_angle.into(), "end_angle");
        self.touch()
    }

    pub fn color(&self) -> &[f64] {
        &self.color
    }

    pub fn set_color<'a>(&mut self, color: impl Into<View<'a, f64>>) -> &mut Self {
        assign(&mut self.color, color.into(), "color");
        self.touch()
    }

    pub fn radius_at(&self, index: usize) -> f64 {
        value_or_default(&self.radius, index, DEFAULT_RADIUS)
    }

    pub fn start_angle_at(&self, index: usize) -> f64 {
        value_or_default(&self.start_angle, index, DEFAULT_START_ANGLE)
    }

    pub fn end_angle_at(&self, index: usize) -> f64 {
        value_or_default(&self.end_angle, index, DEFAULT_END_ANGLE)
    }

    pub fn color_at(&self, index: usize) -> f64 {
        value_or_default(&self.color, index, DEFAULT_COLOR)
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn face_color(&self) -> Color {
        self.face_color
    }

    /// Fixes the fill color; the palette is no longer consulted.
    pub fn set_face_color(&mut self, face_color: Color) -> &mut Self {
        self.face_color = face_color;
        self.user_face_color = true;
        self.touch()
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f32) -> &mut Self {
        self.line_width = line_width;
        self.touch()
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn set_line_color(&mut self, line_color: Color) -> &mut Self {
        self.line_color = line_color;
        self.touch()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self.touch()
    }

    /// Current style. `face_color` is `Some` once fixed by the user or
    /// drawn from a palette.
    pub fn style(&self) -> CirclesStyle {
        CirclesStyle {
            face_color: self.user_face_color.then_some(self.face_color),
            line_width: self.line_width,
            line_color: self.line_color,
            visible: self.visible,
        }
    }

    pub fn apply_style(&mut self, style: &CirclesStyle) -> &mut Self {
        if let Some(face_color) = style.face_color {
            self.face_color = face_color;
            self.user_face_color = true;
        }
        self.line_width = style.line_width;
        self.line_color = style.line_color;
        self.visible = style.visible;
        self.touch()
    }

    // =========================================================================
    // Change tracking
    // =========================================================================

    /// Mark the element as needing re-serialization.
    pub fn touch(&mut self) -> &mut Self {
        self.dirty = true;
        self
    }

    /// Return and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// # Errors
    ///
    /// [`PlotError::LengthMismatch`] when `x` and `y` differ in length.
    pub fn validate(&self) -> PlotResult<()> {
        if self.x.len() == self.y.len() {
            Ok(())
        } else {
            Err(PlotError::LengthMismatch { x: self.x.len(), y: self.y.len() })
        }
    }

    /// Write a complete `plot` command with its inline data and clear the
    /// dirty flag.
    ///
    /// # Errors
    ///
    /// [`PlotError::LengthMismatch`] for inconsistent data, or
    /// [`PlotError::Format`] when `out` refuses the text.
    #[instrument(level = "debug", skip_all, fields(points = self.x.len()))]
    pub fn write_script<W: Write>(&mut self, out: &mut W, palette: &mut dyn Palette) -> PlotResult<()> {
        self.validate()?;
        let plot = self.plot_string(palette);
        writeln!(out, "plot{plot}")?;
        out.write_str(&self.data_string())?;
        self.dirty = false;
        debug!("circles script written");
        Ok(())
    }

    /// [`write_script`](Self::write_script) into an [`std::io::Write`] sink.
    ///
    /// # Errors
    ///
    /// As `write_script`, plus [`PlotError::Io`].
    #[cfg(feature = "std")]
    pub fn write_script_io<W: std::io::Write>(&mut self, out: &mut W, palette: &mut dyn Palette) -> PlotResult<()> {
        let mut script = String::new();
        self.write_script(&mut script, palette)?;
        out.write_all(script.as_bytes())?;
        Ok(())
    }

    fn points(&self) -> usize {
        if self.x.len() != self.y.len() {
            warn!(x = self.x.len(), y = self.y.len(), "circles x/y length mismatch, extra points dropped");
        }
        self.x.len().min(self.y.len())
    }

    /// Index of the first extreme value, where `better(candidate, current)`
    /// decides whether to move.
    fn extreme(values: &[f64], better: fn(f64, f64) -> bool) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &value) in values.iter().enumerate() {
            match best {
                Some(b) if !better(value, values[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

fn assign(target: &mut Vec<f64>, source: View<'_, f64>, name: &str) {
    target.clear();
    target.extend_from_slice(source.as_slice());
    trace!(attribute = name, len = target.len(), "circles attribute set");
}

impl AxesObject for Circles {
    fn plot_string(&mut self, palette: &mut dyn Palette) -> String {
        if !self.user_face_color && self.color.is_empty() {
            self.face_color = palette.next_color();
            self.user_face_color = true;
            debug!(color = %self.face_color, "circles face color taken from palette");
        }
        let fill = if self.color.is_empty() {
            format!("\"{}\"", self.face_color)
        } else {
            String::from(" variable ")
        };
        format!(
            " '-' with circles linecolor {fill} linewidth {} fillstyle solid border linecolor '{}'",
            self.line_width, self.line_color
        )
    }

    fn legend_string(&self, title: &str) -> String {
        format!(
            " keyentry with circles linecolor var lw 4 fillstyle solid border linecolor 'black' title \"{}\"",
            escape(title)
        )
    }

    fn data_string(&self) -> String {
        let mut out = String::new();
        for i in 0..self.points() {
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "    {} {} {} {} {}",
                self.x[i],
                self.y[i],
                self.radius_at(i),
                self.start_angle_at(i),
                self.end_angle_at(i)
            );
            if !self.color.is_empty() {
                let _ = write!(out, " {}", self.color_at(i));
            }
            out.push('\n');
        }
        out.push_str("e\n");
        out
    }

    fn requires_colormap(&self) -> bool {
        true
    }

    fn xmin(&self) -> Option<f64> {
        let i = Self::extreme(&self.x, |a, b| a < b)?;
        Some(self.x[i] - self.radius_at(i))
    }

    fn xmax(&self) -> Option<f64> {
        let i = Self::extreme(&self.x, |a, b| a > b)?;
        Some(self.x[i] + self.radius_at(i))
    }

    fn ymin(&self) -> Option<f64> {
        let i = Self::extreme(&self.y, |a, b| a < b)?;
        Some(self.y[i] - self.radius_at(i))
    }

    fn ymax(&self) -> Option<f64> {
        let i = Self::extreme(&self.y, |a, b| a > b)?;
        Some(self.y[i] + self.radius_at(i))
    }

    fn axes_category(&self) -> AxesCategory {
        AxesCategory::TwoDimensional
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }
}
