//! Circles: fallback rule, serialization, bounds and change tracking.

use plot_caps::element::{
    AxesCategory, AxesObject, Bounds, Circles, CirclesStyle, Color, ColorCycle, Palette, PlotError,
};
use plot_caps::view::View;
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Always hands out the same color.
struct Fixed(Color);

impl Palette for Fixed {
    fn next_color(&mut self) -> Color {
        self.0
    }
}

// =============================================================================
// Fallback rule
// =============================================================================

#[test]
fn test_short_radius_repeats_first_value() {
    let c = Circles::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[5.0]);
    assert_eq!(c.radius_at(2), 5.0);
}

#[test]
fn test_scalar_radius() {
    let r = 5.0_f64;
    let c = Circles::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &r);
    assert_eq!(c.radius(), &[5.0]);
    assert_eq!(c.radius_at(1), 5.0);
}

#[test]
fn test_empty_radius_uses_default() {
    let c = Circles::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], View::empty());
    for i in 0..3 {
        assert_eq!(c.radius_at(i), 1.0);
    }
}

#[test]
fn test_angle_defaults() {
    let c = Circles::with_angles(
        &[0.0, 1.0],
        &[0.0, 1.0],
        View::empty(),
        &[10.0, 20.0],
        View::empty(),
        View::empty(),
    );
    assert_eq!(c.start_angle_at(1), 20.0);
    assert_eq!(c.end_angle_at(1), 360.0);
    assert_eq!(c.color_at(0), 1.0);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_data_string() {
    let c = Circles::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[5.0]);
    assert_eq!(
        c.data_string(),
        "    0 0 5 0 360\n    1 1 5 0 360\n    2 2 5 0 360\ne\n"
    );
}

#[test]
fn test_data_string_with_colors() {
    let c = Circles::with_angles(
        &[0.5, 1.0],
        &[0.0, 1.0],
        &[2.0, 3.0],
        &[0.0],
        &[90.0],
        &[0.25],
    );
    assert_eq!(c.data_string(), "    0.5 0 2 0 90 0.25\n    1 1 3 0 90 0.25\ne\n");
}

#[test]
fn test_plot_string_takes_palette_color() {
    let mut c = Circles::new(&[0.0], &[0.0], View::empty());
    let plot = c.plot_string(&mut ColorCycle::default());
    assert_eq!(
        plot,
        " '-' with circles linecolor \"#000072bd\" linewidth 2 fillstyle solid border linecolor '#00000000'"
    );
}

#[test]
fn test_plot_string_variable_color() {
    let mut c = Circles::new(&[0.0], &[0.0], View::empty());
    c.set_color(&[0.3]);
    let plot = c.plot_string(&mut Fixed(Color::RED));
    assert!(plot.contains("linecolor  variable  linewidth"));
    // per-point colors leave the face color alone
    assert_eq!(c.style().face_color, None);
}

#[test]
fn test_user_face_color_wins() {
    let mut c = Circles::new(&[0.0], &[0.0], View::empty());
    c.set_face_color(Color::RED).set_line_width(0.5);
    let plot = c.plot_string(&mut Fixed(Color::BLUE));
    assert!(plot.contains("linecolor \"#00ff0000\" linewidth 0.5"));
}

#[test]
fn test_legend_string_escapes_title() {
    let c = Circles::default();
    assert_eq!(
        c.legend_string(r#"My "set""#),
        " keyentry with circles linecolor var lw 4 fillstyle solid border linecolor 'black' title \"My \\\"set\\\"\""
    );
}

#[test]
fn test_write_script() {
    init_tracing();
    let mut c = Circles::new(&[1.0, 2.0], &[3.0, 4.0], &[0.5]);
    c.set_face_color(Color::GREEN);
    let mut script = String::new();
    c.write_script(&mut script, &mut ColorCycle::default()).unwrap();
    assert_eq!(
        script,
        "plot '-' with circles linecolor \"#0000ff00\" linewidth 2 fillstyle solid border linecolor '#00000000'\n    1 3 0.5 0 360\n    2 4 0.5 0 360\ne\n"
    );
    assert!(!c.is_dirty());
}

#[cfg(feature = "std")]
#[test]
fn test_write_script_io() {
    let mut c = Circles::new(&[1.0], &[1.0], View::empty());
    let mut out: Vec<u8> = Vec::new();
    c.write_script_io(&mut out, &mut Fixed(Color::BLACK)).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("plot '-' with circles"));
    assert!(text.ends_with("    1 1 1 0 360\ne\n"));
}

#[test]
fn test_length_mismatch_is_an_error() {
    init_tracing();
    let mut c = Circles::new(&[1.0, 2.0, 3.0], &[1.0, 2.0], View::empty());
    let mut script = String::new();
    let err = c.write_script(&mut script, &mut ColorCycle::default()).unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { x: 3, y: 2 }));
    assert_eq!(err.to_string(), "x has 3 points but y has 2");
    assert!(script.is_empty());
    // data_string still renders the complete points
    assert_eq!(c.data_string(), "    1 1 1 0 360\n    2 2 1 0 360\ne\n");
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn test_bounds_include_radius() {
    let radii = vec![0.5, 1.5];
    let c = Circles::new(&[0.0, 4.0], &[0.0, 1.0], &radii);
    assert_eq!(c.xmin(), Some(-0.5));
    assert_eq!(c.xmax(), Some(5.5));
    assert_eq!(c.ymin(), Some(-0.5));
    assert_eq!(c.ymax(), Some(2.5));
    assert_eq!(c.bounds(), Some(Bounds::new(-0.5, 5.5, -0.5, 2.5)));
}

#[test]
fn test_bounds_use_radius_fallback() {
    let c = Circles::new(&[3.0, 1.0, 2.0], &[0.0, 0.0, 0.0], &[2.0]);
    assert_eq!(c.xmin(), Some(-1.0));
    assert_eq!(c.xmax(), Some(5.0));
}

#[test]
fn test_empty_has_no_bounds() {
    let c = Circles::default();
    assert_eq!(c.xmin(), None);
    assert_eq!(c.bounds(), None);
    assert!(c.requires_colormap());
    assert_eq!(c.axes_category(), AxesCategory::TwoDimensional);
}

// =============================================================================
// Ownership and change tracking
// =============================================================================

#[test]
fn test_element_owns_its_copy() {
    let mut x = vec![1.0, 2.0];
    let c = Circles::new(&x, &[0.0, 0.0], View::empty());
    x[0] = 100.0;
    assert_eq!(c.x(), &[1.0, 2.0]);
}

#[test]
fn test_every_setter_marks_dirty() {
    let mut c = Circles::default();
    let setters: [fn(&mut Circles); 8] = [
        |c| {
            c.set_x(&[1.0]);
        },
        |c| {
            c.set_y(&[1.0]);
        },
        |c| {
            c.set_radius(&[1.0]);
        },
        |c| {
            c.set_start_angle(&[1.0]);
        },
        |c| {
            c.set_end_angle(&[1.0]);
        },
        |c| {
            c.set_color(&[1.0]);
        },
        |c| {
            c.set_line_color(Color::WHITE);
        },
        |c| {
            c.set_visible(false);
        },
    ];
    for set in setters {
        c.take_dirty();
        set(&mut c);
        assert!(c.is_dirty());
    }
}

#[test]
fn test_setter_replaces_whole_sequence() {
    let mut c = Circles::new(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
    c.set_radius(&[9.0]);
    assert_eq!(c.radius(), &[9.0]);
    assert_eq!(c.radius_at(2), 9.0);
}

#[test]
fn test_style_round_trip() {
    let style = CirclesStyle {
        face_color: Some(Color::BLUE),
        line_width: 3.0,
        line_color: Color::WHITE,
        visible: false,
    };
    let mut c = Circles::default();
    c.apply_style(&style);
    assert_eq!(c.style(), style);
    assert!(!c.visible());
    assert_eq!(c.line_width(), 3.0);
}
