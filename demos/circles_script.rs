//! Writes a gnuplot script drawing a ring of circles to stdout.
//!
//! ```text
//! cargo run --example circles_script | gnuplot -persist
//! ```

use plot_caps::prelude::*;

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let n: u32 = 12;
    let (x, y): (Vec<f64>, Vec<f64>) = (0..n)
        .map(|i| {
            let angle = f64::from(i) / f64::from(n) * std::f64::consts::TAU;
            (angle.cos() * 10.0, angle.sin() * 10.0)
        })
        .unzip();
    let radii: Vec<f64> = (0..n).map(|i| 0.5 + f64::from(i) * 0.1).collect();

    let mut circles = Circles::new(&x, &y, &radii);
    circles.set_line_width(1.0);

    if let Some(bounds) = circles.bounds() {
        println!("set xrange [{}:{}]", bounds.x_min, bounds.x_max);
        println!("set yrange [{}:{}]", bounds.y_min, bounds.y_max);
    }
    println!("set size ratio -1");
    circles.write_script_io(&mut std::io::stdout().lock(), &mut ColorCycle::default())?;
    Ok(())
}
