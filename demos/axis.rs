//! Calibrate a horizontal axis whose first tick is missing.

use glam::dvec2;
use linework::{AxisConfig, AxisDirection, LineSegment, TextRun, calibrate_axis, find_axis_ticks};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AxisConfig::default();
    let backbone = LineSegment::new(dvec2(0.0, 100.0), dvec2(70.0, 100.0));

    let mut lines = vec![backbone.clone()];
    for x in [10.0, 30.0, 50.0, 70.0] {
        lines.push(LineSegment::new(dvec2(x, 100.0), dvec2(x, 105.0)));
    }
    for x in [20.0, 40.0, 60.0] {
        lines.push(LineSegment::new(dvec2(x, 100.0), dvec2(x, 102.0)));
    }
    let ticks = find_axis_ticks(&backbone, &lines, &config);

    let labels: Vec<TextRun> = [0.0, 10.0, 30.0, 50.0, 70.0]
        .iter()
        .zip(["0", "10", "20", "30", "40"])
        .map(|(&x, text)| TextRun::new(dvec2(x - 3.0, 120.0), 10.0, text))
        .collect();

    let axis = calibrate_axis(
        &backbone,
        &ticks,
        &labels,
        AxisDirection::Horizontal,
        None,
        &config,
    )?;

    println!("{axis}");
    for screen in [0.0, 25.0, 50.0, 70.0] {
        println!("  x={screen} -> {}", axis.transform_screen_to_user(screen));
    }
    Ok(())
}
