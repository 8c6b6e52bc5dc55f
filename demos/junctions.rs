//! Classify a small structure drawing and print its junctions.
//!
//! Run with `cargo run --example junctions --features tracing` to see each
//! classification and join decision on stderr.

use glam::dvec2;
use linework::{
    ClassifyConfig, JoinConfig, Joinable, JoinableArena, LineSegment, TextRun, build_junctions,
    classify_lines,
};

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
    LineSegment::new(dvec2(x0, y0), dvec2(x1, y1))
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // a hatched wedge, a double bond to the right of it, a single bond down
    // to an "OH" label
    let mut lines: Vec<LineSegment> = [10.0, 8.0, 6.0, 4.0]
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            let x = 2.0 * i as f64;
            line(x, -len / 2.0, x, len / 2.0)
        })
        .collect();
    lines.push(line(8.0, -1.5, 28.0, -1.5));
    lines.push(line(9.0, 1.5, 27.0, 1.5));
    lines.push(line(28.0, 0.0, 28.0, 20.0));
    let texts = vec![TextRun::new(dvec2(28.0, 24.0), 8.0, "OH")];

    let classified = classify_lines(&lines, &ClassifyConfig::default());
    println!(
        "{} lines: {} single, {} tram pairs, {} sequences",
        classified.line_count(),
        classified.singles.len(),
        classified.tram_pairs.len(),
        classified.sequences.len()
    );

    let mut arena = JoinableArena::from_classified(classified, &texts, JoinConfig::default())?;
    let junctions = build_junctions(&mut arena)?;

    for joinable in arena.iter() {
        println!("{} {}", joinable.id(), joinable.kind());
    }
    for junction in &junctions {
        println!("{junction}");
    }
    Ok(())
}
