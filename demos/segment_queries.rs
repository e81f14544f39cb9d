//! Runs the segment queries over a few fixed layouts and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example segment_queries
//! RUST_LOG=pcs=trace cargo run --example segment_queries   # include degeneracy events
//! ```

use pcs::{LineSegment, Point, PrecomputedLineSegment, Result, Segment};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and pcs.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("segment_queries=info".parse().unwrap_or_default())
        .add_directive("pcs=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let floor = segment(0.0, 0.0, 10.0, 0.0)?;
    let probe = Point::new(5.0, 5.0);
    tracing::info!(
        closest = ?floor.closest_point(probe),
        distance_squared = floor.distance_squared_to_closest_point(probe.x, probe.y),
        on_segment = floor.closest_point_is_on_segment(probe),
        "point query"
    );

    let layouts = [
        ("crossing", segment(0.0, 0.0, 10.0, 10.0)?, segment(0.0, 10.0, 10.0, 0.0)?),
        ("collinear gap", floor.clone(), segment(20.0, 0.0, 30.0, 0.0)?),
        ("touching", floor.clone(), segment(10.0, 0.0, 10.0, 10.0)?),
    ];
    for (name, a, b) in &layouts {
        tracing::info!(
            layout = *name,
            intersects = a.intersects(b),
            distance_squared = a.distance_squared_to_line_segment(b),
            "segment query"
        );
    }

    let mut collapsed = Segment::new(3.0, 4.0, 3.0, 4.0);
    collapsed.precompute();
    if let Err(err) = collapsed.ensure_legal() {
        tracing::warn!(%err, direction = ?collapsed.direction(), "degenerate segment");
    }

    Ok(())
}

fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Segment> {
    Segment::try_precomputed(Point::new(x1, y1), Point::new(x2, y2))
}
