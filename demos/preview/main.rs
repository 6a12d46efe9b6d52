//! Archline preview: replays a scripted drag for each curve kind and logs the
//! geometry a host would render.
//!
//! Usage:
//! ```text
//! cargo run --example preview
//! RUST_LOG=archline=trace cargo run --example preview
//! ```

use archline::drag::{
    BasketHandleSampler, CatenarySampler, DragSession, ParabolaSampler, RampantArchSampler,
    SamplerStatus,
};
use archline::geometry::ArcChain;
use archline::math::{transform_points, x_axis, y_axis, Isometry2, Point2, Vector2};
use archline::operations::CenterCount;
use archline::settings::CurveSettings;

fn main() -> archline::Result<()> {
    // Default: WARN for everything, INFO for the preview and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=archline=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("preview=info".parse().unwrap_or_default())
        .add_directive("archline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut settings = CurveSettings::from_toml_str("center_count = 7\nnum_samples = 9\n")?;
    let start = Point2::new(6.0, 1.0);
    let end = Point2::new(-4.0, -1.5);

    let mut basket = DragSession::new(BasketHandleSampler::new(start, end, settings.center_count));
    drag(&mut basket, &[0.5, 1.5, 1.5, -2.0, 3.0]);
    if let Some((height, chain)) = basket.finish() {
        log_chain("basket handle", height, &chain);
    }

    let mut rampant = DragSession::new(RampantArchSampler::new(start, end, x_axis()));
    drag(&mut rampant, &[2.0, 0.0, 2.5]);
    if let Some((height, chain)) = rampant.finish() {
        log_chain("rampant arch", height, &chain);
    }

    let sampler = CatenarySampler::new(start, end, settings.num_samples as usize);
    let initial = settings.tension_for(&start, &end);
    let (mut cable, _) = DragSession::with_initial(sampler, initial);
    drag(&mut cable, &[0.05, 4.0, 6.0]);
    if let Some((tension, points)) = cable.finish() {
        settings.remember_tension(tension);
        // The cable hangs in the drawing's user frame, rotated onto a sloped wall.
        let user_frame = Isometry2::new(Vector2::new(20.0, 5.0), 0.25);
        let placed = transform_points(&points, &user_frame);
        tracing::info!(tension, ?placed, "catenary committed");
    }

    let summit = Point2::new(0.0, 2.0);
    let mut parabola = DragSession::new(ParabolaSampler::new(summit, y_axis()));
    drag(&mut parabola, &[summit, Point2::new(3.0, 2.0), Point2::new(3.0, 4.25)]);
    if let Some((drag_point, shape)) = parabola.finish() {
        tracing::info!(
            ?drag_point,
            focus = ?shape.focus,
            control_points = ?shape.control_points,
            "parabola committed"
        );
    }

    settings.center_count = CenterCount::Three;
    tracing::info!(settings = %settings.to_toml_string()?, "settings to remember");
    Ok(())
}

fn drag<S: archline::drag::Sampler>(session: &mut DragSession<S>, values: &[S::Param]) {
    for &value in values {
        let status = session.sample(value);
        if status == SamplerStatus::Rejected {
            tracing::warn!(?value, "value rejected, keeping previous preview");
        } else {
            tracing::info!(?value, ?status, "sampled");
        }
    }
}

fn log_chain(kind: &str, height: f64, chain: &ArcChain) {
    let defect = chain.continuity_defect();
    tracing::info!(
        kind,
        height,
        arcs = chain.len(),
        sweep = chain.total_sweep(),
        max_gap = defect.max_gap,
        "committed"
    );
    for (vertex, bulge) in chain.vertices() {
        tracing::info!(x = vertex.x, y = vertex.y, bulge, "vertex");
    }
}
