//! Structured outcome + timing for a bake run.
//!
//! The core orchestrator keeps its one-bit success contract; tools that want
//! to report on a run use [`bake_with_report`] instead, which times each pass
//! and returns a serializable [`BakeReport`].

use std::time::Instant;

use serde::Serialize;

use crate::bake::{run_pass, BlendMode, LightDirection, PASS_SCHEDULE};
use crate::image::{NormalSink, SourceImage};

/// Timing entry for a single directional pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTiming {
    pub direction: LightDirection,
    pub blend: BlendMode,
    pub elapsed_ms: f64,
}

/// Aggregated outcome of one bake run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BakeReport {
    pub ok: bool,
    pub width: usize,
    pub height: usize,
    pub latency_ms: f64,
    pub passes: Vec<PassTiming>,
}

/// Run the four-pass bake with per-pass timing.
///
/// Semantics are identical to [`crate::bake::generate_normal_map`]: same
/// validation, same schedule, same sink bytes. `ok` mirrors the bool return;
/// on rejection `passes` is empty and the sink is untouched.
pub fn bake_with_report(sources: &[SourceImage<'_>; 4], sink: &mut NormalSink<'_>) -> BakeReport {
    let first = &sources[0];
    let (width, height) = (first.w, first.h);
    let start = Instant::now();

    if sources[1..].iter().any(|s| !first.same_shape(s)) {
        return BakeReport {
            ok: false,
            width,
            height,
            latency_ms: start.elapsed().as_secs_f64() * 1e3,
            passes: Vec::new(),
        };
    }

    let mut passes = Vec::with_capacity(PASS_SCHEDULE.len());
    for (i, (blend, direction)) in PASS_SCHEDULE.iter().enumerate() {
        let pass_start = Instant::now();
        run_pass(&sources[i], sink, *direction, *blend);
        passes.push(PassTiming {
            direction: *direction,
            blend: *blend,
            elapsed_ms: pass_start.elapsed().as_secs_f64() * 1e3,
        });
    }

    BakeReport {
        ok: true,
        width,
        height,
        latency_ms: start.elapsed().as_secs_f64() * 1e3,
        passes,
    }
}
