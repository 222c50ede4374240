use log::debug;

use crate::bake::pass::{run_pass, BlendMode, LightDirection};
use crate::image::{NormalSink, SourceImage};

/// Fixed (blend, direction) pairing per source slot. Sources must be supplied
/// in this order: lit-from-north first, then east, south, west.
pub const PASS_SCHEDULE: [(BlendMode, LightDirection); 4] = [
    (BlendMode::Overwrite, LightDirection::North),
    (BlendMode::Add, LightDirection::East),
    (BlendMode::Add, LightDirection::South),
    (BlendMode::AddNormalize, LightDirection::West),
];

/// Bake a normal map from four directionally lit sources into `sink`.
///
/// All four sources must share one pixel shape; on any mismatch this returns
/// `false` without touching the sink. On success the four passes of
/// [`PASS_SCHEDULE`] run to completion in order over the full grid and the
/// function returns `true` — there is no partial-failure path past
/// validation.
///
/// The caller owns buffer sizing: the sink must hold `h × w × 12` bytes at
/// its stride, and each source `h × w × 4` at its own. Undersized buffers
/// panic on slice indexing rather than read out of bounds.
pub fn generate_normal_map(sources: &[SourceImage<'_>; 4], sink: &mut NormalSink<'_>) -> bool {
    let first = &sources[0];
    if sources[1..].iter().any(|s| !first.same_shape(s)) {
        debug!(
            "generate_normal_map: shape mismatch, shapes={:?}",
            sources.each_ref().map(|s| (s.w, s.h))
        );
        return false;
    }

    for (i, (blend, direction)) in PASS_SCHEDULE.iter().enumerate() {
        debug!(
            "generate_normal_map: pass {i} dir={direction:?} blend={blend:?} {}x{}",
            first.w, first.h
        );
        run_pass(&sources[i], sink, *direction, *blend);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::sink::SINK_PIXEL_BYTES;

    fn uniform_source(w: usize, h: usize, value: u8) -> Vec<u8> {
        vec![value; w * h * 4]
    }

    #[test]
    fn mismatch_returns_false_and_keeps_sink_bytes() {
        let a = uniform_source(2, 2, 255);
        let b = uniform_source(3, 2, 255); // one extra column
        let sources = [
            SourceImage { w: 2, h: 2, stride: 8, data: &a },
            SourceImage { w: 3, h: 2, stride: 12, data: &b },
            SourceImage { w: 2, h: 2, stride: 8, data: &a },
            SourceImage { w: 2, h: 2, stride: 8, data: &a },
        ];
        let mut buf = vec![0xC3u8; 2 * 2 * SINK_PIXEL_BYTES];
        let mut sink = NormalSink { stride: 2 * SINK_PIXEL_BYTES, data: &mut buf };

        assert!(!generate_normal_map(&sources, &mut sink));
        assert!(buf.iter().all(|&b| b == 0xC3), "sink was written on failure");
    }

    #[test]
    fn schedule_pairs_slots_with_directions() {
        assert_eq!(
            PASS_SCHEDULE[0],
            (BlendMode::Overwrite, LightDirection::North)
        );
        assert_eq!(PASS_SCHEDULE[1], (BlendMode::Add, LightDirection::East));
        assert_eq!(PASS_SCHEDULE[2], (BlendMode::Add, LightDirection::South));
        assert_eq!(
            PASS_SCHEDULE[3],
            (BlendMode::AddNormalize, LightDirection::West)
        );
    }

    #[test]
    fn matched_sources_return_true() {
        let a = uniform_source(4, 3, 200);
        let sources = [
            SourceImage { w: 4, h: 3, stride: 16, data: &a },
            SourceImage { w: 4, h: 3, stride: 16, data: &a },
            SourceImage { w: 4, h: 3, stride: 16, data: &a },
            SourceImage { w: 4, h: 3, stride: 16, data: &a },
        ];
        let mut buf = vec![0u8; 4 * 3 * SINK_PIXEL_BYTES];
        let mut sink = NormalSink { stride: 4 * SINK_PIXEL_BYTES, data: &mut buf };
        assert!(generate_normal_map(&sources, &mut sink));
    }
}
