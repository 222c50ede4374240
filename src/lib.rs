#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bake;
pub mod diagnostics;
pub mod image;
pub mod vector;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the four-pass bake + the buffer views it consumes.
pub use crate::bake::{generate_normal_map, run_pass, BlendMode, LightDirection};
pub use crate::image::{NormalSink, SourceImage};

// Timed variant returning structured diagnostics.
pub use crate::diagnostics::{bake_with_report, BakeReport, PassTiming};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use normal_baker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 64usize);
/// let lit = vec![128u8; w * h * 4];
/// let mut out = vec![0u8; w * h * 12];
///
/// let sources = [
///     SourceImage { w, h, stride: w * 4, data: &lit },
///     SourceImage { w, h, stride: w * 4, data: &lit },
///     SourceImage { w, h, stride: w * 4, data: &lit },
///     SourceImage { w, h, stride: w * 4, data: &lit },
/// ];
/// let mut sink = NormalSink { stride: w * 12, data: &mut out };
/// let ok = generate_normal_map(&sources, &mut sink);
/// println!("ok={ok}");
/// # }
/// ```
pub mod prelude {
    pub use crate::bake::generate_normal_map;
    pub use crate::image::{NormalSink, SourceImage};
}
