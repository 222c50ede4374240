//! Four-pass photometric-stereo bake.
//!
//! Overview
//! - Each pass collapses one source image to a per-pixel intensity, remaps it
//!   to a signed tilt estimate in [−1, 1], projects it onto the axis assigned
//!   to the pass's light direction and blends it into the sink.
//! - The orchestrator validates that all four sources share one shape, then
//!   runs a fixed (blend, direction) schedule: Overwrite/North, Add/East,
//!   Add/South, AddNormalize/West. Later passes read what earlier passes
//!   wrote, so the order is part of the contract, not a tuning knob.
//! - Within a pass every pixel is independent (reads are confined to the
//!   source, writes to disjoint 12-byte spans), so the row loop could be
//!   parallelized as long as passes stay strictly ordered. The crate ships
//!   single-threaded.
//!
//! Modules
//! - [`pass`] – [`LightDirection`], [`BlendMode`] and the per-pass pixel loop.
//! - `generate` – shape validation + the fixed four-pass schedule.

pub mod pass;

mod generate;

pub use generate::{generate_normal_map, PASS_SCHEDULE};
pub use pass::{run_pass, BlendMode, LightDirection};
