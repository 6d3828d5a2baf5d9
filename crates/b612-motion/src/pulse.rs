//! Star brightness pulsing.

use b612_core::constants::*;

/// Brightness of one star at scene time `elapsed_secs`.
///
/// Sine pulse remapped to [0, 1]; the per-star phase offset keeps the
/// dome from throbbing in unison.
pub fn brightness(elapsed_secs: f32, offset: f32) -> f32 {
    0.5 + 0.5 * (elapsed_secs * STAR_PULSE_SPEED + offset).sin()
}

/// Fill `out` with the brightness of every star at the given time.
/// `out` is reused across ticks; it is resized to match the offsets.
pub fn fill_brightness(elapsed_secs: f32, offsets: &[f32], out: &mut Vec<f32>) {
    out.clear();
    out.extend(offsets.iter().map(|&o| brightness(elapsed_secs, o)));
}
