//! Orbit boost envelope.
//!
//! Clicking the anchor planet speeds the shooting star up along a fixed
//! profile: ease up to the peak, hold, then ease back down to normal.
//! The envelope is a pure function of time since the click, so repeated
//! clicks simply restart it.

use b612_core::constants::*;
use b612_core::types::Ease;

/// Total length of the boost envelope (seconds).
pub fn total_secs() -> f32 {
    ORBIT_BOOST_RISE_SECS + ORBIT_BOOST_HOLD_SECS + ORBIT_BOOST_FALL_SECS
}

/// Speed multiplier `elapsed` seconds into a boost.
pub fn multiplier_at(elapsed: f32) -> f32 {
    if elapsed <= 0.0 {
        return 1.0;
    }
    if elapsed < ORBIT_BOOST_RISE_SECS {
        let t = Ease::CubicOut.apply(elapsed / ORBIT_BOOST_RISE_SECS);
        return 1.0 + (ORBIT_BOOST_PEAK - 1.0) * t;
    }
    let after_rise = elapsed - ORBIT_BOOST_RISE_SECS;
    if after_rise < ORBIT_BOOST_HOLD_SECS {
        return ORBIT_BOOST_PEAK;
    }
    let after_hold = after_rise - ORBIT_BOOST_HOLD_SECS;
    if after_hold < ORBIT_BOOST_FALL_SECS {
        let t = Ease::CubicInOut.apply(after_hold / ORBIT_BOOST_FALL_SECS);
        return ORBIT_BOOST_PEAK + (1.0 - ORBIT_BOOST_PEAK) * t;
    }
    1.0
}

/// Whether the envelope has fully decayed.
pub fn finished(elapsed: f32) -> bool {
    elapsed >= total_secs()
}
