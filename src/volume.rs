//! Volume clamping
//!
//! Commands arrive from untrusted publishers and may carry any integer in
//! the `volume` field; the engine accepts only 8-bit values.

use tracing::warn;

pub const VOLUME_MIN: i64 = 0x00;
pub const VOLUME_MAX: i64 = 0xFF;

/// Clamp a raw command volume into the engine's `[0, 255]` range.
///
/// Total function: out-of-range values are clipped with a warning, never
/// rejected.
pub fn clamp_volume(raw: i64) -> u8 {
    if raw < VOLUME_MIN {
        warn!("volume {} clipped to min", raw);
        return VOLUME_MIN as u8;
    }
    if raw > VOLUME_MAX {
        warn!("volume {} clipped to max", raw);
        return VOLUME_MAX as u8;
    }
    raw as u8
}
