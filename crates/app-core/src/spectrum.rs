//! Spectrum reduction: one scalar energy value per frame.

use crate::constants::{BAND_HIGH_FRACTION, BAND_LOW_FRACTION};

/// Reduce a byte frequency buffer (each entry in [0, 255]) to the mean of
/// the 10%–50% sub-band — low-mid/mid frequencies, skipping sub-bass and
/// treble.
///
/// Returns `None` when no buffer is available (audio inactive or the
/// spectrum toggle off). `Some(0.0)` is a valid silence reading and must
/// never be conflated with `None` by callers.
pub fn band_energy(freq: &[u8]) -> Option<f32> {
    if freq.is_empty() {
        return None;
    }
    let start = (freq.len() as f32 * BAND_LOW_FRACTION) as usize;
    let end = (freq.len() as f32 * BAND_HIGH_FRACTION) as usize;
    let sum: u32 = freq[start..end].iter().map(|&v| v as u32).sum();
    Some(sum as f32 / (end - start).max(1) as f32)
}
