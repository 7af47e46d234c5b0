//! Color specs handed to the 2D surface.

use crate::constants::{
    LINK_DRAW_ALPHA_SCALE, LINK_RGB, PARTICLE_LIGHTNESS_PCT, PARTICLE_SATURATION_PCT,
};

/// `hsla(...)` spec for a particle dot. Saturation and lightness are
/// fixed; hue and alpha come from the particle.
pub fn particle_color(hue: f32, alpha: f32) -> String {
    format!(
        "hsla({:.1}, {}%, {}%, {:.2})",
        hue, PARTICLE_SATURATION_PCT, PARTICLE_LIGHTNESS_PCT, alpha
    )
}

/// `rgba(...)` spec for a proximity link at the given falloff alpha.
pub fn link_color(alpha: f32) -> String {
    let [r, g, b] = LINK_RGB;
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha * LINK_DRAW_ALPHA_SCALE)
}
