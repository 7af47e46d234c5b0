// Shared simulation/visual tuning constants used by the frontends.

// Population sizing
pub const AREA_PER_PARTICLE: f32 = 1600.0; // viewport px^2 per nominal particle
pub const MIN_POPULATION: usize = 60; // floor for tiny viewports
pub const CAPACITY_MULTIPLIER: usize = 3; // hard cap = nominal * this

// Pointer interaction
pub const ATTRACTION_RADIUS: f32 = 200.0; // max distance at which the pointer pulls
pub const ATTRACTION_FORCE: f32 = 0.6; // impulse scale at zero distance
pub const CENTERING_FORCE: f32 = 0.00002; // gentle pull toward center outside the radius
pub const BURST_COUNT: usize = 12; // particles per press/touch edge

// Spawn velocity ranges
pub const DRIFT_SPEED_MIN: f32 = 0.2;
pub const DRIFT_SPEED_MAX: f32 = 1.4;
pub const BURST_SPEED_MIN: f32 = 2.0;
pub const BURST_SPEED_MAX: f32 = 6.0;

// Particle body
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 5.0;
pub const MASS_MIN: f32 = 1.0;
pub const MASS_MAX: f32 = 3.0;
pub const PARTICLE_ALPHA: f32 = 0.8;
pub const MIN_DRAW_RADIUS: f32 = 0.3; // never draw a zero/negative radius
pub const WRAP_MARGIN: f32 = 10.0; // exit one edge, re-enter the opposite one

// Audio coupling (energy is a byte-scale value in [0, 255])
pub const AUDIO_SIZE_DIVISOR: f32 = 120.0;
pub const AUDIO_SIZE_BASE: f32 = 0.8;
pub const AUDIO_SIZE_SPAN: f32 = 0.6;
pub const AUDIO_HUE_STEP: f32 = 0.05; // hue degrees per energy unit
pub const AUDIO_VEL_BASE: f32 = 0.995;
pub const AUDIO_VEL_DIVISOR: f32 = 5000.0;
pub const SIZE_RELAX_RATE: f32 = 0.02; // exponential return to base size, per time unit

// Spectrum reduction band (fractions of the frequency buffer length)
pub const BAND_LOW_FRACTION: f32 = 0.1;
pub const BAND_HIGH_FRACTION: f32 = 0.5;

// Proximity links
pub const LINK_DISTANCE_DIVISOR: f32 = 20.0; // threshold = (w + h) / this
pub const LINK_DISTANCE_MIN: f32 = 80.0;
pub const LINK_DISTANCE_MAX: f32 = 160.0;
pub const LINK_BASE_ALPHA: f32 = 0.5; // alpha at zero distance
pub const LINK_DRAW_ALPHA_SCALE: f32 = 0.8;
pub const LINK_LINE_WIDTH: f32 = 0.8;
pub const LINK_RGB: [u8; 3] = [150, 200, 255];

// Particle color (hue comes from the particle itself)
pub const PARTICLE_SATURATION_PCT: u32 = 80;
pub const PARTICLE_LIGHTNESS_PCT: u32 = 60;

// Background wash painted under every frame
pub const BG_GRADIENT_START: &str = "rgba(6, 10, 20, 0.2)";
pub const BG_GRADIENT_END: &str = "rgba(8, 12, 30, 0.2)";

// Frame clock: scales elapsed milliseconds into simulation time so motion
// does not depend on the display refresh rate
pub const TIME_SCALE_PER_MS: f32 = 0.06;
