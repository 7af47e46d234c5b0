//! Particle population: spawning, pointer attraction, audio coupling,
//! toroidal wrapping and capacity-bounded eviction.

use crate::constants::*;
use crate::pointer::PointerState;
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::f32::consts::TAU;

/// Viewport dimensions consumed for wrap bounds and population sizing.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Baseline population derived from viewport area, floored for tiny
    /// viewports. Also the base of the eviction cap.
    pub fn nominal_count(&self) -> usize {
        ((self.width * self.height / AREA_PER_PARTICLE) as usize).max(MIN_POPULATION)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub base_size: f32,
    pub hue: f32,
    pub mass: f32,
    pub alpha: f32,
    /// Insertion tag; strictly increasing, drives FIFO eviction.
    pub seq: u64,
}

impl Particle {
    /// Radius actually rendered, floor-clamped so the dot never vanishes.
    #[inline]
    pub fn draw_radius(&self) -> f32 {
        self.size.max(MIN_DRAW_RADIUS)
    }
}

/// Owns the live population. Oldest particles sit at the front of the
/// deque, so capacity eviction is a pop from the front.
pub struct ParticleSystem {
    particles: VecDeque<Particle>,
    viewport: Viewport,
    nominal: usize,
    rng: StdRng,
    next_seq: u64,
}

impl ParticleSystem {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let nominal = viewport.nominal_count();
        Self {
            particles: VecDeque::with_capacity(nominal * CAPACITY_MULTIPLIER),
            viewport,
            nominal,
            rng: StdRng::seed_from_u64(seed),
            next_seq: 0,
        }
    }

    /// Clear and repopulate with the nominal drifting population.
    pub fn reset(&mut self) {
        self.particles.clear();
        let count = self.nominal;
        self.spawn(count, None);
        log::debug!("reset population to {}", self.particles.len());
    }

    /// Create `count` particles. With an origin this is the burst path:
    /// all particles start there with outward radial velocity. Without
    /// one, positions are uniform over the viewport with a slow drift.
    pub fn spawn(&mut self, count: usize, origin: Option<Vec2>) {
        for _ in 0..count {
            let (pos, speed_lo, speed_hi) = match origin {
                Some(o) => (o, BURST_SPEED_MIN, BURST_SPEED_MAX),
                None => (
                    Vec2::new(
                        self.rng.gen_range(0.0..self.viewport.width.max(1.0)),
                        self.rng.gen_range(0.0..self.viewport.height.max(1.0)),
                    ),
                    DRIFT_SPEED_MIN,
                    DRIFT_SPEED_MAX,
                ),
            };
            let speed = self.rng.gen_range(speed_lo..speed_hi);
            let angle = self.rng.gen_range(0.0..TAU);
            let size = self.rng.gen_range(SIZE_MIN..SIZE_MAX);
            let p = Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                size,
                base_size: size,
                hue: self.rng.gen_range(0.0..360.0),
                mass: self.rng.gen_range(MASS_MIN..MASS_MAX),
                alpha: PARTICLE_ALPHA,
                seq: self.next_seq,
            };
            self.next_seq += 1;
            self.particles.push_back(p);
        }
        self.evict_over_capacity();
    }

    /// FIFO eviction down to the hard cap after any spawn.
    pub fn evict_over_capacity(&mut self) {
        let cap = self.nominal * CAPACITY_MULTIPLIER;
        while self.particles.len() > cap {
            self.particles.pop_front();
        }
    }

    /// Advance every particle by `dt` units of scaled time.
    ///
    /// `energy` is the per-frame spectral energy; `None` means no audio is
    /// flowing through the analysis path, which is distinct from silence
    /// (`Some(0.0)`) and applies no coupling at all. Non-finite pointer
    /// input and negative `dt` are treated as benign: no attraction that
    /// frame, zero elapsed time.
    pub fn update(&mut self, dt: f32, energy: Option<f32>, pointer: &PointerState) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let center = self.viewport.center();
        let attractor = pointer.attractor();
        let relax = 1.0 - (-dt * SIZE_RELAX_RATE).exp();

        for p in &mut self.particles {
            // Pointer attraction inside the radius; otherwise a tiny pull
            // toward the viewport center keeps idle drift bounded.
            let mut attracted = false;
            if let Some(target) = attractor {
                let delta = target - p.pos;
                let d = delta.length();
                let dist = if d > 0.0 { d } else { 1.0 };
                if dist < ATTRACTION_RADIUS {
                    let force = (1.0 - dist / ATTRACTION_RADIUS) * ATTRACTION_FORCE;
                    p.vel += delta / dist * (force / p.mass);
                    attracted = true;
                }
            }
            if !attracted {
                p.vel += (center - p.pos) * CENTERING_FORCE;
            }

            match energy {
                Some(e) => {
                    let factor = 1.0 + e / AUDIO_SIZE_DIVISOR;
                    p.size = p.base_size * (AUDIO_SIZE_BASE + factor * AUDIO_SIZE_SPAN);
                    p.hue = (p.hue + e * AUDIO_HUE_STEP).rem_euclid(360.0);
                    p.vel *= AUDIO_VEL_BASE + e / AUDIO_VEL_DIVISOR;
                }
                None => {
                    p.size += (p.base_size - p.size) * relax;
                }
            }

            p.pos += p.vel * dt;
            p.pos.x = wrap_axis(p.pos.x, self.viewport.width);
            p.pos.y = wrap_axis(p.pos.y, self.viewport.height);
        }
    }

    /// New wrap bounds and eviction baseline after a viewport change.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.nominal = viewport.nominal_count();
    }

    /// Copy current positions into a reusable buffer for the link pass.
    pub fn positions_into(&self, out: &mut Vec<Vec2>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| p.pos));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn nominal(&self) -> usize {
        self.nominal
    }
}

/// Toroidal wrap into [-margin, max + margin].
#[inline]
fn wrap_axis(v: f32, max: f32) -> f32 {
    if v < -WRAP_MARGIN {
        max + WRAP_MARGIN
    } else if v > max + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}
