// Host-side tests for the particle system: spawning, forces, wrapping,
// audio coupling and capacity eviction.

use app_core::*;
use glam::Vec2;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn centered_pointer() -> PointerState {
    PointerState::new(viewport().center())
}

fn make_system() -> ParticleSystem {
    let mut ps = ParticleSystem::new(viewport(), 42);
    ps.reset();
    ps
}

#[test]
fn nominal_count_scales_with_area_and_floors() {
    assert_eq!(viewport().nominal_count(), 300); // 800*600/1600
    assert_eq!(Viewport::new(100.0, 100.0).nominal_count(), MIN_POPULATION);
}

#[test]
fn reset_populates_nominal_with_valid_particles() {
    let ps = make_system();
    assert_eq!(ps.len(), 300);
    for p in ps.iter() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        assert!(p.size >= SIZE_MIN && p.size < SIZE_MAX);
        assert!((p.size - p.base_size).abs() < f32::EPSILON);
        assert!(p.mass >= MASS_MIN && p.mass < MASS_MAX);
        assert!(p.hue >= 0.0 && p.hue < 360.0);
        let speed = p.vel.length();
        assert!(
            speed >= DRIFT_SPEED_MIN && speed < DRIFT_SPEED_MAX + 1e-4,
            "drift speed out of range: {speed}"
        );
    }
}

#[test]
fn wrap_invariant_holds_after_every_update() {
    let mut ps = make_system();
    let pointer = centered_pointer();
    for i in 0..200 {
        let energy = if i % 3 == 0 { Some(180.0) } else { None };
        ps.update(1.0, energy, &pointer);
        for p in ps.iter() {
            assert!(
                p.pos.x >= -WRAP_MARGIN && p.pos.x <= 800.0 + WRAP_MARGIN,
                "x out of wrap bounds at step {i}: {}",
                p.pos.x
            );
            assert!(
                p.pos.y >= -WRAP_MARGIN && p.pos.y <= 600.0 + WRAP_MARGIN,
                "y out of wrap bounds at step {i}: {}",
                p.pos.y
            );
        }
    }
}

#[test]
fn draw_radius_never_drops_below_floor() {
    let p = Particle {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
        size: -2.0,
        base_size: 1.0,
        hue: 0.0,
        mass: 1.0,
        alpha: PARTICLE_ALPHA,
        seq: 0,
    };
    assert!((p.draw_radius() - MIN_DRAW_RADIUS).abs() < f32::EPSILON);

    let mut ps = make_system();
    let pointer = centered_pointer();
    for _ in 0..50 {
        ps.update(1.0, Some(255.0), &pointer);
    }
    for p in ps.iter() {
        assert!(p.draw_radius() >= MIN_DRAW_RADIUS);
    }
}

#[test]
fn burst_spawns_at_origin_with_outward_speed() {
    let mut ps = ParticleSystem::new(viewport(), 7);
    let origin = Vec2::new(123.0, 321.0);
    ps.spawn(BURST_COUNT, Some(origin));
    assert_eq!(ps.len(), BURST_COUNT);
    for p in ps.iter() {
        assert_eq!(p.pos, origin);
        let speed = p.vel.length();
        assert!(
            speed >= BURST_SPEED_MIN && speed < BURST_SPEED_MAX + 1e-4,
            "burst speed out of range: {speed}"
        );
    }
}

#[test]
fn burst_grows_population_then_eviction_restores_cap_fifo() {
    let mut ps = make_system();
    assert_eq!(ps.len(), 300);

    ps.spawn(5, Some(Vec2::new(10.0, 10.0)));
    assert_eq!(ps.len(), 305, "burst of 5 must grow the population by 5");

    // Push well past the cap; eviction must trim back down.
    ps.spawn(700, None);
    let cap = ps.nominal() * CAPACITY_MULTIPLIER;
    assert_eq!(ps.len(), cap);

    // 1005 inserted in total, so the 105 oldest tags are gone and the
    // oldest survivor sits at the front.
    let seqs: Vec<u64> = ps.iter().map(|p| p.seq).collect();
    assert_eq!(seqs[0], 105);
    assert_eq!(*seqs.last().unwrap(), 1004);
    for w in seqs.windows(2) {
        assert!(w[0] < w[1], "insertion order must be preserved");
    }
}

#[test]
fn zero_dt_without_audio_changes_nothing_observable() {
    let mut ps = make_system();
    let pointer = centered_pointer();
    let before: Vec<(Vec2, f32)> = ps.iter().map(|p| (p.pos, p.size)).collect();
    ps.update(0.0, None, &pointer);
    for (p, (pos, size)) in ps.iter().zip(before.iter()) {
        assert_eq!(p.pos, *pos, "position must not move over zero elapsed time");
        assert_eq!(p.size, *size, "size must not relax over zero elapsed time");
    }
}

#[test]
fn non_finite_pointer_means_no_attraction_not_corruption() {
    let mut ps = make_system();
    let mut pointer = centered_pointer();
    pointer.on_move(f32::NAN, f32::NAN);
    assert!(pointer.attractor().is_none());
    for _ in 0..30 {
        ps.update(1.0, None, &pointer);
    }
    for p in ps.iter() {
        assert!(p.pos.is_finite(), "bad pointer input must not poison positions");
        assert!(p.vel.is_finite());
    }
}

#[test]
fn negative_or_nan_dt_is_treated_as_zero_elapsed_time() {
    let mut ps = make_system();
    let pointer = centered_pointer();
    let before: Vec<Vec2> = ps.iter().map(|p| p.pos).collect();
    ps.update(-5.0, None, &pointer);
    ps.update(f32::NAN, None, &pointer);
    for (p, pos) in ps.iter().zip(before.iter()) {
        assert_eq!(p.pos, *pos);
    }
}

#[test]
fn audio_energy_grows_size_and_advances_hue() {
    let mut quiet = make_system();
    let mut loud = make_system(); // same seed, identical population
    let pointer = centered_pointer();
    quiet.update(1.0, Some(50.0), &pointer);
    loud.update(1.0, Some(200.0), &pointer);
    for (a, b) in quiet.iter().zip(loud.iter()) {
        assert!(
            b.size > a.size,
            "size must increase monotonically with energy ({} vs {})",
            a.size,
            b.size
        );
        assert!(a.size > a.base_size * AUDIO_SIZE_BASE);
        assert!(b.hue >= 0.0 && b.hue < 360.0, "hue must stay wrapped");
    }
}

#[test]
fn without_audio_size_relaxes_back_toward_base() {
    let mut ps = make_system();
    let pointer = centered_pointer();
    ps.update(1.0, Some(255.0), &pointer);
    let excited: Vec<f32> = ps.iter().map(|p| (p.size - p.base_size).abs()).collect();
    for _ in 0..500 {
        ps.update(1.0, None, &pointer);
    }
    for (p, was) in ps.iter().zip(excited.iter()) {
        let now = (p.size - p.base_size).abs();
        assert!(now < *was, "relaxation must shrink the gap");
        assert!(now < 0.01, "size must settle at base, gap still {now}");
    }
}

#[test]
fn sixty_updates_end_to_end_stay_finite_with_stable_population() {
    let mut ps = ParticleSystem::new(viewport(), 1);
    ps.spawn(100, None);
    let pointer = centered_pointer();
    for _ in 0..60 {
        ps.update(1.0, None, &pointer);
    }
    assert_eq!(ps.len(), 100, "no spawns happen inside update");
    for p in ps.iter() {
        assert!(p.pos.is_finite(), "position went non-finite: {:?}", p.pos);
        assert!(p.pos.x >= -WRAP_MARGIN && p.pos.x <= 800.0 + WRAP_MARGIN);
        assert!(p.pos.y >= -WRAP_MARGIN && p.pos.y <= 600.0 + WRAP_MARGIN);
    }
}

#[test]
fn resize_rewraps_into_new_bounds() {
    let mut ps = make_system();
    let pointer = centered_pointer();
    ps.resize(Viewport::new(400.0, 300.0));
    for _ in 0..100 {
        ps.update(1.0, None, &pointer);
    }
    for p in ps.iter() {
        assert!(p.pos.x >= -WRAP_MARGIN && p.pos.x <= 400.0 + WRAP_MARGIN);
        assert!(p.pos.y >= -WRAP_MARGIN && p.pos.y <= 300.0 + WRAP_MARGIN);
    }
}

#[test]
fn force_points_at_pointer_inside_radius_and_at_center_outside() {
    // dt = 0 freezes positions, so the velocity delta isolates the force.
    let pointer = centered_pointer();

    let mut near = ParticleSystem::new(viewport(), 9);
    near.spawn(1, Some(Vec2::new(350.0, 300.0))); // 50 px left of the pointer
    let v0 = near.iter().next().unwrap().vel;
    near.update(0.0, None, &pointer);
    let dv = near.iter().next().unwrap().vel - v0;
    assert!(dv.x > 0.0, "inside the radius the pull is toward the pointer");
    assert!(dv.y.abs() < 1e-6);

    let mut far = ParticleSystem::new(viewport(), 9);
    far.spawn(1, Some(Vec2::new(790.0, 590.0))); // well outside the radius
    let v0 = far.iter().next().unwrap().vel;
    far.update(0.0, None, &pointer);
    let dv = far.iter().next().unwrap().vel - v0;
    assert!(
        dv.x < 0.0 && dv.y < 0.0,
        "outside the radius only the gentle centering pull applies: {dv:?}"
    );
    assert!(dv.length() < 0.02, "centering must stay gentle");
}
