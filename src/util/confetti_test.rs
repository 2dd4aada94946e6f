use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// =============================================================
// ConfettiField
// =============================================================

#[test]
fn new_field_is_empty_and_emitting() {
    let field = ConfettiField::new(5000, 800.0, 600.0);
    assert!(field.particles().is_empty());
    assert!(field.is_emitting());
    assert!(!field.is_finished());
}

#[test]
fn each_step_emits_a_burst() {
    let mut field = ConfettiField::new(5000, 800.0, 600.0);
    let mut rng = rng();
    field.step(FRAME_MS, &mut rng);
    assert_eq!(field.particles().len(), PARTICLES_PER_BURST);
    field.step(FRAME_MS, &mut rng);
    assert_eq!(field.particles().len(), 2 * PARTICLES_PER_BURST);
}

#[test]
fn emission_stops_after_duration() {
    let mut field = ConfettiField::new(FRAME_MS * 2, 800.0, 600.0);
    let mut rng = rng();
    field.step(FRAME_MS, &mut rng);
    field.step(FRAME_MS, &mut rng);
    assert!(!field.is_emitting());
    let count = field.particles().len();
    field.step(FRAME_MS, &mut rng);
    assert_eq!(field.particles().len(), count);
}

#[test]
fn field_finishes_once_particles_fade() {
    let mut field = ConfettiField::new(FRAME_MS, 800.0, 600.0);
    let mut rng = rng();
    field.step(FRAME_MS, &mut rng);
    for _ in 0..PARTICLE_TICKS {
        field.step(FRAME_MS, &mut rng);
    }
    assert!(field.is_finished());
}

#[test]
fn zero_duration_never_emits() {
    let mut field = ConfettiField::new(0, 800.0, 600.0);
    field.step(FRAME_MS, &mut rng());
    assert!(field.particles().is_empty());
    assert!(field.is_finished());
}

#[test]
fn burst_origins_stay_in_band() {
    let mut field = ConfettiField::new(5000, 800.0, 600.0);
    let mut rng = rng();
    for _ in 0..50 {
        let before = field.particles().len();
        field.step(FRAME_MS, &mut rng);
        // New particles have moved one step from their origin; undo it to check the band.
        for p in &field.particles()[before.min(field.particles().len())..] {
            let origin_x = p.x - p.angle.cos() * (p.velocity / DECAY);
            assert!((-1e-6..800.0 + 1e-6).contains(&origin_x));
        }
    }
}

// =============================================================
// Particle
// =============================================================

#[test]
fn particle_fades_over_lifetime() {
    let mut rng = rng();
    let mut p = Particle::launch(0.0, 0.0, &mut rng);
    assert!((p.opacity() - 1.0).abs() < f64::EPSILON);
    for _ in 0..PARTICLE_TICKS / 2 {
        p.step();
    }
    assert!((p.opacity() - 0.5).abs() < 1e-9);
    for _ in 0..PARTICLE_TICKS / 2 {
        p.step();
    }
    assert!(!p.is_alive());
}

#[test]
fn particle_velocity_within_launch_range() {
    let mut rng = rng();
    for _ in 0..100 {
        let p = Particle::launch(0.0, 0.0, &mut rng);
        assert!(p.velocity >= START_VELOCITY * 0.5);
        assert!(p.velocity <= START_VELOCITY * 1.5);
        assert!(COLORS.contains(&p.color));
    }
}

#[test]
fn particle_velocity_decays() {
    let mut p = Particle::launch(0.0, 0.0, &mut rng());
    let v0 = p.velocity;
    p.step();
    assert!((p.velocity - v0 * DECAY).abs() < 1e-9);
}
