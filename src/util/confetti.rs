//! Confetti particle field.
//!
//! Pure simulation: the confetti layer owns a field, steps it once per frame
//! and draws whatever particles are alive. While the celebration lasts, every
//! step emits a small burst from a random point near the top of the page.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use std::f64::consts::PI;

use rand::Rng;

pub const PARTICLES_PER_BURST: usize = 3;
pub const START_VELOCITY: f64 = 30.0;
pub const SPREAD_DEG: f64 = 360.0;
pub const PARTICLE_TICKS: u32 = 60;
pub const GRAVITY: f64 = 1.0;
pub const DECAY: f64 = 0.9;
pub const FRAME_MS: u32 = 16;
/// Burst origins: x over the full width, y from slightly above the page.
pub const ORIGIN_Y_MIN: f64 = -0.2;
pub const ORIGIN_Y_MAX: f64 = 0.8;
/// Edge length of a particle at scalar 1, in pixels.
pub const PARTICLE_SIZE: f64 = 10.0;

pub const COLORS: [&str; 7] = ["#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Square,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    /// Direction of travel in radians, canvas coordinates.
    pub angle: f64,
    pub tilt: f64,
    pub wobble: f64,
    pub wobble_speed: f64,
    pub tick: u32,
    pub color: &'static str,
    pub shape: Shape,
}

impl Particle {
    fn launch<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        let spread = SPREAD_DEG.to_radians();
        let launch = 90f64.to_radians();
        let color = COLORS[rng.random_range(0..COLORS.len())];
        let shape = if rng.random_bool(0.5) { Shape::Square } else { Shape::Circle };
        Self {
            x,
            y,
            velocity: START_VELOCITY * 0.5 + rng.random::<f64>() * START_VELOCITY,
            angle: -launch + (0.5 * spread - rng.random::<f64>() * spread),
            tilt: rng.random::<f64>() * PI,
            wobble: rng.random::<f64>() * 10.0,
            wobble_speed: 0.05f64.min(0.01 + rng.random::<f64>() * 0.1),
            tick: 0,
            color,
            shape,
        }
    }

    fn step(&mut self) {
        self.x += self.angle.cos() * self.velocity;
        self.y += self.angle.sin() * self.velocity + GRAVITY * 3.0;
        self.velocity *= DECAY;
        self.wobble += self.wobble_speed;
        self.tilt += 0.1;
        self.tick += 1;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.tick < PARTICLE_TICKS
    }

    /// Fades linearly to zero over the particle's lifetime.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        1.0 - f64::from(self.tick) / f64::from(PARTICLE_TICKS)
    }

    /// Drawn size; squares flutter by scaling one axis with the wobble.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (PARTICLE_SIZE, PARTICLE_SIZE * self.wobble.sin().abs().max(0.2))
    }
}

#[derive(Clone, Debug)]
pub struct ConfettiField {
    particles: Vec<Particle>,
    elapsed_ms: u32,
    duration_ms: u32,
    width: f64,
    height: f64,
}

impl ConfettiField {
    #[must_use]
    pub fn new(duration_ms: u32, width: f64, height: f64) -> Self {
        Self { particles: Vec::new(), elapsed_ms: 0, duration_ms, width, height }
    }

    /// Advance one frame of `dt_ms`, emitting a burst first while still emitting.
    pub fn step<R: Rng>(&mut self, dt_ms: u32, rng: &mut R) {
        if self.is_emitting() {
            self.burst(rng);
        }
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(Particle::is_alive);
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    #[must_use]
    pub fn is_emitting(&self) -> bool {
        self.elapsed_ms < self.duration_ms
    }

    /// Emission is over and every particle has faded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.is_emitting() && self.particles.is_empty()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn burst<R: Rng>(&mut self, rng: &mut R) {
        let x = rng.random::<f64>() * self.width;
        let y = rng.random_range(ORIGIN_Y_MIN..ORIGIN_Y_MAX) * self.height;
        for _ in 0..PARTICLES_PER_BURST {
            self.particles.push(Particle::launch(x, y, rng));
        }
    }
}
