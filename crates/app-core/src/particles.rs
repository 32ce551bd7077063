use glam::Vec3;
use thiserror::Error;

use crate::constants::{
    GRAVITY, GRID_DENSITY, LIFE_SCALE_STEP, MOON_DISTANCE, MOON_GRAVITY, PARTICLE_SPREAD,
    RESET_RADIUS, SPEED_STRETCH, SPEED_STRETCH_BIAS,
};

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("grid density must be at least 1")]
    ZeroDensity,
    #[error("particle spread must be positive, got {0}")]
    NonPositiveSpread(f32),
}

/// A simulated point mass, visualized as a cone stretched along its motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Grows from 0 to 1 after a reset; drives the cone's cross-section.
    pub life_scale: f32,
    pub grid_index: usize,
}

impl Particle {
    /// Visual scale of the vector cone: cross-section follows `life_scale`,
    /// length follows speed.
    pub fn vector_scale(&self) -> Vec3 {
        Vec3::new(
            self.life_scale,
            self.life_scale,
            self.velocity.length() * SPEED_STRETCH - SPEED_STRETCH_BIAS,
        )
    }
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub grid_density: usize,
    pub spread: f32,
    pub gravity: f32,
    pub moon_gravity: f32,
    pub moon_position: Vec3,
    /// The moon cross-term is computed every tick but only applied when set.
    pub apply_moon_gravity: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            grid_density: GRID_DENSITY,
            spread: PARTICLE_SPREAD,
            gravity: GRAVITY,
            moon_gravity: MOON_GRAVITY,
            moon_position: Vec3::new(MOON_DISTANCE, 0.0, 0.0),
            apply_moon_gravity: false,
        }
    }
}

/// Fixed-size pool of particles on a cubic lattice around the globe.
///
/// The pool is sized exactly to `grid_density³` at construction and never
/// grows or shrinks; particles are reinitialized in place.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    params: FieldParams,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Result<Self, FieldError> {
        if params.grid_density == 0 {
            return Err(FieldError::ZeroDensity);
        }
        if !(params.spread > 0.0) {
            return Err(FieldError::NonPositiveSpread(params.spread));
        }
        let count = params.grid_density * params.grid_density * params.grid_density;
        let mut particles = vec![Particle::default(); count];
        for (i, p) in particles.iter_mut().enumerate() {
            reset_particle(p, i, &params);
        }
        log::info!("particle field initialized with {count} particles");
        Ok(Self { particles, params })
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Reinitialize one particle to its deterministic lattice slot.
    pub fn reset(&mut self, index: usize) {
        reset_particle(&mut self.particles[index], index, &self.params);
    }

    /// Place a particle arbitrarily; used by tests and the lattice toggle.
    pub fn set_particle(&mut self, index: usize, position: Vec3, velocity: Vec3) {
        let p = &mut self.particles[index];
        p.position = position;
        p.velocity = velocity;
    }

    pub fn set_moon_position(&mut self, position: Vec3) {
        self.params.moon_position = position;
    }

    /// Advance every particle by one tick of the gravity field.
    pub fn step(&mut self) {
        let Self { particles, params } = self;
        for (i, p) in particles.iter_mut().enumerate() {
            let dist = p.position.length();
            // The reclaim guard must run before the inverse-square division.
            if dist < RESET_RADIUS {
                reset_particle(p, i, params);
                continue;
            }
            // Per-axis scalar approximation: each axis is scaled by its own
            // coordinate rather than a normalized direction.
            let mut accel = p.position * (params.gravity / (dist * dist));
            let to_moon = params.moon_position - p.position;
            let moon_dist_sq = to_moon.length_squared();
            let moon_accel = to_moon * (params.moon_gravity / (moon_dist_sq * 4.0));
            if params.apply_moon_gravity {
                accel -= moon_accel;
            }
            p.velocity += accel;
            // Velocity grows outward-positive and is subtracted from the
            // position, netting an inward pull. The sign convention is load
            // bearing; do not flip both.
            p.position -= p.velocity;
            p.life_scale = (p.life_scale + LIFE_SCALE_STEP).min(1.0);
        }
    }
}

fn reset_particle(p: &mut Particle, index: usize, params: &FieldParams) {
    let n = params.grid_density;
    let col = index % n;
    let row = (index / n) % n;
    let layer = index / (n * n);
    let half = params.spread * 0.5;
    let cell = |coord: usize| coord as f32 / n as f32 * params.spread - half;
    p.position = Vec3::new(cell(col), cell(row), cell(layer));
    p.velocity = Vec3::ZERO;
    p.life_scale = 0.0;
    p.grid_index = index;
}
