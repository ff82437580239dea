use crate::constants::*;
use rand::Rng;

/// Randomized visual parameters for one decorative particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    /// Horizontal position, percent of container width in [0, 100).
    pub left_pct: f32,
    /// Animation start delay in seconds, [0, 15).
    pub delay_sec: f32,
    /// Animation duration in seconds, [15, 25).
    pub duration_sec: f32,
}

impl ParticleDescriptor {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..PARTICLE_POSITION_MAX_PCT),
            delay_sec: rng.gen_range(0.0..PARTICLE_DELAY_MAX_SEC),
            duration_sec: rng.gen_range(
                PARTICLE_DURATION_MIN_SEC..PARTICLE_DURATION_MIN_SEC + PARTICLE_DURATION_SPAN_SEC,
            ),
        }
    }
}

/// Generate exactly `count` fresh descriptors.
pub fn generate_particles(count: usize, rng: &mut impl Rng) -> Vec<ParticleDescriptor> {
    (0..count).map(|_| ParticleDescriptor::random(rng)).collect()
}

/// Count for a particle container: a parseable `data-particle-count` override
/// wins, then the configured count, then [`DEFAULT_PARTICLE_COUNT`].
pub fn resolve_particle_count(attr: Option<&str>, configured: Option<usize>) -> usize {
    let from_attr = attr.and_then(|raw| match raw.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("[particles] ignoring particle count {raw:?}");
            None
        }
    });
    from_attr.or(configured).unwrap_or(DEFAULT_PARTICLE_COUNT)
}

/// Owner of the current particle batch. Particles have no identity: a count
/// change throws the whole batch away.
#[derive(Debug, Default)]
pub struct ParticleField {
    count: Option<usize>,
    particles: Vec<ParticleDescriptor>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(count: usize, rng: &mut impl Rng) -> Self {
        let mut field = Self::new();
        field.set_count(count, rng);
        field
    }

    /// Regenerates when `count` differs from the last configured count (or on
    /// first use). Returns true if a new batch was produced.
    pub fn set_count(&mut self, count: usize, rng: &mut impl Rng) -> bool {
        if self.count == Some(count) {
            return false;
        }
        self.count = Some(count);
        self.particles = generate_particles(count, rng);
        log::debug!("[particles] regenerated {} descriptors", count);
        true
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[ParticleDescriptor] {
        &self.particles
    }
}
