use rand::Rng;

use crate::{
    animation::ease::Ease,
    config,
    foundation::core::{Millis, Vec2},
    foundation::error::{RouteFxError, RouteFxResult},
};

/// One spark of the burst. Travels radially from the emblem centre.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    pub id: u32,
    pub angle_rad: f64,
    pub distance: f64, // px travelled at end of life
    pub delay: Millis, // after session start
    pub duration: Millis,
    pub size: f64, // scale factor
}

impl Particle {
    /// Linear life progress in `[0, 1]`; `None` before the particle starts or
    /// after it has burnt out.
    pub fn life_at(&self, elapsed: Millis) -> Option<f64> {
        if elapsed < self.delay {
            return None;
        }
        let local = elapsed.saturating_sub(self.delay);
        if local >= self.duration {
            return None;
        }
        Some(local.as_f64() / self.duration.as_f64().max(1.0))
    }

    /// Displacement from the burst origin at `elapsed`.
    pub fn offset_at(&self, elapsed: Millis) -> Vec2 {
        let t = match self.life_at(elapsed) {
            Some(t) => Ease::OutCubic.apply(t),
            None if elapsed >= self.delay => 1.0,
            None => 0.0,
        };
        let r = self.distance * t;
        Vec2::new(self.angle_rad.cos() * r, self.angle_rad.sin() * r)
    }

    /// Sparks flash in fast and fade over the rest of their life.
    pub fn opacity_at(&self, elapsed: Millis) -> f64 {
        match self.life_at(elapsed) {
            Some(t) if t < 0.2 => t / 0.2,
            Some(t) => 1.0 - (t - 0.2) / 0.8,
            None => 0.0,
        }
    }
}

/// Inclusive ranges every generated particle falls within.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleBounds {
    pub delay_max: Millis,
    pub duration_min: Millis,
    pub duration_max: Millis,
    pub size_min: f64,
    pub size_max: f64,
    pub distance_min: f64,
    pub distance_max: f64,
}

impl Default for ParticleBounds {
    fn default() -> Self {
        Self {
            delay_max: config::PARTICLE_DELAY_MAX,
            duration_min: config::PARTICLE_DURATION_MIN,
            duration_max: config::PARTICLE_DURATION_MAX,
            size_min: config::PARTICLE_SIZE_MIN,
            size_max: config::PARTICLE_SIZE_MAX,
            distance_min: config::PARTICLE_DISTANCE_MIN,
            distance_max: config::PARTICLE_DISTANCE_MAX,
        }
    }
}

impl ParticleBounds {
    pub fn validate(&self) -> RouteFxResult<()> {
        if self.duration_min == Millis::ZERO || self.duration_min > self.duration_max {
            return Err(RouteFxError::validation(
                "particle duration range must satisfy 0 < min <= max",
            ));
        }
        for (name, lo, hi) in [
            ("size", self.size_min, self.size_max),
            ("distance", self.distance_min, self.distance_max),
        ] {
            if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || lo > hi {
                return Err(RouteFxError::validation(format!(
                    "particle {name} range must be finite with 0 <= min <= max"
                )));
            }
        }
        Ok(())
    }

    pub fn contains(&self, p: &Particle) -> bool {
        p.delay <= self.delay_max
            && (self.duration_min..=self.duration_max).contains(&p.duration)
            && (self.size_min..=self.size_max).contains(&p.size)
            && (self.distance_min..=self.distance_max).contains(&p.distance)
    }
}

/// `count` particles drawn from the thread-local RNG with default bounds.
pub fn generate(count: u32) -> Vec<Particle> {
    generate_with(count, &ParticleBounds::default(), &mut rand::rng())
}

/// `count` particles drawn from `rng`. Angles are spread evenly around the
/// circle with per-particle jitter so the burst never clumps on one side.
pub fn generate_with<R: Rng>(
    count: u32,
    bounds: &ParticleBounds,
    rng: &mut R,
) -> Vec<Particle> {
    let sector = std::f64::consts::TAU / f64::from(count.max(1));
    (0..count)
        .map(|id| {
            let jitter = rng.random_range(-0.35..=0.35) * sector;
            Particle {
                id,
                angle_rad: (f64::from(id) * sector + jitter).rem_euclid(std::f64::consts::TAU),
                distance: rng.random_range(bounds.distance_min..=bounds.distance_max),
                delay: Millis(rng.random_range(0..=bounds.delay_max.0)),
                duration: Millis(rng.random_range(bounds.duration_min.0..=bounds.duration_max.0)),
                size: rng.random_range(bounds.size_min..=bounds.size_max),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;
