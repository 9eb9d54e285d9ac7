//! Falling rain above the canopy roof.
//!
//! Drops fall at a constant speed and respawn in a band above the roof the
//! moment they pass just below roof level, so the volume over the canopy
//! stays uniformly filled. Drops never reach the ground.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::options::RainOptions;
use crate::scene::{CANOPY_HEIGHT, CANOPY_LENGTH, CANOPY_WIDTH};

/// Height below which a drop respawns.
const FLOOR: f32 = CANOPY_HEIGHT + 0.25;

/// A fixed-size field of rain drops.
#[derive(Debug, Clone)]
pub struct RainField {
    drops: Vec<Vec3>,
    fall_speed: f32,
    rng: SmallRng,
}

impl RainField {
    /// Spawn `options.count` drops at random positions above the roof.
    #[must_use]
    pub fn new(options: &RainOptions) -> Self {
        Self::with_rng(options, SmallRng::from_os_rng())
    }

    /// Deterministic construction for tests.
    #[must_use]
    pub fn with_rng(options: &RainOptions, mut rng: SmallRng) -> Self {
        let drops = (0..options.count)
            .map(|_| {
                Vec3::new(
                    spread(&mut rng, CANOPY_LENGTH + 2.0),
                    spawn_height(&mut rng),
                    spread(&mut rng, CANOPY_WIDTH + 2.0),
                )
            })
            .collect();
        Self {
            drops,
            fall_speed: options.fall_speed,
            rng,
        }
    }

    /// Advance every drop by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for drop in &mut self.drops {
            drop.y -= self.fall_speed * dt;
            if drop.y < FLOOR {
                drop.y = spawn_height(&mut self.rng);
                drop.x = spread(&mut self.rng, CANOPY_LENGTH + 2.0);
                drop.z = spread(&mut self.rng, CANOPY_WIDTH + 2.0);
            }
        }
    }

    /// Current drop positions.
    #[must_use]
    pub fn drops(&self) -> &[Vec3] {
        &self.drops
    }
}

/// Uniform sample in `[-extent / 2, extent / 2)`.
fn spread(rng: &mut SmallRng, extent: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * extent
}

/// Uniform sample in the spawn band, `[H + 5, H + 8)`. Initial spawn and
/// respawn use the same band.
fn spawn_height(rng: &mut SmallRng) -> f32 {
    CANOPY_HEIGHT + 5.0 + rng.random::<f32>() * 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> RainField {
        RainField::with_rng(&RainOptions::default(), SmallRng::seed_from_u64(7))
    }

    #[test]
    fn spawns_requested_count() {
        assert_eq!(field().drops().len(), RainOptions::default().count);
    }

    #[test]
    fn initial_drops_sit_in_the_spawn_band() {
        for drop in field().drops() {
            assert!(drop.y >= CANOPY_HEIGHT + 5.0);
            assert!(drop.y < CANOPY_HEIGHT + 8.0);
        }
    }

    #[test]
    fn drops_stay_above_the_roof() {
        let mut rain = field();
        for _ in 0..600 {
            rain.update(1.0 / 60.0);
        }
        assert!(rain.drops().iter().all(|d| d.y >= FLOOR));
    }

    #[test]
    fn drops_fall_between_updates() {
        let mut rain = field();
        let before = rain.drops()[0].y;
        rain.update(0.1);
        let after = rain.drops()[0].y;
        // either fell by fall_speed * dt or respawned higher up
        assert!(after < before || after > CANOPY_HEIGHT + 5.0);
    }

    #[test]
    fn respawn_stays_inside_the_spawn_band() {
        let mut rain = field();
        for _ in 0..2000 {
            rain.update(0.05);
        }
        for drop in rain.drops() {
            assert!(drop.x.abs() <= (CANOPY_LENGTH + 2.0) / 2.0);
            assert!(drop.z.abs() <= (CANOPY_WIDTH + 2.0) / 2.0);
            assert!(drop.y < CANOPY_HEIGHT + 8.0);
        }
    }
}
