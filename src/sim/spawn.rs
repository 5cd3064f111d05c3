//! Batch spawning with bounded rejection sampling
//!
//! Every batch waits a random delay and asks for a random number of
//! pokables. Each pokable gets a handful of placement tries against the
//! live field; if every try overlaps something, that spawn is dropped.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::color::Rgba;
use super::pokable::Pokable;
use crate::tuning::Tuning;

/// Outcome of one emitted batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnBatch {
    pub requested: u32,
    pub placed: u32,
}

/// Decides when batches appear and where their pokables go
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnScheduler {
    time_since_last_batch: f32,
    next_batch_delay: f32,
    next_batch_size: u32,
    next_id: u32,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a batch right now and schedule the next one
    pub fn force_spawn<R: Rng>(
        &mut self,
        pokables: &mut Vec<Pokable>,
        rng: &mut R,
        tuning: &Tuning,
    ) -> SpawnBatch {
        self.roll_next_batch(rng, tuning);
        self.next_batch_delay = 0.0;
        // A zero delay always fires
        self.step(0.0, pokables, rng, tuning)
            .unwrap_or(SpawnBatch {
                requested: 0,
                placed: 0,
            })
    }

    /// Accumulate `dt`; emits a batch once the scheduled delay has passed
    pub fn step<R: Rng>(
        &mut self,
        dt: f32,
        pokables: &mut Vec<Pokable>,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<SpawnBatch> {
        self.time_since_last_batch += dt;
        if self.time_since_last_batch < self.next_batch_delay {
            return None;
        }

        let requested = self.next_batch_size;
        let mut placed = 0;
        for _ in 0..requested {
            if self.place_one(pokables, rng, tuning) {
                placed += 1;
            }
        }

        log::debug!(
            "Spawned batch: {}/{} placed, {} live",
            placed,
            requested,
            pokables.len()
        );

        self.roll_next_batch(rng, tuning);
        Some(SpawnBatch { requested, placed })
    }

    /// Seconds until the next batch is due
    pub fn time_until_next_batch(&self) -> f32 {
        (self.next_batch_delay - self.time_since_last_batch).max(0.0)
    }

    pub fn next_batch_size(&self) -> u32 {
        self.next_batch_size
    }

    fn roll_next_batch<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) {
        self.time_since_last_batch = 0.0;
        self.next_batch_delay =
            rng.random_range(tuning.min_spawn_interval..=tuning.max_spawn_interval);
        self.next_batch_size = rng.random_range(tuning.min_spawn_count..=tuning.max_spawn_count);
    }

    /// Try to add one pokable that overlaps nothing live; false if every attempt collided
    fn place_one<R: Rng>(
        &mut self,
        pokables: &mut Vec<Pokable>,
        rng: &mut R,
        tuning: &Tuning,
    ) -> bool {
        for _ in 0..tuning.placement_attempts {
            let (circle, color, time_limit) = random_candidate(rng, tuning);

            if pokables
                .iter()
                .any(|other| other.visual_circle().overlaps(&circle))
            {
                continue;
            }

            match Pokable::new(self.next_id, circle, color, time_limit, tuning) {
                Ok(pokable) => {
                    self.next_id += 1;
                    pokables.push(pokable);
                    return true;
                }
                Err(e) => {
                    log::error!("Rejected spawn candidate: {}", e);
                    return false;
                }
            }
        }

        log::trace!(
            "Dropped spawn after {} overlapping attempts",
            tuning.placement_attempts
        );
        false
    }
}

/// Draw radius, position, color and lifetime for one spawn attempt
fn random_candidate<R: Rng>(rng: &mut R, tuning: &Tuning) -> (Circle, Rgba, f32) {
    let radius = rng.random_range(tuning.min_radius..=tuning.max_radius);
    let x = rng.random_range(radius..=tuning.field_width - radius);
    let y = rng.random_range(
        tuning.control_band_height + radius..=tuning.field_height - radius,
    );

    let hue: f32 = rng.random();
    let color = Rgba::from_hsl(hue, tuning.saturation, tuning.lightness);
    let time_limit = rng.random_range(tuning.min_lifetime..=tuning.max_lifetime);

    (Circle::new(x, y, radius), color, time_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Counts raw draws so tests can see how many candidates were rolled
    struct CountingRng {
        inner: Pcg32,
        draws: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst)
        }
    }

    fn assert_no_overlaps(pokables: &[Pokable]) {
        for (i, a) in pokables.iter().enumerate() {
            for b in &pokables[i + 1..] {
                assert!(
                    !a.visual_circle().overlaps(&b.visual_circle()),
                    "pokables {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_force_spawn_fills_empty_field() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pokables = Vec::new();
        let mut scheduler = SpawnScheduler::new();

        let batch = scheduler.force_spawn(&mut pokables, &mut rng, &tuning);
        assert!(batch.requested >= tuning.min_spawn_count);
        assert!(batch.placed >= 1);
        assert_eq!(batch.placed as usize, pokables.len());
        assert_no_overlaps(&pokables);
    }

    #[test]
    fn test_batch_waits_for_delay() {
        let tuning = Tuning {
            min_spawn_interval: 1.0,
            max_spawn_interval: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pokables = Vec::new();
        let mut scheduler = SpawnScheduler::new();
        scheduler.force_spawn(&mut pokables, &mut rng, &tuning);

        assert!(scheduler.step(0.5, &mut pokables, &mut rng, &tuning).is_none());
        assert!(scheduler.step(0.25, &mut pokables, &mut rng, &tuning).is_none());
        assert!(scheduler.step(0.25, &mut pokables, &mut rng, &tuning).is_some());
        assert_eq!(scheduler.time_until_next_batch(), 1.0);
    }

    #[test]
    fn test_spawns_stay_inside_field_and_above_band() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut pokables = Vec::new();
        let mut scheduler = SpawnScheduler::new();
        for _ in 0..5 {
            scheduler.force_spawn(&mut pokables, &mut rng, &tuning);
        }

        for p in &pokables {
            let c = p.visual_circle();
            assert!(c.center.x - c.radius >= 0.0);
            assert!(c.center.x + c.radius <= tuning.field_width);
            assert!(c.center.y - c.radius >= tuning.control_band_height);
            assert!(c.center.y + c.radius <= tuning.field_height);
            assert!((tuning.min_lifetime..=tuning.max_lifetime).contains(&p.time_limit()));
        }
        assert_no_overlaps(&pokables);
    }

    #[test]
    fn test_crowded_field_drops_spawns() {
        // Room for exactly one circle
        let tuning = Tuning {
            field_width: 16.0,
            field_height: 20.0,
            control_band_height: 4.0,
            min_radius: 8.0,
            max_radius: 8.0,
            min_spawn_count: 5,
            max_spawn_count: 5,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pokables = Vec::new();
        let mut scheduler = SpawnScheduler::new();

        let batch = scheduler.force_spawn(&mut pokables, &mut rng, &tuning);
        assert_eq!(batch, SpawnBatch { requested: 5, placed: 1 });
        assert_eq!(pokables.len(), 1);

        let batch = scheduler.force_spawn(&mut pokables, &mut rng, &tuning);
        assert_eq!(batch.placed, 0);
    }

    #[test]
    fn test_dropped_spawn_uses_every_attempt() {
        // One slot, already taken: every candidate lands on the same spot
        let mut tuning = Tuning {
            field_width: 16.0,
            field_height: 20.0,
            control_band_height: 4.0,
            min_radius: 8.0,
            max_radius: 8.0,
            min_spawn_count: 1,
            max_spawn_count: 1,
            ..Default::default()
        };
        let mut rng = CountingRng {
            inner: Pcg32::seed_from_u64(5),
            draws: 0,
        };
        let mut pokables = Vec::new();
        let mut scheduler = SpawnScheduler::new();
        scheduler.force_spawn(&mut pokables, &mut rng, &tuning);
        assert_eq!(pokables.len(), 1);

        let before = rng.draws;
        random_candidate(&mut rng, &tuning);
        let per_candidate = rng.draws - before;
        assert!(per_candidate > 0);

        for attempts in [1, 4, 10] {
            tuning.placement_attempts = attempts;
            let before = rng.draws;
            assert!(!scheduler.place_one(&mut pokables, &mut rng, &tuning));
            assert_eq!(rng.draws - before, attempts as usize * per_candidate);
        }
        assert_eq!(pokables.len(), 1);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut pokables = Vec::new();
        let mut scheduler = SpawnScheduler::new();
        scheduler.force_spawn(&mut pokables, &mut rng, &tuning);
        scheduler.force_spawn(&mut pokables, &mut rng, &tuning);

        assert!(pokables.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_same_seed_same_field() {
        let tuning = Tuning::default();
        let spawn = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pokables = Vec::new();
            SpawnScheduler::new().force_spawn(&mut pokables, &mut rng, &tuning);
            pokables
                .iter()
                .map(|p| (p.position(), p.initial_radius()))
                .collect::<Vec<_>>()
        };
        assert_eq!(spawn(99), spawn(99));
    }

    proptest! {
        #[test]
        fn prop_batches_never_overlap(
            seed in any::<u64>(),
            batches in 1usize..8,
            dt in 0.0f32..2.0
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pokables = Vec::new();
            let mut scheduler = SpawnScheduler::new();
            scheduler.force_spawn(&mut pokables, &mut rng, &tuning);

            for _ in 0..batches {
                let before = pokables.len();
                if let Some(batch) = scheduler.step(dt, &mut pokables, &mut rng, &tuning) {
                    prop_assert!(batch.placed <= batch.requested);
                    prop_assert_eq!(pokables.len(), before + batch.placed as usize);
                }
            }
            assert_no_overlaps(&pokables);
        }
    }
}
