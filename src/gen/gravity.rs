//! Gravity: frequency wanders toward occasional random targets.

use rand::Rng;
use rand_pcg::Pcg32;

use super::phase::PhaseAccumulator;
use super::tables::triangle_table;

const RETARGET_PROBABILITY: f32 = 0.004;
const PULL_PER_TICK: f32 = 0.18;
const RANGE_MIN: f32 = 0.1;
const RANGE_MAX: f32 = 5.0;

/// First-order smoothing toward a randomly retargeted frequency.
///
/// Roughly once every 250 ticks a new target is drawn between 0.1x and 5.0x
/// of the base frequency; each tick the driven frequency moves 18% of the
/// way toward it and is hard-clamped to that same range, evaluated against
/// the live base so pot moves re-bound it immediately.
#[derive(Debug, Clone)]
pub struct Gravity {
    current_hz: f32,
    target_hz: f32,
}

impl Gravity {
    pub fn new() -> Self {
        Self {
            current_hz: 1.0,
            target_hz: 1.0,
        }
    }

    pub fn current_hz(&self) -> f32 {
        self.current_hz
    }

    pub fn update(
        &mut self,
        rng: &mut Pcg32,
        base_hz: f32,
        phase: &mut PhaseAccumulator,
        sample_rate: f32,
    ) -> u8 {
        if rng.random::<f32>() < RETARGET_PROBABILITY {
            self.target_hz = base_hz * rng.random_range(RANGE_MIN..RANGE_MAX);
        }
        self.current_hz += (self.target_hz - self.current_hz) * PULL_PER_TICK;
        self.current_hz = self.current_hz.clamp(base_hz * RANGE_MIN, base_hz * RANGE_MAX);

        phase.advance(self.current_hz, sample_rate);
        triangle_table()[phase.index()]
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn frequency_stays_within_base_bounds() {
        let mut rng = Pcg32::seed_from_u64(17);
        let mut gravity = Gravity::new();
        let mut phase = PhaseAccumulator::new();
        let base = 2.5;
        for _ in 0..100_000 {
            gravity.update(&mut rng, base, &mut phase, 2500.0);
            let hz = gravity.current_hz();
            assert!(
                hz >= base * RANGE_MIN - 1e-6 && hz <= base * RANGE_MAX + 1e-6,
                "driven frequency {} escaped [{}, {}]",
                hz,
                base * RANGE_MIN,
                base * RANGE_MAX
            );
        }
    }

    #[test]
    fn rebounds_when_base_frequency_drops() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut gravity = Gravity::new();
        let mut phase = PhaseAccumulator::new();
        // Settle at a high base, then yank the base down: the clamp tracks
        // the live base, so the driven frequency must be in range at once.
        for _ in 0..5_000 {
            gravity.update(&mut rng, 20.0, &mut phase, 2500.0);
        }
        gravity.update(&mut rng, 0.05, &mut phase, 2500.0);
        assert!(gravity.current_hz() <= 0.05 * RANGE_MAX + 1e-6);
    }
}
