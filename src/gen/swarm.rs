//! Swarm: a breathing sine surrounded by three fast triangle spikes.

use super::crossmod::{from_bipolar, to_bipolar};
use super::phase::PhaseAccumulator;
use super::tables::{sine_table, triangle_table};

/// Fixed breathing rate, independent of the pot setting.
const BREATH_HZ: f32 = 0.25;
/// Prime-ish spike ratios so the spikes never align periodically.
const SPIKE_RATIOS: [f32; 3] = [8.0, 11.0, 7.0];
const SPIKE_WEIGHTS: [f32; 3] = [0.45, 0.32, 0.40];
/// Breathing triangle mapped onto this amplitude window for the sine.
const BREATH_FLOOR: f32 = 0.1;
const BREATH_SPAN: f32 = 0.8;

#[derive(Debug, Clone, Default)]
pub struct Swarm {
    breath: PhaseAccumulator,
    spikes: [PhaseAccumulator; 3],
}

impl Swarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        base_hz: f32,
        phase: &mut PhaseAccumulator,
        sample_rate: f32,
    ) -> u8 {
        phase.advance(base_hz, sample_rate);
        self.breath.advance(BREATH_HZ, sample_rate);

        let breath = triangle_table()[self.breath.index()] as f32 / 255.0;
        let amplitude = BREATH_FLOOR + breath * BREATH_SPAN;
        let mut mix = to_bipolar(sine_table()[phase.index()]) * amplitude;

        for (spike, (ratio, weight)) in self
            .spikes
            .iter_mut()
            .zip(SPIKE_RATIOS.iter().zip(SPIKE_WEIGHTS.iter()))
        {
            spike.advance(base_hz * ratio, sample_rate);
            mix += to_bipolar(triangle_table()[spike.index()]) * weight;
        }

        from_bipolar(mix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_phases_diverge_from_primary() {
        let mut swarm = Swarm::new();
        let mut phase = PhaseAccumulator::new();
        for _ in 0..1000 {
            swarm.update(1.0, &mut phase, 2500.0);
        }
        // After 1000 ticks at 1 Hz the primary sits at 102.4 entries; the
        // spikes run 8x, 11x and 7x that.
        assert!((swarm.spikes[0].raw() - phase.raw() * 8.0).abs() < 1e-6);
        assert!((swarm.spikes[1].raw() - phase.raw() * 11.0).abs() < 1e-6);
        assert!((swarm.spikes[2].raw() - phase.raw() * 7.0).abs() < 1e-6);
    }

    #[test]
    fn breathing_rate_ignores_base_frequency() {
        let mut slow = Swarm::new();
        let mut fast = Swarm::new();
        let mut phase_a = PhaseAccumulator::new();
        let mut phase_b = PhaseAccumulator::new();
        for _ in 0..500 {
            slow.update(0.05, &mut phase_a, 2500.0);
            fast.update(20.0, &mut phase_b, 2500.0);
        }
        assert_eq!(slow.breath.raw(), fast.breath.raw());
    }
}
