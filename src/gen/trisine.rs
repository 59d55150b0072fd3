//! TriSine: triangle minus a half-weight detached sine, a difference tone.

use rand::Rng;
use rand_pcg::Pcg32;

use super::phase::PhaseAccumulator;
use super::tables::{sine_table, triangle_table};

/// Frequency ratios for the secondary sine. Drawn once per channel at
/// startup and kept for the life of the process, so a channel keeps its
/// character across waveform switches.
const RATIOS: [f32; 4] = [1.618, 1.33, 1.7, 1.732];

#[derive(Debug, Clone)]
pub struct TriSine {
    ratio: f32,
    sine_phase: PhaseAccumulator,
}

impl TriSine {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            ratio: RATIOS[rng.random_range(0..RATIOS.len())],
            sine_phase: PhaseAccumulator::new(),
        }
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn update(
        &mut self,
        base_hz: f32,
        phase: &mut PhaseAccumulator,
        sample_rate: f32,
    ) -> u8 {
        phase.advance(base_hz, sample_rate);
        self.sine_phase.advance(base_hz * self.ratio, sample_rate);

        let tri = triangle_table()[phase.index()] as i16 - 128;
        let sine = sine_table()[self.sine_phase.index()] as i16 - 128;
        // Half-weight subtraction keeps the sum inside 9 bits; the clamp
        // catches the corner where both components peak.
        let mixed = (tri - sine / 2).clamp(-127, 127);
        (mixed + 128) as u8
    }
}
