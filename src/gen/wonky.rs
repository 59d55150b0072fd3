//! Wonky triangle: a triangle with random phase jitter and frequency drift.

use rand::Rng;
use rand_pcg::Pcg32;

use super::phase::PhaseAccumulator;
use super::tables::triangle_table;
use crate::engine::frequency::FREQ_MAX_HZ;

const JITTER_PROBABILITY: f32 = 0.05;
const NUDGE_PROBABILITY: f32 = 0.02;
const GLITCH_PROBABILITY: f32 = 0.3;
const GLITCH_SCALE: f32 = 2.5;
const MULTIPLIER_MIN: f32 = 0.6;
const MULTIPLIER_MAX: f32 = 1.6;

/// Triangle oscillator whose effective frequency drifts around the base.
///
/// Every `hold_duration` ticks a new multiplier is drawn; most holds are long
/// with a gentle drift, occasionally a short hold lands a larger "glitch"
/// multiplier. Low base frequencies get a wider drift range so the effect
/// stays audible where cycles are slow.
#[derive(Debug, Clone)]
pub struct WonkyTriangle {
    hold_counter: u32,
    hold_duration: u32,
    freq_multiplier: f32,
}

impl WonkyTriangle {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            hold_counter: 0,
            hold_duration: rng.random_range(200..=800),
            freq_multiplier: 1.0,
        }
    }

    pub fn update(
        &mut self,
        rng: &mut Pcg32,
        base_hz: f32,
        phase: &mut PhaseAccumulator,
        sample_rate: f32,
    ) -> u8 {
        if rng.random::<f32>() < JITTER_PROBABILITY {
            phase.nudge(rng.random_range(-1.5..1.5));
        }

        self.hold_counter += 1;
        if self.hold_counter >= self.hold_duration {
            self.hold_counter = 0;
            self.hold_duration = if rng.random::<f32>() < 0.8 {
                rng.random_range(200..=800)
            } else {
                rng.random_range(10..=80)
            };

            // Drift range widens as the base frequency drops.
            let drift_range = 0.08 + 0.25 * (1.0 - (base_hz / FREQ_MAX_HZ).clamp(0.0, 1.0));
            let drift = rng.random_range(-1.0..1.0);
            self.freq_multiplier = if rng.random::<f32>() < GLITCH_PROBABILITY {
                1.0 + drift * drift_range * GLITCH_SCALE
            } else {
                1.0 + drift * drift_range
            };
            self.freq_multiplier = self.freq_multiplier.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX);
        }

        // Fast multipliers get an extra occasional phase kick.
        if self.freq_multiplier > 1.25 && rng.random::<f32>() < NUDGE_PROBABILITY {
            phase.nudge(rng.random_range(-3.0..3.0));
        }

        phase.advance(base_hz * self.freq_multiplier, sample_rate);
        triangle_table()[phase.index()]
    }

    pub fn freq_multiplier(&self) -> f32 {
        self.freq_multiplier
    }
}
