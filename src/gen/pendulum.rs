//! Pendulum: two detuned triangles beating against each other.

use super::crossmod::{from_bipolar, to_bipolar};
use super::phase::PhaseAccumulator;
use super::tables::triangle_table;

/// Fixed 5% detune. The beat period is inversely proportional to the
/// frequency difference, so the envelope emerges from phase interference
/// alone with no envelope state.
const DETUNE: f32 = 0.95;

#[derive(Debug, Clone, Default)]
pub struct Pendulum {
    detuned: PhaseAccumulator,
}

impl Pendulum {
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
        self.detuned.advance(base_hz * DETUNE, sample_rate);

        let a = to_bipolar(triangle_table()[phase.index()]);
        let b = to_bipolar(triangle_table()[self.detuned.index()]);
        from_bipolar(((a + b) * 0.5).clamp(-1.0, 1.0))
    }
}
