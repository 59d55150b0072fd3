//! Lazy-wrap phase accumulator primitive.

use super::tables::{table_index, TABLE_SIZE};

/// A floating-point position within a 256-entry wavetable.
///
/// The accumulator grows without bound; it is wrapped into a table index only
/// when read. Converting to an integer phase instead would lose the sub-LSB
/// increments produced at the bottom of the frequency range (0.05 Hz at a
/// 2500 Hz tick rate advances just 0.00512 entries per tick) and stall the
/// oscillator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseAccumulator {
    phase: f64,
}

impl PhaseAccumulator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Advance by one tick at the given frequency.
    #[inline]
    pub fn advance(&mut self, frequency_hz: f32, sample_rate: f32) {
        self.phase += frequency_hz as f64 * TABLE_SIZE as f64 / sample_rate as f64;
    }

    /// Add a raw offset in table entries. Used for phase jitter.
    #[inline]
    pub fn nudge(&mut self, entries: f64) {
        self.phase += entries;
    }

    /// Current table index, wrapped at read time.
    #[inline]
    pub fn index(&self) -> usize {
        table_index(self.phase)
    }

    /// Raw unwrapped phase.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.phase
    }
}
