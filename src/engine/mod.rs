//! Four-channel engine: tick pass, cross-modulation ring, control surface.

pub mod channel;
pub mod frequency;
pub mod scheduler;

pub use channel::{Channel, TickContext};
pub use frequency::{control_to_hz, FREQ_MAX_HZ, FREQ_MIN_HZ};
pub use scheduler::{TickScheduler, DEFAULT_TICK_INTERVAL_US};

use crate::gen::tables::init_tables;
use crate::gen::waveform::WaveformKind;

/// Number of modulation channels. The ring topology below assumes this is
/// at least 2 so a channel can never be its own modulation source.
pub const CHANNEL_COUNT: usize = 4;

/// Ring topology: channel `i` is modulated by its counter-clockwise
/// neighbor `(i + 3) mod 4`. Static by design; never configurable.
#[inline]
pub fn mod_source(channel: usize) -> usize {
    (channel + CHANNEL_COUNT - 1) % CHANNEL_COUNT
}

/// The modulation engine: four channels, updated in lockstep once per tick.
///
/// Cross-modulation reads use a snapshot of all four source samples taken
/// at tick start, so every channel sees its neighbor's state from the
/// previous completed pass and modulation lags by exactly one tick,
/// uniformly, regardless of update order.
pub struct Engine {
    channels: [Channel; CHANNEL_COUNT],
    selected: usize,
    tick_count: u64,
    sample_rate: f32,
    tick_ms: f64,
}

impl Engine {
    /// Engine with entropy-seeded generative state.
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Engine with a fixed seed: identical sample streams on every run.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(seed, DEFAULT_TICK_INTERVAL_US)
    }

    pub fn with_config(seed: u64, tick_interval_us: u64) -> Self {
        init_tables();
        let channels = std::array::from_fn(|i| {
            // Distinct stream per channel from one master seed.
            Channel::new(i, seed.wrapping_add(i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15))
        });
        Self {
            channels,
            selected: 0,
            tick_count: 0,
            sample_rate: 1_000_000.0 / tick_interval_us as f32,
            tick_ms: tick_interval_us as f64 / 1000.0,
        }
    }

    /// One full pass: refresh frequencies from the normalized control
    /// values, snapshot the cross-modulation sources, update all four
    /// channels in index order, and return their samples.
    pub fn tick(&mut self, controls: &[f32; CHANNEL_COUNT]) -> [u8; CHANNEL_COUNT] {
        for (channel, &control) in self.channels.iter_mut().zip(controls.iter()) {
            channel.set_frequency(control_to_hz(control));
        }

        let sources: [u8; CHANNEL_COUNT] =
            std::array::from_fn(|i| self.channels[i].source_sample());

        let ctx = TickContext {
            sample_rate: self.sample_rate,
            now_ms: self.tick_count as f64 * self.tick_ms,
            tick_ms: self.tick_ms,
        };

        let mut out = [0u8; CHANNEL_COUNT];
        for (i, channel) in self.channels.iter_mut().enumerate() {
            out[i] = channel.update(&ctx, sources[mod_source(i)]);
        }
        self.tick_count += 1;
        out
    }

    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // --- UI collaborator surface ---

    pub fn selected_channel(&self) -> usize {
        self.selected
    }

    pub fn select_next_channel(&mut self) {
        self.selected = (self.selected + 1) % CHANNEL_COUNT;
        log::info!("selected channel {}", self.selected);
    }

    pub fn waveform_kind(&self, channel: usize) -> WaveformKind {
        self.channels[channel].kind()
    }

    pub fn set_waveform(&mut self, channel: usize, kind: WaveformKind) {
        self.channels[channel].set_kind(kind);
        log::info!("channel {} waveform set to {}", channel, kind.name());
    }

    /// Step the selected channel's waveform forward or back, wrapping
    /// across the twelve kinds.
    pub fn advance_waveform(&mut self, direction: i8) {
        let current = self.channels[self.selected].kind();
        let next = if direction >= 0 {
            current.next()
        } else {
            current.prev()
        };
        self.set_waveform(self.selected, next);
    }

    // --- Persistence collaborator surface ---

    /// Stable integer code of a channel's waveform, for storage.
    pub fn waveform_index(&self, channel: usize) -> u8 {
        self.channels[channel].kind().index()
    }

    /// Apply a stored waveform index. Out-of-range values are discarded and
    /// the current (default) kind is retained.
    pub fn restore_waveform(&mut self, channel: usize, stored: u8) {
        match WaveformKind::from_index(stored) {
            Some(kind) => self.channels[channel].set_kind(kind),
            None => log::warn!(
                "ignoring invalid stored waveform index {} for channel {}",
                stored,
                channel
            ),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_never_maps_a_channel_to_itself() {
        for i in 0..CHANNEL_COUNT {
            assert_eq!(mod_source(i), (i + 3) % 4);
            assert_ne!(mod_source(i), i);
        }
    }
}
