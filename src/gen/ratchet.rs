//! Ratchet triangle: bursts of fast cycles separated by frozen pauses.

use rand::Rng;
use rand_pcg::Pcg32;

use super::phase::PhaseAccumulator;
use super::tables::triangle_table;

const BURST_TICKS: std::ops::RangeInclusive<u32> = 30..=130;
const SHORT_PAUSE_TICKS: std::ops::RangeInclusive<u32> = 50..=150;
const LONG_PAUSE_TICKS: std::ops::RangeInclusive<u32> = 200..=600;
const STUTTER_TICKS: std::ops::RangeInclusive<u32> = 10..=30;
const STUTTER_PROBABILITY: f32 = 0.1;
const FAST_MULTIPLIER: std::ops::Range<f32> = 2.0..8.0;
const MAX_BURSTS: std::ops::RangeInclusive<u32> = 2..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BurstState {
    Bursting,
    Paused,
}

/// Two-state machine: while Bursting the phase runs at a randomized 2x-8x
/// multiple of the base frequency; while Paused the phase is frozen, which
/// holds the output at its last position. After a randomized number of
/// bursts the machine takes a long pause instead of a short one.
#[derive(Debug, Clone)]
pub struct RatchetTriangle {
    state: BurstState,
    ratchet_counter: u32,
    burst_duration: u32,
    pause_counter: u32,
    pause_duration: u32,
    burst_count: u32,
    max_bursts: u32,
    fast_multiplier: f32,
}

impl RatchetTriangle {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            state: BurstState::Bursting,
            ratchet_counter: 0,
            burst_duration: rng.random_range(BURST_TICKS),
            pause_counter: 0,
            pause_duration: rng.random_range(SHORT_PAUSE_TICKS),
            burst_count: 0,
            max_bursts: rng.random_range(MAX_BURSTS),
            fast_multiplier: rng.random_range(FAST_MULTIPLIER),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state == BurstState::Paused
    }

    pub fn update(
        &mut self,
        rng: &mut Pcg32,
        base_hz: f32,
        phase: &mut PhaseAccumulator,
        sample_rate: f32,
    ) -> u8 {
        match self.state {
            BurstState::Bursting => {
                phase.advance(base_hz * self.fast_multiplier, sample_rate);
                self.ratchet_counter += 1;
                if self.ratchet_counter >= self.burst_duration {
                    self.state = BurstState::Paused;
                    self.pause_counter = 0;
                    self.burst_count += 1;
                    self.pause_duration = if self.burst_count >= self.max_bursts {
                        self.burst_count = 0;
                        self.max_bursts = rng.random_range(MAX_BURSTS);
                        rng.random_range(LONG_PAUSE_TICKS)
                    } else {
                        rng.random_range(SHORT_PAUSE_TICKS)
                    };
                    if rng.random::<f32>() < STUTTER_PROBABILITY {
                        self.pause_duration = rng.random_range(STUTTER_TICKS);
                    }
                }
            }
            BurstState::Paused => {
                // Phase deliberately untouched: this is the audible hold.
                self.pause_counter += 1;
                if self.pause_counter >= self.pause_duration {
                    self.state = BurstState::Bursting;
                    self.ratchet_counter = 0;
                    self.burst_duration = rng.random_range(BURST_TICKS);
                    self.fast_multiplier = rng.random_range(FAST_MULTIPLIER);
                }
            }
        }
        triangle_table()[phase.index()]
    }
}
