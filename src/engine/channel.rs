//! One modulation channel: primary phase, selected algorithm, generator bank.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::gen::crossmod::{am_sample, fm_frequency, from_bipolar, to_bipolar};
use crate::gen::gravity::Gravity;
use crate::gen::pendulum::Pendulum;
use crate::gen::phase::PhaseAccumulator;
use crate::gen::random_slope::RandomSlope;
use crate::gen::ratchet::RatchetTriangle;
use crate::gen::swarm::Swarm;
use crate::gen::tables::{sine_table, square_table, triangle_table};
use crate::gen::trisine::TriSine;
use crate::gen::waveform::WaveformKind;
use crate::gen::wonky::WonkyTriangle;

/// Timing context for one tick, shared by all four channels.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Effective per-channel update rate, 1e6 / tick interval in us.
    pub sample_rate: f32,
    /// Milliseconds since startup, derived from the tick counter.
    pub now_ms: f64,
    /// Milliseconds per tick.
    pub tick_ms: f64,
}

/// A single LFO voice.
///
/// All auxiliary generator states are created at startup and live for the
/// process lifetime; switching `kind` only changes which one is stepped, so
/// startup-seeded parameters (the TriSine ratio, the wonky hold schedule)
/// survive waveform changes.
pub struct Channel {
    index: usize,
    kind: WaveformKind,
    frequency_hz: f32,
    phase: PhaseAccumulator,
    rng: Pcg32,
    random_slope: RandomSlope,
    wonky: WonkyTriangle,
    ratchet: RatchetTriangle,
    trisine: TriSine,
    swarm: Swarm,
    pendulum: Pendulum,
    gravity: Gravity,
}

impl Channel {
    pub fn new(index: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let wonky = WonkyTriangle::new(&mut rng);
        let ratchet = RatchetTriangle::new(&mut rng);
        let trisine = TriSine::new(&mut rng);
        Self {
            index,
            kind: WaveformKind::Triangle,
            frequency_hz: 1.0,
            phase: PhaseAccumulator::new(),
            rng,
            random_slope: RandomSlope::new(),
            wonky,
            ratchet,
            trisine,
            swarm: Swarm::new(),
            pendulum: Pendulum::new(),
            gravity: Gravity::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> WaveformKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: WaveformKind) {
        self.kind = kind;
    }

    pub fn frequency_hz(&self) -> f32 {
        self.frequency_hz
    }

    pub fn set_frequency(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz;
    }

    /// Raw unwrapped primary phase, exposed for timing verification.
    pub fn phase(&self) -> f64 {
        self.phase.raw()
    }

    /// Sample of this channel as seen by its ring neighbor.
    ///
    /// Only the base waveform is read: square and sine use their own tables,
    /// random slope reports its ramp value, and every other kind collapses
    /// to a triangle read of the primary phase so modulation chains never
    /// exceed one hop.
    pub fn source_sample(&self) -> u8 {
        match self.kind {
            WaveformKind::Square => square_table()[self.phase.index()],
            WaveformKind::Sine => sine_table()[self.phase.index()],
            WaveformKind::RandomSlope => self.random_slope.current() as u8,
            _ => triangle_table()[self.phase.index()],
        }
    }

    /// Advance one tick and produce the output sample. `neighbor` is the
    /// ring neighbor's source sample snapshotted at tick start.
    pub fn update(&mut self, ctx: &TickContext, neighbor: u8) -> u8 {
        let sr = ctx.sample_rate;
        let base = self.frequency_hz;
        match self.kind {
            WaveformKind::Triangle => {
                self.phase.advance(base, sr);
                triangle_table()[self.phase.index()]
            }
            WaveformKind::Square => {
                self.phase.advance(base, sr);
                square_table()[self.phase.index()]
            }
            WaveformKind::Sine => {
                self.phase.advance(base, sr);
                sine_table()[self.phase.index()]
            }
            WaveformKind::RandomSlope => {
                self.random_slope
                    .update(&mut self.rng, base, ctx.now_ms, ctx.tick_ms)
            }
            WaveformKind::WonkyTriangle => {
                self.wonky.update(&mut self.rng, base, &mut self.phase, sr)
            }
            WaveformKind::Fm => {
                let hz = fm_frequency(base, to_bipolar(neighbor));
                self.phase.advance(hz, sr);
                triangle_table()[self.phase.index()]
            }
            WaveformKind::RatchetTriangle => {
                self.ratchet.update(&mut self.rng, base, &mut self.phase, sr)
            }
            WaveformKind::TriSine => self.trisine.update(base, &mut self.phase, sr),
            WaveformKind::AmSine => {
                self.phase.advance(base, sr);
                let carrier = to_bipolar(sine_table()[self.phase.index()]);
                from_bipolar(am_sample(carrier, to_bipolar(neighbor)))
            }
            WaveformKind::Swarm => self.swarm.update(base, &mut self.phase, sr),
            WaveformKind::Pendulum => self.pendulum.update(base, &mut self.phase, sr),
            WaveformKind::Gravity => {
                self.gravity.update(&mut self.rng, base, &mut self.phase, sr)
            }
        }
    }
}
