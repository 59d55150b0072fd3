//! Waveform generators and the primitives they share.

pub mod crossmod;
pub mod gravity;
pub mod pendulum;
pub mod phase;
pub mod random_slope;
pub mod ratchet;
pub mod swarm;
pub mod tables;
pub mod trisine;
pub mod waveform;
pub mod wonky;

pub use phase::PhaseAccumulator;
pub use waveform::WaveformKind;
