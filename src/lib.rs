//! Four-channel low-frequency modulation engine for a hardware synth module.
//!
//! Each of the four channels produces one 8-bit sample per tick at a fixed
//! 2500 Hz rate, selectable among twelve waveform algorithms. Adjacent
//! channels sit on a fixed ring and can modulate one another (FM and AM
//! kinds read their counter-clockwise neighbor). Display, input decoding,
//! persistence storage and ADC sampling are external collaborators; this
//! crate exposes only their interface boundaries on [`Engine`].

pub mod engine;
pub mod gen;
pub mod utils;

pub use engine::{Engine, TickScheduler, CHANNEL_COUNT};
pub use gen::WaveformKind;
