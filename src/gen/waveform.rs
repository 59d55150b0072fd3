/// The twelve selectable waveform algorithms.
///
/// The integer codes are the persistence format and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Triangle,
    Square,
    Sine,
    RandomSlope,
    WonkyTriangle,
    Fm,
    RatchetTriangle,
    TriSine,
    AmSine,
    Swarm,
    Pendulum,
    Gravity,
}

impl WaveformKind {
    pub const COUNT: u8 = 12;

    const ALL: [WaveformKind; 12] = [
        WaveformKind::Triangle,
        WaveformKind::Square,
        WaveformKind::Sine,
        WaveformKind::RandomSlope,
        WaveformKind::WonkyTriangle,
        WaveformKind::Fm,
        WaveformKind::RatchetTriangle,
        WaveformKind::TriSine,
        WaveformKind::AmSine,
        WaveformKind::Swarm,
        WaveformKind::Pendulum,
        WaveformKind::Gravity,
    ];

    /// Decode a persisted index. Out-of-range values are rejected so a
    /// corrupted store can never select a nonexistent algorithm.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Next kind in selection order, wrapping after the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % Self::ALL.len()]
    }

    /// Previous kind in selection order, wrapping before the first.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short display name for the UI collaborator.
    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Triangle => "Triangle",
            WaveformKind::Square => "Square",
            WaveformKind::Sine => "Sine",
            WaveformKind::RandomSlope => "Random Slope",
            WaveformKind::WonkyTriangle => "Wonky Tri",
            WaveformKind::Fm => "FM",
            WaveformKind::RatchetTriangle => "Ratchet",
            WaveformKind::TriSine => "TriSine",
            WaveformKind::AmSine => "AM Sine",
            WaveformKind::Swarm => "Swarm",
            WaveformKind::Pendulum => "Pendulum",
            WaveformKind::Gravity => "Gravity",
        }
    }
}
