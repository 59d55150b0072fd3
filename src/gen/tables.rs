//! 8-bit waveform lookup tables shared by every channel.

use std::f64::consts::PI;
use std::sync::OnceLock;

/// Entries per table. Phase accumulators are interpreted modulo this size.
pub const TABLE_SIZE: usize = 256;

static TRIANGLE_TABLE: OnceLock<[u8; TABLE_SIZE]> = OnceLock::new();
static SQUARE_TABLE: OnceLock<[u8; TABLE_SIZE]> = OnceLock::new();
static SINE_TABLE: OnceLock<[u8; TABLE_SIZE]> = OnceLock::new();

/// Build all three tables up front so the first tick pays no lazy-init cost.
pub fn init_tables() {
    let _ = triangle_table();
    let _ = square_table();
    let _ = sine_table();
}

/// Symmetric triangle: rises 0..=255 over the first half, falls back over the second.
pub fn triangle_table() -> &'static [u8; TABLE_SIZE] {
    TRIANGLE_TABLE.get_or_init(|| {
        std::array::from_fn(|i| {
            if i < TABLE_SIZE / 2 {
                (i * 2) as u8
            } else {
                (255 - (i - TABLE_SIZE / 2) * 2) as u8
            }
        })
    })
}

/// Full-scale square: high for the first half-cycle, low for the second.
pub fn square_table() -> &'static [u8; TABLE_SIZE] {
    SQUARE_TABLE.get_or_init(|| std::array::from_fn(|i| if i < TABLE_SIZE / 2 { 255 } else { 0 }))
}

/// One sine cycle centered on 127.5, spanning the full 8-bit range.
pub fn sine_table() -> &'static [u8; TABLE_SIZE] {
    SINE_TABLE.get_or_init(|| {
        std::array::from_fn(|i| {
            let angle = 2.0 * PI * i as f64 / TABLE_SIZE as f64;
            (angle.sin() * 127.5 + 127.5).round() as u8
        })
    })
}

/// Wrap an unbounded phase accumulator into a table index.
///
/// Wrapping happens only here, at read time, so sub-sample phase precision
/// is preserved across ticks no matter how low the frequency is.
#[inline]
pub fn table_index(phase: f64) -> usize {
    (phase.floor() as i64).rem_euclid(TABLE_SIZE as i64) as usize
}
