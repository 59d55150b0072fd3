//! Cross-modulation arithmetic: bipolar conversion and the FM/AM math.

/// FM depth: peak additive deviation in Hz. An additive deviation gives a
/// much larger swing at low base frequencies than a multiplicative one
/// would, which keeps the effect audible across the whole pot range.
pub const FM_DEPTH_HZ: f32 = 20.0;

/// Bounds on the instantaneous frequency an FM channel may drive.
pub const FM_MIN_HZ: f32 = 0.01;
pub const FM_MAX_HZ: f32 = 25.0;

/// AM modulation depth (full depth).
pub const AM_DEPTH: f32 = 1.0;

/// Map an 8-bit unsigned sample onto [-1.0, +1.0].
#[inline]
pub fn to_bipolar(sample: u8) -> f32 {
    sample as f32 / 127.5 - 1.0
}

/// Clamp a bipolar value and map it back onto [0, 255].
#[inline]
pub fn from_bipolar(value: f32) -> u8 {
    ((value.clamp(-1.0, 1.0) + 1.0) * 127.5).round() as u8
}

/// Instantaneous frequency for an FM channel given its base frequency and
/// the bipolar sample of its ring neighbor.
#[inline]
pub fn fm_frequency(base_hz: f32, source: f32) -> f32 {
    (base_hz + source * FM_DEPTH_HZ).clamp(FM_MIN_HZ, FM_MAX_HZ)
}

/// Amplitude-modulate a bipolar carrier by a bipolar modulator.
#[inline]
pub fn am_sample(carrier: f32, modulator: f32) -> f32 {
    (carrier * (1.0 + AM_DEPTH * modulator)).clamp(-1.0, 1.0)
}
