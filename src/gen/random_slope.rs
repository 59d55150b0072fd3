//! Random-slope generator: linear ramps between random targets.

use rand::Rng;
use rand_pcg::Pcg32;

/// Ramps linearly from target to target. A new target is drawn every
/// `1000 / frequency` milliseconds, with the slope computed so the ramp
/// lands on the target exactly at the next retarget instant. The output is
/// the ramp value itself, not a table lookup.
#[derive(Debug, Clone)]
pub struct RandomSlope {
    current: f32,
    target: f32,
    step: f32,
    next_retarget_ms: f64,
}

impl RandomSlope {
    pub fn new() -> Self {
        Self {
            current: 128.0,
            target: 128.0,
            step: 0.0,
            // Forces a retarget on the very first tick.
            next_retarget_ms: 0.0,
        }
    }

    /// Ramp value for cross-modulation reads, already in [0, 255].
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn update(&mut self, rng: &mut Pcg32, frequency_hz: f32, now_ms: f64, tick_ms: f64) -> u8 {
        if now_ms >= self.next_retarget_ms {
            let period_ms = 1000.0 / frequency_hz as f64;
            self.target = rng.random_range(0.0..=255.0);
            let ticks_to_target = (period_ms / tick_ms).max(1.0);
            self.step = (self.target - self.current) / ticks_to_target as f32;
            self.next_retarget_ms = now_ms + period_ms;
        }

        self.current += self.step;
        // Sign-aware overshoot clamp: land on the target, never past it.
        if (self.step >= 0.0 && self.current > self.target)
            || (self.step < 0.0 && self.current < self.target)
        {
            self.current = self.target;
        }

        self.current.clamp(0.0, 255.0) as u8
    }
}

impl Default for RandomSlope {
    fn default() -> Self {
        Self::new()
    }
}
