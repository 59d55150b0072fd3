// Demo loop: runs the engine against the host clock for a few seconds and
// logs a coarse view of each channel's output. On the real device the
// samples feed PWM duty-cycle registers instead.

use std::time::{Duration, Instant};

use anyhow::Result;

use quadlfo::engine::scheduler::DEFAULT_TICK_INTERVAL_US;
use quadlfo::{Engine, TickScheduler, WaveformKind};

fn main() -> Result<()> {
    quadlfo::utils::init_logger();

    let mut engine = Engine::new();
    engine.set_waveform(0, WaveformKind::Triangle);
    engine.set_waveform(1, WaveformKind::RandomSlope);
    engine.set_waveform(2, WaveformKind::Fm);
    engine.set_waveform(3, WaveformKind::Swarm);

    let mut scheduler = TickScheduler::new(Duration::from_micros(DEFAULT_TICK_INTERVAL_US));

    // Stand-in for the frequency pots: fixed normalized positions.
    let controls = [0.55_f32, 0.3, 0.7, 0.4];

    let started = Instant::now();
    let mut last_samples = [0u8; 4];
    while started.elapsed() < Duration::from_secs(4) {
        if scheduler.should_tick() {
            last_samples = engine.tick(&controls);
            // One status line per half second of engine time.
            if engine.tick_count() % 1250 == 0 {
                log::info!(
                    "t={:>6} ch0={:>3} ch1={:>3} ch2={:>3} ch3={:>3}",
                    engine.tick_count(),
                    last_samples[0],
                    last_samples[1],
                    last_samples[2],
                    last_samples[3]
                );
            }
        }
        std::hint::spin_loop();
    }

    log::info!(
        "ran {} ticks ({} slipped), final samples {:?}",
        engine.tick_count(),
        scheduler.slipped_ticks(),
        last_samples
    );
    Ok(())
}
