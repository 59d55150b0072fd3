// Integration tests for the UI and persistence surfaces.

use quadlfo::engine::CHANNEL_COUNT;
use quadlfo::{Engine, WaveformKind};

#[test]
fn channel_selection_wraps_mod_four() {
    let mut engine = Engine::with_seed(1);
    assert_eq!(engine.selected_channel(), 0);
    for expected in [1, 2, 3, 0, 1] {
        engine.select_next_channel();
        assert_eq!(engine.selected_channel(), expected);
    }
}

#[test]
fn waveform_advance_wraps_mod_twelve() {
    let mut engine = Engine::with_seed(1);
    assert_eq!(engine.waveform_kind(0), WaveformKind::Triangle);

    for _ in 0..12 {
        engine.advance_waveform(1);
    }
    assert_eq!(engine.waveform_kind(0), WaveformKind::Triangle);

    engine.advance_waveform(-1);
    assert_eq!(engine.waveform_kind(0), WaveformKind::Gravity);
    engine.advance_waveform(1);
    assert_eq!(engine.waveform_kind(0), WaveformKind::Triangle);
}

#[test]
fn advance_applies_to_the_selected_channel_only() {
    let mut engine = Engine::with_seed(1);
    engine.select_next_channel();
    engine.advance_waveform(1);
    assert_eq!(engine.waveform_kind(1), WaveformKind::Square);
    for ch in [0, 2, 3] {
        assert_eq!(engine.waveform_kind(ch), WaveformKind::Triangle);
    }
}

#[test]
fn stored_waveform_indices_roundtrip() {
    let mut engine = Engine::with_seed(1);
    for ch in 0..CHANNEL_COUNT {
        engine.set_waveform(ch, WaveformKind::from_index(11 - ch as u8).unwrap());
    }
    let stored: Vec<u8> = (0..CHANNEL_COUNT).map(|ch| engine.waveform_index(ch)).collect();

    let mut restored = Engine::with_seed(2);
    for (ch, &index) in stored.iter().enumerate() {
        restored.restore_waveform(ch, index);
    }
    for ch in 0..CHANNEL_COUNT {
        assert_eq!(restored.waveform_kind(ch), engine.waveform_kind(ch));
    }
}

#[test]
fn invalid_stored_index_is_discarded() {
    let mut engine = Engine::with_seed(1);
    engine.set_waveform(2, WaveformKind::Swarm);
    engine.restore_waveform(2, 12);
    assert_eq!(engine.waveform_kind(2), WaveformKind::Swarm);
    engine.restore_waveform(2, 255);
    assert_eq!(engine.waveform_kind(2), WaveformKind::Swarm);
    // In-range values still apply.
    engine.restore_waveform(2, 0);
    assert_eq!(engine.waveform_kind(2), WaveformKind::Triangle);
}
