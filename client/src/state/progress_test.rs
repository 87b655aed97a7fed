use super::*;

// =============================================================
// ProgressState
// =============================================================

#[test]
fn progress_starts_at_zero() {
    let state = ProgressState::new();
    assert_eq!(state.value(), 0);
    assert!(!state.is_complete());
    assert_eq!(state.label(), "0%");
}

#[test]
fn first_tick_advances_by_step() {
    let mut state = ProgressState::new();
    assert_eq!(state.tick(), TickOutcome::Advanced(2));
    assert_eq!(state.value(), 2);
}

#[test]
fn fiftieth_tick_completes_at_exactly_one_hundred() {
    let mut state = ProgressState::new();
    for _ in 0..49 {
        assert!(matches!(state.tick(), TickOutcome::Advanced(_)));
    }
    assert_eq!(state.tick(), TickOutcome::Completed(100));
    assert!(state.is_complete());
}

#[test]
fn ticks_after_completion_change_nothing() {
    let mut state = ProgressState::new();
    while !state.is_complete() {
        state.tick();
    }
    assert_eq!(state.tick(), TickOutcome::Finished);
    assert_eq!(state.tick(), TickOutcome::Finished);
    assert_eq!(state.value(), 100);
}

#[test]
fn values_are_even_increasing_and_bounded() {
    let mut state = ProgressState::new();
    let mut previous = state.value();
    loop {
        match state.tick() {
            TickOutcome::Advanced(v) | TickOutcome::Completed(v) => {
                assert_eq!(v % PROGRESS_STEP, 0);
                assert!(v > previous);
                assert!(v <= PROGRESS_COMPLETE);
                previous = v;
            }
            TickOutcome::Finished => break,
        }
    }
    assert_eq!(previous, PROGRESS_COMPLETE);
}

#[test]
fn width_and_label_match_counter() {
    let mut state = ProgressState::new();
    for _ in 0..21 {
        state.tick();
    }
    assert_eq!(state.width(), "42%");
    assert_eq!(state.label(), "42%");
}

#[test]
fn schedule_totals_one_second_of_ticks() {
    let ticks = u32::from(PROGRESS_COMPLETE / PROGRESS_STEP);
    assert_eq!(ticks, 50);
    assert_eq!(ticks * TICK_INTERVAL_MS, 1000);
}

// =============================================================
// LoadingPhase
// =============================================================

#[test]
fn loading_phase_default_hides_content() {
    let phase = LoadingPhase::default();
    assert!(!phase.is_revealed());
    assert_eq!(phase.content_display(), "none");
}

#[test]
fn revealed_phase_shows_content() {
    assert!(LoadingPhase::Revealed.is_revealed());
    assert_eq!(LoadingPhase::Revealed.content_display(), "block");
}
