// Tests for the frame pacer and the scroll-quiet debounce.

use app_core::{frame_interval, FramePacer, ScrollQuiet, FRAME_INTERVAL_MS, SCROLL_QUIET_MS};

#[test]
fn ticks_are_gated_by_the_frame_budget() {
    let mut pacer = FramePacer::new(0.0);
    assert!(!pacer.should_tick(10.0, false));
    assert!(pacer.should_tick(16.0, false));
    assert!(!pacer.should_tick(24.0, false), "only 8 ms since last tick");
    assert!(pacer.should_tick(32.0, false));
}

#[test]
fn denied_ticks_carry_the_reference_time_forward() {
    let mut pacer = FramePacer::new(0.0);
    assert!(!pacer.should_tick(6.0, false));
    assert!(!pacer.should_tick(12.0, false));
    assert_eq!(pacer.last_tick_ms(), 0.0);
    // elapsed accumulates against the untouched reference
    assert!(pacer.should_tick(16.0, false));
    assert_eq!(pacer.last_tick_ms(), 16.0);
}

#[test]
fn long_gaps_grant_a_single_tick() {
    let mut pacer = FramePacer::new(0.0);
    assert!(pacer.should_tick(500.0, false));
    assert!(!pacer.should_tick(501.0, false), "no burst catch-up");
}

#[test]
fn scroll_branch_currently_matches_the_idle_budget() {
    // Inert differentiation: both arms resolve to the same constant today.
    assert_eq!(frame_interval(true), frame_interval(false));
    assert_eq!(frame_interval(false), FRAME_INTERVAL_MS);
}

#[test]
fn scroll_quiet_clears_after_the_window() {
    let mut scroll = ScrollQuiet::default();
    assert!(!scroll.is_scrolling(0.0));
    scroll.note_scroll(100.0);
    assert!(scroll.is_scrolling(100.0));
    assert!(scroll.is_scrolling(100.0 + SCROLL_QUIET_MS - 1.0));
    assert!(!scroll.is_scrolling(100.0 + SCROLL_QUIET_MS));
}

#[test]
fn repeated_scrolls_extend_the_quiet_window() {
    let mut scroll = ScrollQuiet::default();
    scroll.note_scroll(0.0);
    scroll.note_scroll(200.0);
    assert!(scroll.is_scrolling(200.0 + SCROLL_QUIET_MS - 1.0));
    assert!(!scroll.is_scrolling(200.0 + SCROLL_QUIET_MS));
}
