// File: crates/interact-core/tests/interaction.rs
// Purpose: Hover/selection/drag transitions and repaint signalling of the interaction state machine.

mod common;

use common::ScriptedHost;
use interact_core::{InteractionState, Point, PointerEvent, Repaint};

fn moved(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Moved(Point::new(x, y))
}

fn dragged(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Dragged(Point::new(x, y))
}

#[test]
fn initial_state_is_empty() {
    let host = ScriptedHost::new(10);
    let state = InteractionState::new();
    assert_eq!(state.hover(), None);
    assert_eq!(state.selection(), None);
    assert_eq!(state.pointer(), None);
    assert!(!state.is_dragging());
    assert!(!state.is_dragging_chart(&host));
}

#[test]
fn scenario_hover_select_deselect() {
    let mut host = ScriptedHost::new(100);
    host.bar_width = 4;
    host.offset = 18;
    let mut state = InteractionState::new();

    // strip: 390 >= 400 - 20
    assert_eq!(state.handle(&host, moved(150, 390)), Repaint::Skip);
    assert_eq!(state.hover(), None);
    assert_eq!(host.lookups.get(), 0, "no lookup inside the disabled region");

    assert_eq!(state.handle(&host, moved(150, 100)), Repaint::Needed);
    assert_eq!(state.hover(), Some(host.candle(42)));

    assert_eq!(state.handle(&host, PointerEvent::Clicked), Repaint::Needed);
    assert_eq!(state.selection(), Some(host.candle(42)));

    assert_eq!(state.handle(&host, PointerEvent::Clicked), Repaint::Needed);
    assert_eq!(state.selection(), None);
}

#[test]
fn click_toggle_has_period_two() {
    let host = ScriptedHost::new(50);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(7, 10));
    let c = host.candle(7);
    for _ in 0..3 {
        let _ = state.handle(&host, PointerEvent::Clicked);
        assert_eq!(state.selection(), Some(c));
        let _ = state.handle(&host, PointerEvent::Clicked);
        assert_eq!(state.selection(), None);
    }
}

#[test]
fn click_on_empty_space_clears_selection() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(3, 10));
    let _ = state.handle(&host, PointerEvent::Clicked);
    assert_eq!(state.selection(), Some(host.candle(3)));

    // past the last candle
    let _ = state.handle(&host, moved(200, 10));
    assert_eq!(state.hover(), None);
    assert_eq!(state.handle(&host, PointerEvent::Clicked), Repaint::Needed);
    assert_eq!(state.selection(), None);
}

#[test]
fn click_on_empty_space_without_selection_is_noop() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(200, 10));
    assert_eq!(state.handle(&host, PointerEvent::Clicked), Repaint::Skip);
    assert_eq!(state.selection(), None);
}

#[test]
fn clicking_another_candle_moves_selection() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(2, 10));
    let _ = state.handle(&host, PointerEvent::Clicked);
    let _ = state.handle(&host, moved(5, 10));
    let _ = state.handle(&host, PointerEvent::Clicked);
    assert_eq!(state.selection(), Some(host.candle(5)));
}

#[test]
fn hover_unchanged_by_non_move_events() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(4, 10));
    let hover = state.hover();
    assert!(hover.is_some());

    for ev in [PointerEvent::Pressed, PointerEvent::Released, PointerEvent::Exited, PointerEvent::Clicked] {
        let _ = state.handle(&host, ev);
        assert_eq!(state.hover(), hover, "after {ev:?}");
    }
    let _ = state.handle(&host, moved(8, 395));
    assert_eq!(state.hover(), hover, "frozen over the scrollbar strip");
}

#[test]
fn exit_clears_pointer_but_keeps_hover() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(4, 10));
    assert_eq!(state.handle(&host, PointerEvent::Exited), Repaint::Skip);
    assert_eq!(state.pointer(), None);
    assert_eq!(state.hover(), Some(host.candle(4)));
}

#[test]
fn selection_survives_hover_changes_and_drags() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, moved(1, 10));
    let _ = state.handle(&host, PointerEvent::Clicked);
    let selected = state.selection();

    let _ = state.handle(&host, PointerEvent::Pressed);
    let _ = state.handle(&host, dragged(6, 10));
    let _ = state.handle(&host, dragged(9, 10));
    let _ = state.handle(&host, PointerEvent::Released);
    let _ = state.handle(&host, moved(2, 10));
    assert_eq!(state.hover(), Some(host.candle(2)));
    assert_eq!(state.selection(), selected);
}

#[test]
fn repaint_only_when_hover_changes() {
    let mut host = ScriptedHost::new(10);
    host.bar_width = 10;
    let mut state = InteractionState::new();
    assert_eq!(state.handle(&host, moved(11, 10)), Repaint::Needed);
    // same slot, different pixel
    assert_eq!(state.handle(&host, moved(15, 30)), Repaint::Skip);
    assert_eq!(state.pointer(), Some(Point::new(15, 30)));
    assert_eq!(state.handle(&host, moved(25, 30)), Repaint::Needed);
    assert_eq!(state.handle(&host, moved(500, 30)), Repaint::Needed);
    assert_eq!(state.handle(&host, moved(600, 30)), Repaint::Skip);
}

#[test]
fn press_and_release_toggle_drag_flag() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    assert_eq!(state.handle(&host, PointerEvent::Pressed), Repaint::Needed);
    assert!(state.is_dragging());
    assert_eq!(state.handle(&host, PointerEvent::Pressed), Repaint::Skip);
    assert_eq!(state.handle(&host, PointerEvent::Released), Repaint::Needed);
    assert!(!state.is_dragging());
    assert_eq!(state.handle(&host, PointerEvent::Released), Repaint::Skip);
}

#[test]
fn drag_guard_excludes_scrollbar_strip() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, PointerEvent::Pressed);

    let _ = state.handle(&host, dragged(5, 390));
    assert!(state.is_dragging());
    assert!(!state.is_dragging_chart(&host));

    let _ = state.handle(&host, dragged(5, 100));
    assert!(state.is_dragging_chart(&host));

    // strip starts at height - scroll_height = 380
    let _ = state.handle(&host, dragged(5, 379));
    assert!(state.is_dragging_chart(&host));
    let _ = state.handle(&host, dragged(5, 380));
    assert!(!state.is_dragging_chart(&host));

    let _ = state.handle(&host, PointerEvent::Exited);
    assert!(state.is_dragging());
    assert!(!state.is_dragging_chart(&host), "no pointer, no chart drag");
}

#[test]
fn dragged_sets_flag_and_updates_hover() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    assert_eq!(state.handle(&host, dragged(3, 10)), Repaint::Needed);
    assert!(state.is_dragging());
    assert_eq!(state.hover(), Some(host.candle(3)));
}

#[test]
fn click_ends_drag() {
    let host = ScriptedHost::new(10);
    let mut state = InteractionState::new();
    let _ = state.handle(&host, PointerEvent::Pressed);
    let _ = state.handle(&host, PointerEvent::Clicked);
    assert!(!state.is_dragging());
}
