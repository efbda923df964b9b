//! Terminal key events through the key-state table into the world.

use bonk_arena::core::{World, WorldConfig};
use bonk_arena::input::{key_from_event, meta_action, InputHandler};
use bonk_arena::types::{Key, MetaAction, PLAYER_SPEED};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

/// Feed an event the way the game loop does.
fn feed(ih: &mut InputHandler, ev: KeyEvent, now_ms: f64) {
    if let Some(key) = key_from_event(ev) {
        match ev.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                ih.handle_key_press(key, now_ms);
            }
            KeyEventKind::Release => ih.handle_key_release(key),
        }
    }
}

#[test]
fn held_arrow_moves_player_until_released() {
    let mut world = World::new(WorldConfig::empty(1));
    let mut ih = InputHandler::new().with_key_release_timeout_ms(None);
    let start = world.player().pos;

    feed(&mut ih, event(KeyCode::Right, KeyEventKind::Press), 0.0);
    for f in 1..=10 {
        let frame = ih.sample(f as f64 * 16.0);
        world.tick(0.016, f as f64 * 16.0, &frame);
    }
    let moved = world.player().pos.x - start.x;
    assert!((moved - PLAYER_SPEED * 0.16).abs() < 1e-3, "{}", moved);

    feed(&mut ih, event(KeyCode::Right, KeyEventKind::Release), 170.0);
    let x = world.player().pos.x;
    let frame = ih.sample(176.0);
    world.tick(0.016, 176.0, &frame);
    assert_eq!(world.player().pos.x, x);
}

#[test]
fn auto_repeat_does_not_retrigger_the_swing() {
    let mut world = World::new(WorldConfig::empty(1));
    let mut ih = InputHandler::new();

    feed(&mut ih, event(KeyCode::Char(' '), KeyEventKind::Press), 0.0);
    let report = world.tick(0.0, 0.0, &ih.sample(0.0));
    assert!(report.bonk_started);

    // Let the swing finish while the key is held down and repeating.
    let mut started = 0;
    for f in 1..30 {
        let now = f as f64 * 16.0;
        feed(&mut ih, event(KeyCode::Char(' '), KeyEventKind::Repeat), now);
        if world.tick(0.016, now, &ih.sample(now)).bonk_started {
            started += 1;
        }
    }
    assert_eq!(started, 0);
    assert!(!world.bonk().is_active());
}

#[test]
fn terminal_without_release_events_stops_after_timeout() {
    let mut ih = InputHandler::new().with_key_release_timeout_ms(Some(100.0));
    // Only presses arrive, never releases.
    feed(&mut ih, event(KeyCode::Char('a'), KeyEventKind::Press), 0.0);
    assert_eq!(ih.sample(50.0).move_x, -1.0);
    assert_eq!(ih.sample(150.0).move_x, 0.0);
    assert!(!ih.is_held(Key::Left));
}

#[test]
fn meta_keys_are_not_game_keys() {
    let quit = event(KeyCode::Char('q'), KeyEventKind::Press);
    assert_eq!(meta_action(quit), Some(MetaAction::Quit));
    assert_eq!(key_from_event(quit), None);

    let pause = event(KeyCode::Char('p'), KeyEventKind::Press);
    assert_eq!(meta_action(pause), Some(MetaAction::Pause));
    assert_eq!(key_from_event(pause), None);
}
