use glam::Vec2;
use vaporwave_pong::consts::*;
use vaporwave_pong::platform::HeadlessSession;
use vaporwave_pong::renderer::DrawCommand;
use vaporwave_pong::sim::Side;
use vaporwave_pong::{RunState, Settings};

#[test]
fn test_start_stop_start_preserves_positions() {
    let mut session = HeadlessSession::mount(&Settings::default());

    assert_eq!(session.toggle(), RunState::Running);
    session.pump_frames(25);
    session.key_down("s");
    session.key_down("ArrowUp");

    assert_eq!(session.toggle(), RunState::Stopped);
    let stopped_at = session.game().state().clone();
    assert_eq!(session.pump_frames(100), 0);
    assert_eq!(session.game().state(), &stopped_at);

    assert_eq!(session.toggle(), RunState::Running);
    assert_eq!(session.game().state(), &stopped_at);

    session.pump();
    // First frame after restart draws exactly where the ball was left
    let (x, y) = session.surface().ball_position().unwrap();
    assert_eq!(Vec2::new(x, y), stopped_at.ball.pos);
}

#[test]
fn test_listener_outlives_stop() {
    let mut session = HeadlessSession::mount(&Settings::default());
    assert!(!session.key_down("w"));

    session.toggle();
    session.toggle();
    assert_eq!(session.run_state(), RunState::Stopped);
    assert!(session.has_listener());

    assert!(session.key_down("w"));
    assert_eq!(session.game().state().paddle(Side::Left).y, 144.0);
}

#[test]
fn test_unmount_after_stop_removes_listener() {
    let mut session = HeadlessSession::mount(&Settings::default());
    session.toggle();
    session.pump_frames(2);
    assert_eq!(session.toggle(), RunState::Stopped);
    assert!(session.has_listener());

    let teardown = session.unmount();
    assert_eq!(teardown.cancel, None);
    assert!(teardown.detach_listener);
    assert!(!session.has_listener());
    assert!(!session.has_scheduled_frame());
    assert!(!session.key_down("w"));
}

#[test]
fn test_unmount_releases_everything() {
    let mut session = HeadlessSession::mount(&Settings::default());
    session.toggle();
    session.pump_frames(3);

    let teardown = session.unmount();
    assert!(teardown.cancel.is_some());
    assert!(teardown.detach_listener);
    assert!(!session.has_scheduled_frame());
    assert!(!session.has_listener());
    assert!(!session.key_down("ArrowDown"));

    // Terminal: the button does nothing any more
    assert_eq!(session.toggle(), RunState::Stopped);
    assert_eq!(session.pump_frames(3), 0);
}

#[test]
fn test_long_rally_keeps_invariants() {
    let mut session = HeadlessSession::mount(&Settings::default());
    session.toggle();

    let keys = ["w", "w", "s", "ArrowDown", "ArrowUp", "x"];
    for i in 0..5_000 {
        session.key_down(keys[i % keys.len()]);
        assert!(session.pump());

        let state = session.game().state();
        assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
        assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
        for side in [Side::Left, Side::Right] {
            let y = state.paddle(side).y;
            assert!((0.0..=ARENA_HEIGHT - PADDLE_HEIGHT).contains(&y));
        }
    }
    assert_eq!(session.game().frames(), 5_000);
}

#[test]
fn test_every_frame_redraws_full_arena() {
    let mut session = HeadlessSession::mount(&Settings::default());
    session.toggle();
    session.pump_frames(7);

    assert_eq!(session.surface().frames(), 7);
    let commands = session.surface().commands();
    assert!(matches!(
        commands.first(),
        Some(DrawCommand::Rect { w, h, .. }) if *w == ARENA_WIDTH && *h == ARENA_HEIGHT
    ));
    assert!(matches!(commands.last(), Some(DrawCommand::Circle { .. })));
}
