//! End-to-end gameplay scenarios driven through the public API

use glam::Vec2;
use lane_shooter::Game;
use lane_shooter::consts::NOMINAL_FRAME_MS;
use lane_shooter::platform::{InputEvent, ManualPlatform};
use lane_shooter::sim::{
    ControlScheme, Enemy, GameEvent, LogicalKey, Projectile, Session, SessionStatus, Snapshot,
    TickOutcome, lane_center_x, tick,
};

fn active_session(seed: u64) -> Session {
    let mut session = Session::new(ControlScheme::Keyboard, seed);
    session.start();
    session
}

fn place_enemy(session: &mut Session, lane: usize, y: f32, size: f32, speed: f32) -> u32 {
    let id = session.next_entity_id();
    let mut enemy = Enemy::new(id, lane, lane_center_x(400.0, lane), size, speed);
    enemy.pos.y = y;
    session.enemies.push(enemy);
    id
}

#[test]
fn enemy_leaves_the_bottom_edge_without_scoring() {
    let mut session = active_session(1);
    place_enemy(&mut session, 2, 0.0, 20.0, 1.0);

    // A frozen clock never spawns or fires
    for _ in 0..399 {
        assert_eq!(tick(&mut session, 0.0), TickOutcome::Running);
    }
    assert_eq!(session.enemies.len(), 1);
    assert_eq!(session.enemies[0].pos.y, 399.0);

    tick(&mut session, 0.0);
    assert!(session.enemies.is_empty());
    assert_eq!(session.score, 0);
}

#[test]
fn projectile_and_enemy_meet_on_the_expected_tick() {
    let mut session = active_session(2);
    session.set_lane(0);
    let enemy_id = place_enemy(&mut session, 0, 50.0, 20.0, 2.0);
    let pid = session.next_entity_id();
    session
        .projectiles
        .push(Projectile::new(pid, Vec2::new(50.0, 350.0)));

    // Gap closes by 9 per tick: 300 - 9 * 31 = 21 is still a miss
    for _ in 0..31 {
        tick(&mut session, 0.0);
        assert_eq!(session.score, 0);
    }
    assert_eq!(session.enemies.len(), 1);
    assert_eq!(session.projectiles.len(), 1);

    assert_eq!(tick(&mut session, 0.0), TickOutcome::Running);
    assert_eq!(session.score, 1);
    assert!(session.enemies.is_empty());
    assert!(session.projectiles.is_empty());
    assert!(
        session
            .drain_events()
            .contains(&GameEvent::EnemyDestroyed { enemy_id, score: 1 })
    );
}

#[test]
fn held_fire_respects_cooldown() {
    let mut session = active_session(3);
    session.key_down(LogicalKey::Fire);

    let mut fired_at = Vec::new();
    for i in 1..=100 {
        let t = i as f64 * 10.0;
        tick(&mut session, t);
        let fired = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Fired { .. }))
            .count();
        if fired > 0 {
            fired_at.push(t);
        }
    }
    assert_eq!(fired_at, vec![310.0, 620.0, 930.0]);
}

#[test]
fn holding_left_stops_at_the_first_lane() {
    let mut session = active_session(4);
    session.key_down(LogicalKey::LaneLeft);
    for t in [200.0, 400.0, 600.0] {
        tick(&mut session, t);
    }
    assert_eq!(session.lane, 0);
    assert_eq!(Snapshot::capture(&session).player_x, 50.0);
}

#[test]
fn restart_after_game_over_begins_a_fresh_run() {
    let mut session = active_session(5);
    session.score = 12;
    place_enemy(&mut session, 1, 330.0, 20.0, 1.0);

    assert_eq!(tick(&mut session, 0.0), TickOutcome::GameOver);
    assert_eq!(session.status, SessionStatus::GameOver);
    assert_eq!(tick(&mut session, 16.0), TickOutcome::Skipped);

    session.start();
    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.score, 0);
    assert_eq!(session.lane, 1);
    assert_eq!(session.time_ticks, 0);
    assert!(session.enemies.is_empty());
    assert!(session.projectiles.is_empty());
    assert_eq!(session.difficulty_level(), 1);
}

fn play(seed: u64, max_ticks: u64) -> (Vec<GameEvent>, u32) {
    let session = Session::new(ControlScheme::Keyboard, seed);
    let mut game = Game::new(session, ManualPlatform::new(), Vec::new());
    game.start();
    game.handle_input(InputEvent::KeyDown(LogicalKey::Fire));

    let mut time = 0.0;
    while game.platform_mut().take_frame().is_some() {
        time += NOMINAL_FRAME_MS;
        if game.on_frame(time) != TickOutcome::Running || game.session().time_ticks >= max_ticks {
            break;
        }
    }
    let score = game.session().score;
    (game.sink().clone(), score)
}

#[test]
fn headless_runs_are_reproducible() {
    let (events_a, score_a) = play(99, 3_000);
    let (events_b, score_b) = play(99, 3_000);
    assert_eq!(events_a, events_b);
    assert_eq!(score_a, score_b);
    assert!(
        events_a
            .iter()
            .any(|e| matches!(e, GameEvent::Fired { .. }))
    );
}

#[test]
fn game_over_releases_the_frame_loop() {
    let session = Session::new(ControlScheme::Touch, 6);
    let mut game = Game::new(session, ManualPlatform::new(), Vec::new());
    game.start();
    assert_eq!(game.platform().attached_scheme(), Some(ControlScheme::Touch));

    place_enemy(game.session_mut(), 1, 340.0, 20.0, 1.0);
    game.platform_mut().take_frame();
    assert_eq!(game.on_frame(0.0), TickOutcome::GameOver);

    assert!(!game.platform().has_pending_frame());
    assert_eq!(game.platform().attached_scheme(), None);

    // Input after game over is ignored
    game.handle_input(InputEvent::TouchStart { x: 200.0 });
    assert!(!game.session().input.is_touching());
}
