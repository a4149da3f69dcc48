use canvas_pong::consts::*;
use canvas_pong::sim::collision::bounce_off_paddle;
use canvas_pong::sim::{InputState, MatchState, Playfield, Side, reset_match, tick};
use canvas_pong::MatchConfig;
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn input_steps() -> impl Strategy<Value = Vec<(bool, bool, f32)>> {
    proptest::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..=MAX_FRAME_DT), 1..600)
}

fn fresh(seed: u64, config: &MatchConfig) -> (MatchState, Playfield, Pcg32) {
    let field = Playfield::new(800, 480);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = MatchState::new(&field);
    reset_match(&mut state, &field, config, &mut rng);
    (state, field, rng)
}

proptest! {
    #[test]
    fn paddles_stay_on_court(seed in any::<u64>(), steps in input_steps()) {
        let config = MatchConfig::default();
        let (mut state, field, mut rng) = fresh(seed, &config);
        for (up, down, dt) in steps {
            let input = InputState { up, down };
            tick(&mut state, &input, true, &field, &config, &mut rng, dt);
            prop_assert!(state.left_y >= 0.0 && state.left_y <= field.height - PADDLE_HEIGHT);
            prop_assert!(state.right_y >= 0.0 && state.right_y <= field.height - PADDLE_HEIGHT);
        }
    }

    #[test]
    fn scores_only_grow_one_at_a_time(seed in any::<u64>(), steps in input_steps()) {
        let config = MatchConfig { winning_score: 3, serve_delay: 0.05 };
        let (mut state, field, mut rng) = fresh(seed, &config);
        for (up, down, dt) in steps {
            let (left, right) = (state.left_score, state.right_score);
            tick(&mut state, &InputState { up, down }, true, &field, &config, &mut rng, dt);
            prop_assert!(state.left_score >= left && state.right_score >= right);
            prop_assert!((state.left_score - left) + (state.right_score - right) <= 1);
            prop_assert!(state.ball_speed() <= MAX_BALL_SPEED + 1e-2);
        }
    }

    #[test]
    fn finished_match_stays_frozen(seed in any::<u64>(), steps in input_steps()) {
        let config = MatchConfig::default();
        let (mut state, field, mut rng) = fresh(seed, &config);
        state.left_score = 3;
        state.right_score = 7;
        state.winner = Some(Side::Right);
        state.serve_timer = 0.0;
        let frozen = state.clone();
        for (up, down, dt) in steps {
            tick(&mut state, &InputState { up, down }, true, &field, &config, &mut rng, dt);
            prop_assert_eq!(state.ball_pos, frozen.ball_pos);
            prop_assert_eq!(state.ball_vel, frozen.ball_vel);
            prop_assert_eq!(state.left_score, frozen.left_score);
            prop_assert_eq!(state.right_score, frozen.right_score);
        }
    }

    #[test]
    fn bounce_respects_angle_and_speed(
        offset in -60.0f32..60.0,
        speed in 100.0f32..MAX_BALL_SPEED,
        left in any::<bool>(),
    ) {
        let field = Playfield::new(800, 480);
        let paddle_y = 150.0;
        let side = if left { Side::Left } else { Side::Right };
        let incoming = Vec2::new(if left { -speed } else { speed }, 0.0);
        let pos = Vec2::new(400.0, paddle_y + PADDLE_HEIGHT / 2.0 + offset);

        let bounce = bounce_off_paddle(pos, incoming, paddle_y, side, &field);
        let out_speed = bounce.vel.length();

        prop_assert!(bounce.angle.abs() <= MAX_BOUNCE_ANGLE + 1e-6);
        prop_assert!(out_speed <= MAX_BALL_SPEED + 1e-2);
        prop_assert!(out_speed <= speed * PADDLE_BOOST + 1e-2);
        prop_assert!(out_speed >= (speed * PADDLE_BOOST).min(MAX_BALL_SPEED) - 1e-2);
        // Ball always leaves toward the opponent
        prop_assert_eq!(bounce.vel.x > 0.0, left);
    }
}

#[test]
fn center_hit_is_horizontal() {
    let field = Playfield::new(800, 480);
    let pos = Vec2::new(50.0, 150.0 + PADDLE_HEIGHT / 2.0);
    let bounce = bounce_off_paddle(pos, Vec2::new(-400.0, 0.0), 150.0, Side::Left, &field);
    assert_eq!(bounce.angle, 0.0);
    assert_eq!(bounce.vel.y, 0.0);
}
