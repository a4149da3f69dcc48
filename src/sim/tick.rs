//! Per-frame simulation step
//!
//! Advances paddles, AI, serve countdown, ball physics and scoring by `dt`.

use glam::Vec2;
use rand::Rng;

use super::collision::{bounce_off_paddle, overlaps_paddle};
use super::state::{InputState, MatchState, Playfield, ServeDirection, Side};
use crate::consts::*;
use crate::options::MatchConfig;

/// Advance the match by `dt` seconds.
///
/// The human paddle always moves so it can be warmed up before the match
/// starts; everything else waits for `started`. Callers bound `dt` (see
/// `FrameClock`); this function integrates whatever it is given.
pub fn tick<R: Rng>(
    state: &mut MatchState,
    input: &InputState,
    started: bool,
    field: &Playfield,
    config: &MatchConfig,
    rng: &mut R,
    dt: f32,
) {
    if input.up {
        state.left_y -= PADDLE_SPEED * dt;
    }
    if input.down {
        state.left_y += PADDLE_SPEED * dt;
    }
    state.left_y = field.clamp_paddle(state.left_y);

    if !started {
        return;
    }

    move_ai(state, field, dt);

    if state.winner.is_some() {
        return;
    }

    // A parked ball waits out the countdown; with no delay it launches next tick
    if state.serve_timer > 0.0 || state.ball_vel == Vec2::ZERO {
        state.serve_timer -= dt;
        if state.serve_timer <= 0.0 {
            launch_ball(state, rng);
        }
        return;
    }

    state.ball_pos += state.ball_vel * dt;

    // Top/bottom walls
    if state.ball_pos.y - BALL_RADIUS <= 0.0 {
        state.ball_pos.y = BALL_RADIUS;
        state.ball_vel.y = state.ball_vel.y.abs();
    } else if state.ball_pos.y + BALL_RADIUS >= field.height {
        state.ball_pos.y = field.height - BALL_RADIUS;
        state.ball_vel.y = -state.ball_vel.y.abs();
    }

    // Paddles only collide with a ball heading toward them
    let hit = if state.ball_vel.x < 0.0
        && overlaps_paddle(state.ball_pos, field.left_x(), state.left_y)
    {
        Some((Side::Left, state.left_y))
    } else if state.ball_vel.x > 0.0
        && overlaps_paddle(state.ball_pos, field.right_x(), state.right_y)
    {
        Some((Side::Right, state.right_y))
    } else {
        None
    };
    if let Some((side, paddle_y)) = hit {
        let bounce = bounce_off_paddle(state.ball_pos, state.ball_vel, paddle_y, side, field);
        state.ball_pos = bounce.pos;
        state.ball_vel = bounce.vel;
    }

    if state.ball_pos.x + BALL_RADIUS < 0.0 {
        score_point(state, field, config, Side::Right);
    } else if state.ball_pos.x - BALL_RADIUS > field.width {
        score_point(state, field, config, Side::Left);
    }
}

/// Right paddle follows the ball while it approaches, otherwise recenters
fn move_ai(state: &mut MatchState, field: &Playfield, dt: f32) {
    let target_y = if state.ball_vel.x > 0.0 {
        state.ball_pos.y - PADDLE_HEIGHT / 2.0
    } else {
        field.paddle_rest_y()
    };

    let delta = target_y - state.right_y;
    if delta.abs() > AI_DEAD_ZONE {
        let max_move = AI_SPEED * dt;
        state.right_y += delta.signum() * delta.abs().min(max_move);
    }
    state.right_y = field.clamp_paddle(state.right_y);
}

/// Give the parked ball its serve velocity
pub fn launch_ball<R: Rng>(state: &mut MatchState, rng: &mut R) {
    let angle = (rng.random::<f32>() * 2.0 - 1.0) * MAX_SERVE_ANGLE;
    state.ball_vel = Vec2::new(
        state.serve_direction.sign() * BASE_BALL_SPEED * angle.cos(),
        BASE_BALL_SPEED * angle.sin(),
    );
    log::debug!("Serve launched {:?} at {:.1}°", state.serve_direction, angle.to_degrees());
}

/// Park the ball at center and restart the serve countdown
pub fn reset_serve(
    state: &mut MatchState,
    field: &Playfield,
    config: &MatchConfig,
    direction: ServeDirection,
) {
    state.ball_pos = field.center();
    state.ball_vel = Vec2::ZERO;
    state.serve_direction = direction;
    state.serve_timer = config.serve_delay;
}

/// Zero the scores, recenter paddles and serve in a random direction
pub fn reset_match<R: Rng>(
    state: &mut MatchState,
    field: &Playfield,
    config: &MatchConfig,
    rng: &mut R,
) {
    state.left_score = 0;
    state.right_score = 0;
    state.winner = None;
    state.left_y = field.paddle_rest_y();
    state.right_y = field.paddle_rest_y();

    let direction = if rng.random_bool(0.5) {
        ServeDirection::TowardRight
    } else {
        ServeDirection::TowardLeft
    };
    reset_serve(state, field, config, direction);
}

/// Award a point to `scorer`, ending the match or serving toward the side that conceded
pub fn score_point(
    state: &mut MatchState,
    field: &Playfield,
    config: &MatchConfig,
    scorer: Side,
) {
    match scorer {
        Side::Left => state.left_score += 1,
        Side::Right => state.right_score += 1,
    }
    log::debug!("Point to {:?}: {}-{}", scorer, state.left_score, state.right_score);

    if state.left_score >= config.winning_score {
        state.winner = Some(Side::Left);
    } else if state.right_score >= config.winning_score {
        state.winner = Some(Side::Right);
    }

    if let Some(winner) = state.winner {
        state.ball_pos = field.center();
        state.ball_vel = Vec2::ZERO;
        state.serve_timer = 0.0;
        log::info!(
            "Match over, {:?} wins {}-{}",
            winner,
            state.left_score,
            state.right_score
        );
        return;
    }

    reset_serve(state, field, config, ServeDirection::toward(scorer.opponent()));
}
