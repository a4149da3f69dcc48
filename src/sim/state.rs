//! Match state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One side of the court. The human plays left, the AI plays right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Which way the ball travels when it is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeDirection {
    TowardLeft,
    TowardRight,
}

impl ServeDirection {
    /// Horizontal sign of the launch velocity
    pub fn sign(self) -> f32 {
        match self {
            ServeDirection::TowardLeft => -1.0,
            ServeDirection::TowardRight => 1.0,
        }
    }

    /// Serve toward the given side
    pub fn toward(side: Side) -> Self {
        match side {
            Side::Left => ServeDirection::TowardLeft,
            Side::Right => ServeDirection::TowardRight,
        }
    }
}

/// Where the match currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first key press or the start button
    NotStarted,
    /// Ball parked at center, serve timer counting down
    Serving,
    /// Ball in play
    Rallying,
    /// Someone reached the winning score; waits for restart
    MatchOver,
}

impl Phase {
    pub fn of(state: &MatchState, started: bool) -> Self {
        if !started {
            Phase::NotStarted
        } else if state.winner.is_some() {
            Phase::MatchOver
        } else if state.serve_timer > 0.0 || state.ball_vel == Vec2::ZERO {
            Phase::Serving
        } else {
            Phase::Rallying
        }
    }
}

/// Court dimensions and the geometry derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Build from surface dimensions; zero falls back to 800×480
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { DEFAULT_WIDTH } else { width as f32 },
            height: if height == 0 { DEFAULT_HEIGHT } else { height as f32 },
        }
    }

    /// Left paddle x (left edge)
    #[inline]
    pub fn left_x(&self) -> f32 {
        PADDLE_MARGIN
    }

    /// Right paddle x (left edge)
    #[inline]
    pub fn right_x(&self) -> f32 {
        self.width - PADDLE_MARGIN - PADDLE_WIDTH
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest valid paddle top edge
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        (self.height - PADDLE_HEIGHT).max(0.0)
    }

    /// Paddle top edge that centers it vertically
    #[inline]
    pub fn paddle_rest_y(&self) -> f32 {
        self.height / 2.0 - PADDLE_HEIGHT / 2.0
    }

    #[inline]
    pub fn clamp_paddle(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Held movement keys for the human paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn clear(&mut self) {
        self.up = false;
        self.down = false;
    }
}

/// Complete state of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Left paddle top edge
    pub left_y: f32,
    /// Right paddle top edge
    pub right_y: f32,
    /// Ball center
    pub ball_pos: Vec2,
    /// Ball velocity (px/s); zero while serving
    pub ball_vel: Vec2,
    pub left_score: u32,
    pub right_score: u32,
    /// Seconds until launch; zero or below means in play
    pub serve_timer: f32,
    pub serve_direction: ServeDirection,
    /// Set once a side reaches the winning score; cleared only by restart
    pub winner: Option<Side>,
}

impl MatchState {
    /// Fresh state with paddles and ball centered
    pub fn new(field: &Playfield) -> Self {
        Self {
            left_y: field.paddle_rest_y(),
            right_y: field.paddle_rest_y(),
            ball_pos: field.center(),
            ball_vel: Vec2::ZERO,
            left_score: 0,
            right_score: 0,
            serve_timer: 0.0,
            serve_direction: ServeDirection::TowardRight,
            winner: None,
        }
    }

    #[inline]
    pub fn ball_speed(&self) -> f32 {
        self.ball_vel.length()
    }
}
