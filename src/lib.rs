//! Canvas Pong - a single-player Pong match against a simple AI
//!
//! Core modules:
//! - `sim`: Host-independent simulation (paddles, ball, scoring, match flow)
//! - `engine`: Owns one match and drives it from input events and frame ticks
//! - `renderer`: Display list generation and 2D canvas backends
//! - `input`: Keyboard mapping
//! - `options`: Host-supplied configuration
//! - `theme`: Color resolution from the host's style source
//! - `web`: Browser bindings (wasm32 only)

pub mod engine;
pub mod input;
pub mod options;
pub mod renderer;
pub mod sim;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use engine::{Engine, FrameClock, FrameLoop, StartUi};
pub use options::{MatchConfig, PongOptions};
pub use theme::{StyleSource, ThemeColors};

/// Game configuration constants
pub mod consts {
    /// Fallback playfield size when the surface reports zero
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 480.0;

    /// Largest step a single frame may advance the simulation (seconds).
    /// Time beyond this is dropped, not re-simulated.
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 92.0;
    pub const PADDLE_MARGIN: f32 = 26.0;

    /// Human paddle speed (px/s)
    pub const PADDLE_SPEED: f32 = 460.0;
    /// AI paddle speed (px/s)
    pub const AI_SPEED: f32 = 350.0;
    /// AI ignores positional error below this (px)
    pub const AI_DEAD_ZONE: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BASE_BALL_SPEED: f32 = 360.0;
    pub const MAX_BALL_SPEED: f32 = 900.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.05;

    /// Maximum deflection from horizontal after a paddle hit (60°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Serve angle is sampled uniformly in ±this (22.5°)
    pub const MAX_SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_8;
}
