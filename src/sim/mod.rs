//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the host:
//! - Time arrives as an explicit `dt`
//! - Randomness comes from a caller-supplied RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_paddle, overlaps_paddle};
pub use state::{InputState, MatchState, Phase, Playfield, ServeDirection, Side};
pub use tick::{launch_ball, reset_match, reset_serve, score_point, tick};
