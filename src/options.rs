//! Host-supplied match options
//!
//! Options arrive as loosely typed numbers from the embedding page. They are
//! normalized into a `MatchConfig`, never rejected.

use serde::{Deserialize, Serialize};

/// Points needed to win when the host gives none
pub const DEFAULT_WINNING_SCORE: f64 = 7.0;
/// Pause before each serve when the host gives none (milliseconds)
pub const DEFAULT_SERVE_DELAY_MS: f64 = 900.0;

/// Raw options as provided by the host page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PongOptions {
    /// Points needed to end the match (floored, at least 1)
    pub winning_score: Option<f64>,
    /// Pause before each serve in milliseconds (at least 0)
    pub serve_delay_ms: Option<f64>,
}

impl PongOptions {
    /// Parse options from JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        if json.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(json) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Ignoring malformed pong options ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

/// Normalized match configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Points needed to end the match
    pub winning_score: u32,
    /// Pause before each serve (seconds)
    pub serve_delay: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::from_options(&PongOptions::default())
    }
}

impl MatchConfig {
    pub fn from_options(options: &PongOptions) -> Self {
        let winning_score = options
            .winning_score
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_WINNING_SCORE)
            .floor()
            .clamp(1.0, u32::MAX as f64) as u32;

        let serve_delay_ms = options
            .serve_delay_ms
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_SERVE_DELAY_MS);

        Self {
            winning_score,
            serve_delay: (serve_delay_ms / 1000.0).max(0.0) as f32,
        }
    }
}
