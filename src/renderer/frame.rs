//! Frame composition
//!
//! Every frame is redrawn from scratch: background, center line, paddles,
//! ball, score and one status line.

use super::{DrawCommand, TextAlign, TextBaseline, TextStyle};
use crate::consts::*;
use crate::sim::{MatchState, Phase, Playfield, Side};
use crate::theme::ThemeColors;

const SCORE_STYLE: TextStyle = TextStyle {
    font: "700 46px \"Geist Mono Local\", \"Geist Mono\", ui-monospace",
    align: TextAlign::Center,
    baseline: TextBaseline::Top,
};

const STATUS_STYLE: TextStyle = TextStyle {
    font: "500 18px \"Geist Mono Local\", \"Geist Mono\", ui-monospace",
    align: TextAlign::Center,
    baseline: TextBaseline::Bottom,
};

/// Distance of score and status text from the top/bottom edge
const TEXT_INSET: f32 = 18.0;

/// Center line dash geometry
const DASH_START: f32 = 14.0;
const DASH_SPACING: f32 = 24.0;
const DASH_WIDTH: f32 = 4.0;
const DASH_LENGTH: f32 = 12.0;

/// Contextual hint shown at the bottom of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    PressToStart,
    Winner(Side),
    GetReady,
    Hidden,
}

impl StatusLine {
    /// Pick the hint for a match (start prompt beats winner beats serve).
    /// "Get ready" only shows while the serve countdown is running.
    pub fn for_match(state: &MatchState, started: bool) -> Self {
        match (Phase::of(state, started), state.winner) {
            (Phase::NotStarted, _) => StatusLine::PressToStart,
            (Phase::MatchOver, Some(side)) => StatusLine::Winner(side),
            (Phase::Serving, _) if state.serve_timer > 0.0 => StatusLine::GetReady,
            _ => StatusLine::Hidden,
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            StatusLine::PressToStart => Some("Press W/S or \u{2191}/\u{2193} to start"),
            StatusLine::Winner(Side::Left) => Some("You win! Press R to restart"),
            StatusLine::Winner(Side::Right) => Some("CPU wins! Press R to restart"),
            StatusLine::GetReady => Some("Get ready..."),
            StatusLine::Hidden => None,
        }
    }
}

/// Build the display list for one frame
pub fn build_frame<'a>(
    state: &MatchState,
    status: StatusLine,
    field: &Playfield,
    colors: &'a ThemeColors,
) -> Vec<DrawCommand<'a>> {
    let mut commands = Vec::with_capacity(32);
    let mid_x = field.width / 2.0;

    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        w: field.width,
        h: field.height,
        color: &colors.background,
    });

    let mut y = DASH_START;
    while y < field.height {
        commands.push(DrawCommand::Rect {
            x: mid_x - DASH_WIDTH / 2.0,
            y,
            w: DASH_WIDTH,
            h: DASH_LENGTH,
            color: &colors.line,
        });
        y += DASH_SPACING;
    }

    for (x, y) in [
        (field.left_x(), state.left_y),
        (field.right_x(), state.right_y),
    ] {
        commands.push(DrawCommand::Rect {
            x,
            y,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
            color: &colors.foreground,
        });
    }

    commands.push(DrawCommand::Circle {
        x: state.ball_pos.x,
        y: state.ball_pos.y,
        radius: BALL_RADIUS,
        color: &colors.accent,
    });

    commands.push(DrawCommand::Text {
        text: format!("{}   {}", state.left_score, state.right_score),
        x: mid_x,
        y: TEXT_INSET,
        style: SCORE_STYLE,
        color: &colors.foreground,
    });

    if let Some(text) = status.text() {
        commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: mid_x,
            y: field.height - TEXT_INSET,
            style: STATUS_STYLE,
            color: &colors.foreground,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RecordingCanvas, draw, recording::Recorded};

    fn frame_for(status: StatusLine) -> RecordingCanvas {
        let field = Playfield::new(800, 480);
        let mut state = MatchState::new(&field);
        state.left_score = 3;
        state.right_score = 5;
        let colors = ThemeColors::default();

        let mut canvas = RecordingCanvas::new();
        draw(&mut canvas, &build_frame(&state, status, &field, &colors));
        canvas
    }

    #[test]
    fn test_frame_starts_with_background() {
        let canvas = frame_for(StatusLine::Hidden);
        assert_eq!(
            canvas.calls[0],
            Recorded::Rect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 480.0,
                color: "#12161f".to_string(),
            }
        );
    }

    #[test]
    fn test_center_line_dashes() {
        let canvas = frame_for(StatusLine::Hidden);
        let dashes: Vec<_> = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Recorded::Rect { color, .. } if color == "#2a3444"))
            .collect();
        // y = 14, 38, ..., 470
        assert_eq!(dashes.len(), 20);
        assert!(matches!(dashes[0], Recorded::Rect { x, y, .. } if *x == 398.0 && *y == 14.0));
    }

    #[test]
    fn test_score_and_ball_drawn() {
        let canvas = frame_for(StatusLine::Hidden);
        assert_eq!(canvas.texts(), vec!["3   5"]);
        assert!(canvas.calls.iter().any(|c| matches!(
            c,
            Recorded::Circle { x, y, radius, .. } if *x == 400.0 && *y == 240.0 && *radius == BALL_RADIUS
        )));
    }

    #[test]
    fn test_status_line_text() {
        let canvas = frame_for(StatusLine::PressToStart);
        assert_eq!(canvas.texts()[1], "Press W/S or \u{2191}/\u{2193} to start");

        let canvas = frame_for(StatusLine::Winner(Side::Right));
        assert_eq!(canvas.texts()[1], "CPU wins! Press R to restart");

        let canvas = frame_for(StatusLine::GetReady);
        let last = canvas.calls.last().cloned();
        assert!(matches!(
            last,
            Some(Recorded::Text { y, style, .. }) if y == 462.0 && style.baseline == TextBaseline::Bottom
        ));
    }

    #[test]
    fn test_status_priority() {
        let field = Playfield::default();
        let mut state = MatchState::new(&field);
        state.serve_timer = 0.9;
        assert_eq!(StatusLine::for_match(&state, true), StatusLine::GetReady);

        state.ball_vel = glam::Vec2::new(360.0, 0.0);
        state.serve_timer = 0.0;
        assert_eq!(StatusLine::for_match(&state, true), StatusLine::Hidden);

        state.winner = Some(Side::Left);
        assert_eq!(StatusLine::for_match(&state, true), StatusLine::Winner(Side::Left));
        assert_eq!(StatusLine::for_match(&state, false), StatusLine::PressToStart);
    }

    #[test]
    fn test_parked_ball_without_countdown_hides_status() {
        // Zero serve delay: ball is parked but launches next tick
        let field = Playfield::default();
        let state = MatchState::new(&field);
        assert_eq!(state.serve_timer, 0.0);
        assert_eq!(Phase::of(&state, true), Phase::Serving);
        assert_eq!(StatusLine::for_match(&state, true), StatusLine::Hidden);
    }
}
