//! Headless canvas that records what was drawn

use super::{Canvas2d, TextStyle};

/// An owned copy of one draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    Circle { x: f32, y: f32, radius: f32, color: String },
    Text { text: String, x: f32, y: f32, style: TextStyle, color: String },
}

/// Canvas that stores the calls of the most recent frames
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Recorded>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Recorded::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas2d for RecordingCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.calls.push(Recorded::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.calls.push(Recorded::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: &str) {
        self.calls.push(Recorded::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
            color: color.to_string(),
        });
    }
}
