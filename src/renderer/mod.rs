//! 2D rendering
//!
//! A frame is first built as a list of `DrawCommand`s from the match state,
//! then submitted to a `Canvas2d` backend. The browser backend wraps a
//! `CanvasRenderingContext2d`; `RecordingCanvas` keeps the commands for
//! headless runs and tests.

pub mod frame;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{StatusLine, build_frame};
pub use recording::RecordingCanvas;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Center => "center",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// Font and anchoring for a text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// A single drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<'a> {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'a str,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: &'a str,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
        color: &'a str,
    },
}

/// A surface that can execute draw commands
pub trait Canvas2d {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: &str);
}

/// Submit a display list to a canvas, in order
pub fn draw<C: Canvas2d + ?Sized>(canvas: &mut C, commands: &[DrawCommand<'_>]) {
    for command in commands {
        match command {
            DrawCommand::Rect { x, y, w, h, color } => canvas.fill_rect(*x, *y, *w, *h, color),
            DrawCommand::Circle { x, y, radius, color } => {
                canvas.fill_circle(*x, *y, *radius, color)
            }
            DrawCommand::Text {
                text,
                x,
                y,
                style,
                color,
            } => canvas.fill_text(text, *x, *y, style, color),
        }
    }
}
