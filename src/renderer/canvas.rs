//! Browser backend over `CanvasRenderingContext2d`

use web_sys::CanvasRenderingContext2d;

use super::{Canvas2d, TextStyle};

pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Canvas2d for WebCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_text_baseline(style.baseline.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
