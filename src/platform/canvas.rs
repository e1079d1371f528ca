//! Browser canvas surface (CanvasRenderingContext2d)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::renderer::{FontSize, Surface};

const LINE_WIDTH: f64 = 3.0;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas, or None if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Match the backing store to the given size in pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        // Negative radii throw; nothing to draw anyway
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, anchor: Vec2, text: &str, color: Color, font: FontSize) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.set_font(&format!("{}px VT323, monospace", font.px()));
        self.ctx.set_text_align("center");
        if self
            .ctx
            .fill_text(text, anchor.x as f64, anchor.y as f64)
            .is_err()
        {
            log::warn!("fill_text failed");
        }
    }
}
