//! Headless surface that records draw calls

use glam::Vec2;

use super::{FontSize, Surface};
use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        anchor: Vec2,
        text: String,
        color: Color,
        font: FontSize,
    },
}

/// Surface that keeps every command since the last `clear`
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands
            .push(DrawCommand::StrokeRect { x, y, w, h, color });
    }

    fn fill_text(&mut self, anchor: Vec2, text: &str, color: Color, font: FontSize) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.to_string(),
            color,
            font,
        });
    }
}
