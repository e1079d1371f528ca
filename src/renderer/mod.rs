//! Rendering module
//!
//! Drawing goes through the [`Surface`] trait: a minimal 2D canvas contract implemented
//! by the browser canvas (see `platform::canvas`) and by [`RecordingSurface`] for
//! headless runs and tests. [`Painter`] sits in front of a surface, mapping world
//! coordinates through the camera and colors through the frame's [`RenderMode`].

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{render_entity, render_game};

use glam::Vec2;

use crate::color::Color;
use crate::consts::SMALL_SCREEN_WIDTH;
use crate::sim::{Camera, RenderMode};

/// Text size tier, picked from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Normal,
}

impl FontSize {
    pub fn for_width(width: f32) -> Self {
        if width < SMALL_SCREEN_WIDTH {
            FontSize::Small
        } else {
            FontSize::Normal
        }
    }

    pub fn px(self) -> u32 {
        match self {
            FontSize::Small => 18,
            FontSize::Normal => 32,
        }
    }
}

/// A 2D drawing target in screen pixels
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Text centred horizontally on `anchor`
    fn fill_text(&mut self, anchor: Vec2, text: &str, color: Color, font: FontSize);
}

/// Camera-aware drawing for one frame
pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
    camera: &'a Camera,
    mode: RenderMode,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut dyn Surface, camera: &'a Camera, mode: RenderMode) -> Self {
        Self {
            surface,
            camera,
            mode,
        }
    }

    pub fn width(&self) -> f32 {
        self.surface.width()
    }

    pub fn height(&self) -> f32 {
        self.surface.height()
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Circle in world space
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let center = self.camera.to_screen(center);
        self.surface
            .fill_circle(center, radius, self.mode.apply(color));
    }

    /// Rectangle in screen space
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.surface.fill_rect(x, y, w, h, self.mode.apply(color));
    }

    /// Rectangle outline in screen space
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.surface.stroke_rect(x, y, w, h, self.mode.apply(color));
    }

    /// Text anchored at a screen point
    pub fn text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        let font = FontSize::for_width(self.surface.width());
        self.surface
            .fill_text(Vec2::new(x, y), text, self.mode.apply(color), font);
    }

    /// Text in the middle of the screen
    pub fn message(&mut self, text: &str, color: Color) {
        let x = self.width() / 2.0;
        let y = self.height() / 2.0 + 5.0;
        self.text(x, y, text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_breakpoint() {
        assert_eq!(FontSize::for_width(639.0), FontSize::Small);
        assert_eq!(FontSize::for_width(640.0), FontSize::Normal);
        assert_eq!(FontSize::Small.px(), 18);
        assert_eq!(FontSize::Normal.px(), 32);
    }

    #[test]
    fn test_painter_maps_world_and_mode() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut camera = Camera::new();
        camera.set_viewport(800.0, 600.0);
        camera.pos = Vec2::new(100.0, 100.0);
        let red = Color::new(1.0, 0.2, 0.4, 0.5);

        {
            let mut painter = Painter::new(&mut surface, &camera, RenderMode::Grayscale);
            painter.fill_circle(Vec2::new(100.0, 100.0), 10.0, red);
            painter.fill_rect(0.0, 0.0, 5.0, 5.0, red);
            painter.text(1.0, 2.0, "x", red);
        }

        let gray = red.grayscale();
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Circle {
                    center: Vec2::new(400.0, 300.0),
                    radius: 10.0,
                    color: gray,
                },
                DrawCommand::FillRect {
                    x: 0.0,
                    y: 0.0,
                    w: 5.0,
                    h: 5.0,
                    color: gray,
                },
                DrawCommand::Text {
                    anchor: Vec2::new(1.0, 2.0),
                    text: "x".to_string(),
                    color: gray,
                    font: FontSize::Normal,
                },
            ]
        );
    }
}
