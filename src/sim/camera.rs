//! Camera following the player
//!
//! The camera chases its target with a one-step proportional pursuit: every tick the
//! velocity is reset to the full offset to the target, so after `update(dt)` the camera
//! has covered `dt` of the remaining distance. This gives a smooth, lagging follow.

use glam::Vec2;

#[derive(Debug, Clone, Default)]
pub struct Camera {
    /// World-space point shown at the centre of the viewport
    pub pos: Vec2,
    pub vel: Vec2,
    /// Viewport size in pixels, refreshed every frame by the driver
    viewport: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.vel = target - self.pos;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Screen pixel -> world point
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        point - self.viewport / 2.0 + self.pos
    }

    /// World point -> screen pixel
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        point - self.pos + self.viewport / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_camera_is_zeroed() {
        let camera = Camera::new();
        assert_eq!(camera.pos, Vec2::ZERO);
        assert_eq!(camera.vel, Vec2::ZERO);
        assert_eq!(camera.viewport(), Vec2::ZERO);
        assert_eq!(camera.to_screen(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let mut camera = Camera::new();
        camera.set_viewport(800.0, 600.0);
        camera.pos = Vec2::new(100.0, -50.0);

        // Centre of the screen is the focus point
        assert_eq!(camera.to_world(Vec2::new(400.0, 300.0)), camera.pos);
        assert_eq!(camera.to_screen(camera.pos), Vec2::new(400.0, 300.0));

        let p = Vec2::new(12.5, 777.0);
        assert!((camera.to_screen(camera.to_world(p)) - p).length() < 1e-4);
    }

    #[test]
    fn test_pursuit_closes_fraction_of_gap() {
        let mut camera = Camera::new();
        camera.set_target(Vec2::new(100.0, 0.0));
        camera.update(0.25);
        assert!((camera.pos.x - 25.0).abs() < 1e-5);

        // Velocity is recomputed from the new position
        camera.set_target(Vec2::new(100.0, 0.0));
        assert!((camera.vel.x - 75.0).abs() < 1e-5);
    }

    #[test]
    fn test_resize_does_not_move_focus() {
        let mut camera = Camera::new();
        camera.pos = Vec2::new(5.0, 5.0);
        camera.set_viewport(640.0, 480.0);
        let before = camera.pos;
        camera.set_viewport(1920.0, 1080.0);
        assert_eq!(camera.pos, before);
        assert_eq!(camera.to_world(Vec2::new(960.0, 540.0)), before);
    }
}
