//! Kinematic bodies
//!
//! A body couples integer pixel kinematics to exactly one owned shape. The
//! shape's origin tracks the body's position through every move, so drawing
//! and collision always agree on where the thing is.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Response;
use super::shape::Shape;

/// A kinematic entity: position, velocity, one owned shape and a collision
/// response.
///
/// All nine game objects (four walls, four paddles, the ball) are built once
/// at startup and live for the whole run; only position and velocity mutate
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pos: IVec2,
    /// Where the body was before its latest move, for change-driven redraw
    prev_pos: IVec2,
    vel: IVec2,
    /// Reserved; `step` does not integrate it yet
    accel: IVec2,
    shape: Shape,
    response: Response,
    collision_enabled: bool,
}

impl Body {
    /// Build a body at `pos`; the shape is re-anchored there regardless of
    /// the origin it was created with. Collision starts enabled.
    pub fn new(pos: IVec2, vel: IVec2, mut shape: Shape, response: Response) -> Self {
        shape.set_origin(pos);
        Self {
            pos,
            prev_pos: pos,
            vel,
            accel: IVec2::ZERO,
            shape,
            response,
            collision_enabled: true,
        }
    }

    /// Translate by `delta`, keeping the shape origin in lockstep.
    pub fn move_by(&mut self, delta: IVec2) {
        self.prev_pos = self.pos;
        self.pos += delta;
        self.shape.set_origin(self.pos);
    }

    /// Per-frame kinematic update: apply velocity. Acceleration is reserved
    /// and intentionally not integrated here.
    pub fn step(&mut self) {
        self.move_by(self.vel);
    }

    pub fn set_position(&mut self, pos: IVec2) {
        self.prev_pos = self.pos;
        self.pos = pos;
        self.shape.set_origin(pos);
    }

    pub fn set_velocity(&mut self, vel: IVec2) {
        self.vel = vel;
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
    }

    pub fn position(&self) -> IVec2 {
        self.pos
    }

    pub fn previous_position(&self) -> IVec2 {
        self.prev_pos
    }

    pub fn velocity(&self) -> IVec2 {
        self.vel
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn response(&self) -> Response {
        self.response
    }

    pub fn collision_enabled(&self) -> bool {
        self.collision_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Color;

    fn ball_at(pos: IVec2, vel: IVec2) -> Body {
        Body::new(pos, vel, Shape::circle(IVec2::ZERO, 3, Color::White), Response::Bounce)
    }

    #[test]
    fn shape_origin_tracks_position() {
        let mut b = ball_at(IVec2::new(64, 32), IVec2::new(2, 1));
        assert_eq!(b.shape().origin, IVec2::new(64, 32));

        b.move_by(IVec2::new(-4, 6));
        assert_eq!(b.position(), IVec2::new(60, 38));
        assert_eq!(b.shape().origin, b.position());

        b.set_position(IVec2::new(1, 1));
        assert_eq!(b.shape().origin, IVec2::new(1, 1));
    }

    #[test]
    fn step_applies_velocity_once() {
        let mut b = ball_at(IVec2::new(10, 10), IVec2::new(2, -1));
        b.step();
        assert_eq!(b.position(), IVec2::new(12, 9));
        // Acceleration is reserved: velocity is unchanged by step.
        assert_eq!(b.velocity(), IVec2::new(2, -1));
    }

    #[test]
    fn previous_position_records_the_last_move() {
        let mut b = ball_at(IVec2::new(10, 10), IVec2::new(2, 1));
        b.step();
        assert_eq!(b.previous_position(), IVec2::new(10, 10));
        assert_eq!(b.previous_position() + b.velocity(), b.position());
    }
}
