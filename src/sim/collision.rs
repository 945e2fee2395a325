//! Collision detection and response
//!
//! Detection is a pure, symmetric predicate over the shape-kind pair of two
//! bodies; response is a closed set of behaviors dispatched only after a
//! confirmed contact. Distance squares accumulate in i64 so radius sums near
//! the panel diagonal cannot overflow.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::shape::ShapeKind;

/// What a body does to itself when something touches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Reflect one velocity axis, picked from the contact orientation
    Bounce,
    /// Immovable: ignore the contact (walls, paddles)
    Stay,
}

/// Pure contact predicate. Symmetric in its arguments; false when either side
/// has collision disabled. Never mutates anything.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    if !a.collision_enabled() || !b.collision_enabled() {
        return false;
    }
    match (a.shape().kind, b.shape().kind) {
        (ShapeKind::Circle { radius: r1 }, ShapeKind::Circle { radius: r2 }) => {
            circle_circle(a.position(), r1, b.position(), r2)
        }
        (ShapeKind::Circle { radius }, ShapeKind::Rect { .. }) => {
            circle_rect(a.position(), radius, b)
        }
        (ShapeKind::Rect { .. }, ShapeKind::Circle { radius }) => {
            circle_rect(b.position(), radius, a)
        }
        (ShapeKind::Rect { .. }, ShapeKind::Rect { .. }) => rect_rect(a, b),
    }
}

fn dist_sq(d: IVec2) -> i64 {
    let (dx, dy) = (d.x as i64, d.y as i64);
    dx * dx + dy * dy
}

fn circle_circle(c1: IVec2, r1: i32, c2: IVec2, r2: i32) -> bool {
    let radius_sum = (r1 + r2) as i64;
    dist_sq(c1 - c2) <= radius_sum * radius_sum
}

fn circle_rect(center: IVec2, radius: i32, rect: &Body) -> bool {
    let (tl, br) = rect.shape().bounds();
    // Closest point on the box to the circle center; covers edge and corner
    // contact uniformly.
    let closest = center.clamp(tl, br);
    dist_sq(center - closest) <= (radius as i64) * (radius as i64)
}

fn rect_rect(a: &Body, b: &Body) -> bool {
    let (tl1, br1) = a.shape().bounds();
    let (tl2, br2) = b.shape().bounds();
    // Closed intervals: rectangles that merely touch at an edge count as
    // contact.
    !(br1.x < tl2.x || tl1.x > br2.x || br1.y < tl2.y || tl1.y > br2.y)
}

/// Contact test plus response dispatch: when the bodies touch, each side
/// reacts to a snapshot of the other. Returns whether contact occurred.
pub fn resolve(a: &mut Body, b: &mut Body) -> bool {
    if !overlaps(a, b) {
        return false;
    }
    let (a_pos, a_kind) = (a.position(), a.shape().kind);
    let (b_pos, b_kind) = (b.position(), b.shape().kind);
    respond(a, b_pos, b_kind);
    respond(b, a_pos, a_kind);
    true
}

fn respond(body: &mut Body, other_pos: IVec2, other_kind: ShapeKind) {
    match body.response() {
        Response::Stay => {}
        Response::Bounce => {
            let vel = body.velocity();
            let flipped = match other_kind {
                // A tall rectangle is a side obstacle: reflect X. A wide one
                // is a top/bottom obstacle: reflect Y. The shape's aspect
                // carries the orientation, not its position on the panel.
                ShapeKind::Rect { width, height, .. } => {
                    if height > width {
                        IVec2::new(-vel.x, vel.y)
                    } else {
                        IVec2::new(vel.x, -vel.y)
                    }
                }
                // Against a circle, reflect the head-on axis: the one with
                // the larger center-to-center separation.
                ShapeKind::Circle { .. } => {
                    let d = body.position() - other_pos;
                    if d.x.abs() > d.y.abs() {
                        IVec2::new(-vel.x, vel.y)
                    } else {
                        IVec2::new(vel.x, -vel.y)
                    }
                }
            };
            body.set_velocity(flipped);
        }
    }
}
