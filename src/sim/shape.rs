//! Drawable geometry: circles and anchored rectangles
//!
//! A shape is a tagged region plus a draw color. Rectangles store one corner
//! (or their center) and resolve to true corner pairs via their anchor, so a
//! wall can be positioned by its top-left while a paddle is positioned by its
//! center.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Monochrome OLED draw color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    /// Flip whatever is under the pixel
    Invert,
}

/// Which point of a rectangle its stored origin refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    BottomLeft,
    Center,
}

/// Shape-specific geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle { radius: i32 },
    Rect { width: i32, height: i32, anchor: Anchor },
}

/// A drawable geometric region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub origin: IVec2,
    pub kind: ShapeKind,
    pub color: Color,
    pub filled: bool,
}

impl Shape {
    /// A filled circle centered on `origin`.
    pub fn circle(origin: IVec2, radius: i32, color: Color) -> Self {
        Self {
            origin,
            kind: ShapeKind::Circle { radius },
            color,
            filled: true,
        }
    }

    /// A filled rectangle; `anchor` says what `origin` points at.
    pub fn rect(origin: IVec2, width: i32, height: i32, anchor: Anchor, color: Color) -> Self {
        Self {
            origin,
            kind: ShapeKind::Rect {
                width,
                height,
                anchor,
            },
            color,
            filled: true,
        }
    }

    pub fn set_origin(&mut self, origin: IVec2) {
        self.origin = origin;
    }

    /// True geometry corners `(top_left, bottom_right)`, unclamped.
    ///
    /// Collision math must see the shape as-is even when it pokes past the
    /// panel edge; only rasterization wants the clipped view.
    pub fn bounds(&self) -> (IVec2, IVec2) {
        match self.kind {
            ShapeKind::Circle { radius } => (
                self.origin - IVec2::splat(radius),
                self.origin + IVec2::splat(radius),
            ),
            ShapeKind::Rect {
                width,
                height,
                anchor,
            } => match anchor {
                Anchor::TopLeft => (self.origin, self.origin + IVec2::new(width, height)),
                Anchor::BottomLeft => (
                    IVec2::new(self.origin.x, self.origin.y - height),
                    IVec2::new(self.origin.x + width, self.origin.y),
                ),
                Anchor::Center => (
                    self.origin - IVec2::new(width / 2, height / 2),
                    self.origin + IVec2::new(width / 2, height / 2),
                ),
            },
        }
    }

    /// Corners clamped to the visible panel, for rasterization only.
    pub fn screen_bounds(&self) -> (IVec2, IVec2) {
        let max = IVec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1);
        let (tl, br) = self.bounds();
        (tl.clamp(IVec2::ZERO, max), br.clamp(IVec2::ZERO, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_anchor_resolves_corners() {
        let r = Shape::rect(IVec2::new(10, 20), 30, 5, Anchor::TopLeft, Color::White);
        assert_eq!(r.bounds(), (IVec2::new(10, 20), IVec2::new(40, 25)));
    }

    #[test]
    fn bottom_left_anchor_resolves_corners() {
        let r = Shape::rect(IVec2::new(10, 20), 30, 5, Anchor::BottomLeft, Color::White);
        assert_eq!(r.bounds(), (IVec2::new(10, 15), IVec2::new(40, 20)));
    }

    #[test]
    fn center_anchor_resolves_corners() {
        let r = Shape::rect(IVec2::new(64, 32), 20, 2, Anchor::Center, Color::White);
        assert_eq!(r.bounds(), (IVec2::new(54, 31), IVec2::new(74, 33)));
    }

    #[test]
    fn circle_bounds_span_the_diameter() {
        let c = Shape::circle(IVec2::new(64, 32), 3, Color::White);
        assert_eq!(c.bounds(), (IVec2::new(61, 29), IVec2::new(67, 35)));
    }

    #[test]
    fn screen_bounds_clip_but_bounds_do_not() {
        let c = Shape::circle(IVec2::new(1, 1), 5, Color::White);
        assert_eq!(c.bounds().0, IVec2::new(-4, -4));
        assert_eq!(c.screen_bounds().0, IVec2::ZERO);

        let r = Shape::rect(IVec2::new(120, 60), 30, 30, Anchor::TopLeft, Color::White);
        assert_eq!(r.bounds().1, IVec2::new(150, 90));
        assert_eq!(r.screen_bounds().1, IVec2::new(127, 63));
    }

    #[test]
    fn degenerate_rect_stays_degenerate() {
        // Zero-size geometry must not panic or invert its corners.
        let r = Shape::rect(IVec2::new(5, 5), 0, 0, Anchor::Center, Color::White);
        assert_eq!(r.bounds(), (IVec2::new(5, 5), IVec2::new(5, 5)));
    }
}
