//! Deterministic simulation module
//!
//! All gameplay logic lives here as pure integer math:
//! - one `tick` per frame, no wall-clock time
//! - every position is a pixel, every velocity pixels-per-frame
//! - no rendering or hardware dependencies

pub mod body;
pub mod collision;
pub mod input;
pub mod shape;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Response, overlaps, resolve};
pub use input::FrameInput;
pub use shape::{Anchor, Color, Shape, ShapeKind};
pub use state::{BOTTOM, GamePhase, GameState, LEFT, PaddleBounds, RIGHT, TOP, arena_center};
pub use tick::tick;
