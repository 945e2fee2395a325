//! Aggregate game state
//!
//! Everything the game mutates frame to frame lives here: the nine bodies,
//! the phase machine bookkeeping, and the paddle travel bounds derived once
//! from the arena geometry. No globals: the whole state is passed by
//! reference into `tick` and the renderer.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::body::Body;
use super::collision::Response;
use super::shape::{Anchor, Color, Shape};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Title,
    /// Ball at rest at arena center, waiting for launch
    Serve,
    /// Ball in flight
    Playing,
    /// Frozen mid-round; ball velocity parked in `paused_ball_vel`
    Paused,
    /// Unpause countdown running
    Countdown,
    /// Round ended by a wall hit
    GameOver,
}

/// Wall/paddle array indices
pub const TOP: usize = 0;
pub const BOTTOM: usize = 1;
pub const LEFT: usize = 2;
pub const RIGHT: usize = 3;

/// Center of the arena (and the ball's serve position)
pub fn arena_center() -> IVec2 {
    IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2)
}

/// Paddle rest positions and travel ranges, derived once from the arena
/// geometry so that adjacent paddles can never overlap, even both at the end
/// of their travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleBounds {
    /// Fixed Y of the top and bottom paddles
    pub lane_y: [i32; 2],
    /// Fixed X of the left and right paddles
    pub lane_x: [i32; 2],
    /// X travel range (inclusive) for the top/bottom paddles
    pub travel_x: (i32, i32),
    /// Y travel range (inclusive) for the left/right paddles
    pub travel_y: (i32, i32),
}

impl PaddleBounds {
    fn derive() -> Self {
        let top_y = WALL_THICKNESS + PADDLE_MARGIN + PADDLE_WIDTH / 2;
        let bottom_y = SCREEN_HEIGHT - 1 - WALL_THICKNESS - PADDLE_MARGIN - PADDLE_WIDTH / 2;
        let left_x = WALL_THICKNESS + PADDLE_MARGIN + PADDLE_WIDTH / 2;
        let right_x = SCREEN_WIDTH - 1 - WALL_THICKNESS - PADDLE_MARGIN - PADDLE_WIDTH / 2;

        // Horizontal paddles stop short of the vertical pair's lanes, and
        // vice versa.
        let h_min = left_x + PADDLE_WIDTH / 2 + PADDLE_LENGTH / 2;
        let h_max = right_x - PADDLE_WIDTH / 2 - PADDLE_LENGTH / 2;
        let v_min = top_y + PADDLE_WIDTH / 2 + PADDLE_LENGTH / 2;
        let v_max = bottom_y - PADDLE_WIDTH / 2 - PADDLE_LENGTH / 2;

        Self {
            lane_y: [top_y, bottom_y],
            lane_x: [left_x, right_x],
            travel_x: (h_min, h_max),
            travel_y: (v_min, v_max),
        }
    }
}

/// Complete game state. Built once at power-on; every field mutates in place
/// from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Top, bottom, left, right arena walls
    pub walls: [Body; 4],
    /// Top, bottom, left, right paddles
    pub paddles: [Body; 4],
    pub ball: Body,
    pub bounds: PaddleBounds,
    pub phase: GamePhase,
    pub score: u16,
    /// Score frozen at the moment the round ended
    pub final_score: u16,
    /// Per-paddle frames until it can score again
    pub cooldowns: [u8; 4],
    /// Velocity shared by the paddle pairs: x drives top/bottom, y drives
    /// left/right
    pub paddle_vel: IVec2,
    /// Ball velocity parked while paused
    pub paused_ball_vel: IVec2,
    pub countdown_ticks: u8,
    /// Display-inversion frames remaining after a wall hit
    pub flash_ticks: u8,
    /// Primary button level last frame, for rising-edge detection
    pub button_was_down: bool,
}

impl GameState {
    /// Build the arena: four walls flush with the panel edges, four centered
    /// paddles one margin in from their walls, and the ball at rest in the
    /// middle.
    pub fn new() -> Self {
        let bounds = PaddleBounds::derive();
        let center = arena_center();

        let wall = |pos: IVec2, w: i32, h: i32| {
            Body::new(
                pos,
                IVec2::ZERO,
                Shape::rect(IVec2::ZERO, w, h, Anchor::TopLeft, Color::White),
                Response::Stay,
            )
        };
        let walls = [
            wall(IVec2::new(0, 0), SCREEN_WIDTH, WALL_THICKNESS),
            wall(
                IVec2::new(0, SCREEN_HEIGHT - WALL_THICKNESS),
                SCREEN_WIDTH,
                WALL_THICKNESS,
            ),
            wall(IVec2::new(0, 0), WALL_THICKNESS, SCREEN_HEIGHT),
            wall(
                IVec2::new(SCREEN_WIDTH - WALL_THICKNESS, 0),
                WALL_THICKNESS,
                SCREEN_HEIGHT,
            ),
        ];

        let paddle = |pos: IVec2, w: i32, h: i32| {
            Body::new(
                pos,
                IVec2::ZERO,
                Shape::rect(IVec2::ZERO, w, h, Anchor::Center, Color::White),
                Response::Stay,
            )
        };
        let paddles = [
            paddle(
                IVec2::new(center.x, bounds.lane_y[0]),
                PADDLE_LENGTH,
                PADDLE_WIDTH,
            ),
            paddle(
                IVec2::new(center.x, bounds.lane_y[1]),
                PADDLE_LENGTH,
                PADDLE_WIDTH,
            ),
            paddle(
                IVec2::new(bounds.lane_x[0], center.y),
                PADDLE_WIDTH,
                PADDLE_LENGTH,
            ),
            paddle(
                IVec2::new(bounds.lane_x[1], center.y),
                PADDLE_WIDTH,
                PADDLE_LENGTH,
            ),
        ];

        let ball = Body::new(
            center,
            IVec2::ZERO,
            Shape::circle(IVec2::ZERO, BALL_RADIUS, Color::White),
            Response::Bounce,
        );

        Self {
            walls,
            paddles,
            ball,
            bounds,
            phase: GamePhase::Title,
            score: 0,
            final_score: 0,
            cooldowns: [0; 4],
            paddle_vel: IVec2::ZERO,
            paused_ball_vel: IVec2::ZERO,
            countdown_ticks: 0,
            flash_ticks: 0,
            button_was_down: false,
        }
    }

    /// Put the ball back at rest in the center and clear round bookkeeping.
    pub(crate) fn reset_round(&mut self) {
        self.score = 0;
        self.cooldowns = [0; 4];
        self.ball.set_position(arena_center());
        self.ball.set_velocity(IVec2::ZERO);
    }

    /// Digit shown during the unpause countdown: thresholds split the timer
    /// into three equal bands.
    pub fn countdown_digit(&self) -> u8 {
        if self.countdown_ticks > COUNTDOWN_FRAMES * 2 / 3 {
            3
        } else if self.countdown_ticks > COUNTDOWN_FRAMES / 3 {
            2
        } else {
            1
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_body_starts_with_shape_on_position() {
        let state = GameState::new();
        for body in state.walls.iter().chain(&state.paddles).chain([&state.ball]) {
            assert_eq!(body.shape().origin, body.position());
        }
    }

    #[test]
    fn paddles_sit_one_margin_inside_their_walls() {
        let state = GameState::new();
        assert_eq!(state.bounds.lane_y[0], 6);
        assert_eq!(state.bounds.lane_y[1], 57);
        assert_eq!(state.bounds.lane_x[0], 6);
        assert_eq!(state.bounds.lane_x[1], 121);
    }

    #[test]
    fn travel_ranges_keep_adjacent_paddles_apart() {
        let mut state = GameState::new();
        let (h_min, h_max) = state.bounds.travel_x;
        let (v_min, v_max) = state.bounds.travel_y;
        assert_eq!((h_min, h_max), (17, 110));
        assert_eq!((v_min, v_max), (17, 46));

        // Worst case: top paddle hard left, left paddle hard up. At the
        // travel limits they may abut edge-to-edge but never interpenetrate.
        state.paddles[TOP].set_position(IVec2::new(h_min, state.bounds.lane_y[0]));
        state.paddles[LEFT].set_position(IVec2::new(state.bounds.lane_x[0], v_min));
        let (top_tl, _) = state.paddles[TOP].shape().bounds();
        let (_, left_br) = state.paddles[LEFT].shape().bounds();
        assert!(left_br.x <= top_tl.x);
    }

    #[test]
    fn ball_serves_from_the_arena_center() {
        let state = GameState::new();
        assert_eq!(state.ball.position(), IVec2::new(64, 32));
        assert_eq!(state.ball.velocity(), IVec2::ZERO);
    }

    #[test]
    fn countdown_digit_bands() {
        let mut state = GameState::new();
        state.countdown_ticks = COUNTDOWN_FRAMES;
        assert_eq!(state.countdown_digit(), 3);
        state.countdown_ticks = 25;
        assert_eq!(state.countdown_digit(), 3);
        state.countdown_ticks = 24;
        assert_eq!(state.countdown_digit(), 2);
        state.countdown_ticks = 13;
        assert_eq!(state.countdown_digit(), 2);
        state.countdown_ticks = 12;
        assert_eq!(state.countdown_digit(), 1);
        state.countdown_ticks = 1;
        assert_eq!(state.countdown_digit(), 1);
    }
}
