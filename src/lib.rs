//! Paddle Panic - a four-paddle arena Pong core
//!
//! One joystick drives four paddles at once around a rectangular arena on a
//! 128x64 monochrome OLED; a ball bounces among them, scoring a point per
//! paddle hit, until it escapes through a wall.
//!
//! Core modules:
//! - `sim`: deterministic simulation (shapes, physics, collisions, game phases)
//! - `platform`: traits the embedding firmware implements (input device,
//!   display driver)
//! - `render`: draws the current game state through the `Display` trait
//!
//! The crate is the hardware-independent half of the game: everything here is
//! bounded integer math in pixels and pixels-per-frame. SPI transactions, ADC
//! channel selection and glyph tables all live behind the `platform` traits.

pub mod platform;
pub mod render;
pub mod sim;

pub use platform::{Axis, Button, Display, InputDevice};
pub use sim::{FrameInput, GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Panel dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Arena geometry
    pub const WALL_THICKNESS: i32 = 2;
    pub const PADDLE_LENGTH: i32 = 20;
    pub const PADDLE_WIDTH: i32 = 2;
    /// Gap between a wall and the paddle guarding it
    pub const PADDLE_MARGIN: i32 = 3;
    pub const BALL_RADIUS: i32 = 3;

    /// Raw 12-bit ADC midpoint (stick at rest)
    pub const ADC_CENTER: i32 = 2048;
    /// Raw band around center collapsed to exactly zero
    pub const JOYSTICK_DEADZONE: i32 = 10;

    /// Paddle speed cap (pixels per frame)
    pub const MAX_PADDLE_SPEED: i32 = 8;
    /// Target-velocity multiplier while the boost button is held
    pub const PADDLE_BOOST_MULTIPLIER: i32 = 2;
    /// Hard cap on the boosted target
    pub const BOOSTED_SPEED_LIMIT: i32 = MAX_PADDLE_SPEED * PADDLE_BOOST_MULTIPLIER;
    /// Velocity step toward the target per frame (never overshoots)
    pub const PADDLE_ACCELERATION: i32 = 1;

    /// Speed curve breakpoints at 25% / 75% of full deflection (0-2048 scale)
    pub const DEFLECTION_LOW: i32 = 512;
    pub const DEFLECTION_MID: i32 = 1536;
    pub const DEFLECTION_FULL: i32 = 2048;
    /// Speeds the curve reaches at each breakpoint (pixels per frame)
    pub const SPEED_LOW: i32 = 2;
    pub const SPEED_MID: i32 = 4;
    pub const SPEED_HIGH: i32 = 8;

    /// Frames a paddle stays un-scorable after a hit (anti-trapping)
    pub const PADDLE_COOLDOWN_FRAMES: u8 = 8;
    /// Unpause countdown length (~3 seconds at the panel's ~12 fps)
    pub const COUNTDOWN_FRAMES: u8 = 36;
    /// Display-inversion flash length on entering game over
    pub const GAME_OVER_FLASH_FRAMES: u8 = 4;
}

/// Advance the game by one frame: sample the input device once, tick the
/// simulation, redraw.
///
/// The firmware main loop calls this once per iteration and owns all timing;
/// the core performs no rate limiting of its own.
pub fn run_frame<I, D>(state: &mut GameState, input: &I, display: &mut D)
where
    I: InputDevice,
    D: Display,
{
    let frame = FrameInput::sample(input);
    sim::tick(state, &frame);

    // Game-over flash: invert the whole panel while the timer runs.
    display.set_inverted(state.flash_ticks > 0);
    display.clear();
    render::draw_frame(state, display);
    display.present();
}
