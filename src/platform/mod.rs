//! Hardware abstraction layer
//!
//! The core never touches SPI, GPIO or the ADC. The embedding firmware
//! implements these two traits and calls [`crate::run_frame`] once per
//! iteration of its main loop. Both traits are deliberately narrow: the game
//! assigns no meaning to pixel format, page addressing or debounce strategy.

use crate::sim::{Color, Shape};

/// Digital inputs the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Start / pause / resume
    Primary,
    /// Paddle speed boost (stick press)
    Boost,
}

/// Analog axes the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Joystick and buttons. Sampled exactly once per frame; reads have no side
/// effects.
pub trait InputDevice {
    /// Current debounced level of a button (true = pressed)
    fn button(&self, button: Button) -> bool;

    /// Raw 12-bit sample for an axis (0-4095, ~2048 at rest)
    fn axis(&self, axis: Axis) -> u16;
}

/// The display driver. The core only ever asks it to rasterize shapes and
/// glyphs and to flip the frame; packing and transport are its business.
pub trait Display {
    /// Erase the working framebuffer
    fn clear(&mut self);

    /// Rasterize one shape into the framebuffer
    fn draw_shape(&mut self, shape: &Shape);

    /// Draw a text string; `scale` is the glyph size multiplier
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color, scale: u8);

    /// Draw an unsigned number (score, countdown digit)
    fn draw_number(&mut self, x: i32, y: i32, value: u16, color: Color, scale: u8);

    /// Invert every pixel of the panel (game-over flash effect)
    fn set_inverted(&mut self, inverted: bool);

    /// Push the framebuffer to the panel
    fn present(&mut self);
}
