//! Joystick-to-paddle-motion pipeline
//!
//! A raw 12-bit sample becomes a paddle velocity through a fixed chain:
//! center-relative normalize, deadzone, three-segment speed curve, optional
//! boost, then a bounded step of the live velocity toward the target. Every
//! stage clamps its output, so no intermediate value can escape its range.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::{Axis, Button, InputDevice};

/// One frame's worth of raw input. Sampled once per frame and passed through
/// the whole tick unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Raw 12-bit X axis sample (0-4095)
    pub raw_x: u16,
    /// Raw 12-bit Y axis sample (0-4095)
    pub raw_y: u16,
    /// Primary button level (start / pause / resume)
    pub primary: bool,
    /// Boost button level
    pub boost: bool,
}

impl Default for FrameInput {
    /// Stick centered, nothing pressed.
    fn default() -> Self {
        Self {
            raw_x: ADC_CENTER as u16,
            raw_y: ADC_CENTER as u16,
            primary: false,
            boost: false,
        }
    }
}

impl FrameInput {
    /// Capture the device state for this frame.
    pub fn sample(device: &impl InputDevice) -> Self {
        Self {
            raw_x: device.axis(Axis::X),
            raw_y: device.axis(Axis::Y),
            primary: device.button(Button::Primary),
            boost: device.button(Button::Boost),
        }
    }
}

/// Signed offset of a raw sample from the stick's center, with the deadzone
/// band collapsed to exactly zero so idle jitter never reads as motion.
pub fn normalize_axis(raw: u16) -> i32 {
    let delta = raw as i32 - ADC_CENTER;
    if delta.abs() < JOYSTICK_DEADZONE {
        0
    } else {
        delta
    }
}

/// Map a normalized deflection to a target speed through the three-segment
/// curve. The slope rises with deflection: fine control near center, fast
/// response at the rails. Sign is restored after the magnitude mapping.
pub fn target_speed(normalized: i32) -> i32 {
    let sign = if normalized < 0 { -1 } else { 1 };
    let mag = normalized.abs();

    let speed = if mag < DEFLECTION_LOW {
        mag * SPEED_LOW / DEFLECTION_LOW
    } else if mag < DEFLECTION_MID {
        SPEED_LOW + (mag - DEFLECTION_LOW) * (SPEED_MID - SPEED_LOW) / (DEFLECTION_MID - DEFLECTION_LOW)
    } else {
        SPEED_MID + (mag - DEFLECTION_MID) * (SPEED_HIGH - SPEED_MID) / (DEFLECTION_FULL - DEFLECTION_MID)
    };

    speed.min(MAX_PADDLE_SPEED) * sign
}

/// Double the target while boost is held, re-clamped so later stages always
/// see a bounded value.
pub fn boosted(target: i32, boost_held: bool) -> i32 {
    if boost_held {
        (target * PADDLE_BOOST_MULTIPLIER).clamp(-BOOSTED_SPEED_LIMIT, BOOSTED_SPEED_LIMIT)
    } else {
        target
    }
}

/// Step `current` toward `target` by at most one acceleration increment,
/// never overshooting.
pub fn approach(current: i32, target: i32) -> i32 {
    if current < target {
        (current + PADDLE_ACCELERATION).min(target)
    } else if current > target {
        (current - PADDLE_ACCELERATION).max(target)
    } else {
        current
    }
}

/// Full per-axis pipeline: raw sample to this frame's target velocity. The
/// axis is sign-inverted so stick direction matches paddle direction on the
/// panel.
pub fn axis_target(raw: u16, boost_held: bool) -> i32 {
    boosted(target_speed(-normalize_axis(raw)), boost_held)
}
