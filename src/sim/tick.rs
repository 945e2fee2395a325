//! Per-frame update
//!
//! One call per frame: re-derive paddle motion from the stick, then run the
//! active phase's logic. Phase changes ride on the rising edge of the primary
//! button; the unpause countdown is the only timer-driven transition.

use glam::IVec2;

use crate::consts::*;

use super::collision::{overlaps, resolve};
use super::input::{self, FrameInput};
use super::state::{BOTTOM, GamePhase, GameState, LEFT, RIGHT, TOP};

/// Serve directions: speed-2-ish vectors that skirt the pure horizontals and
/// verticals, so every launch crosses paddle lanes on both axes.
const DIRECTIONS: [IVec2; 8] = [
    IVec2::new(2, 1),
    IVec2::new(1, 2),
    IVec2::new(-1, 2),
    IVec2::new(-2, 1),
    IVec2::new(-2, -1),
    IVec2::new(-1, -2),
    IVec2::new(1, -2),
    IVec2::new(2, -1),
];

/// Pick a serve direction from joystick ADC noise: the raw sample masked to a
/// 3-bit table index.
fn launch_direction(seed: u16) -> IVec2 {
    DIRECTIONS[(seed & 0x07) as usize]
}

/// Advance the game by one frame.
pub fn tick(state: &mut GameState, input: &FrameInput) {
    let edge = input.primary && !state.button_was_down;

    // Title and game over leave the paddles alone entirely; every other
    // phase keeps them under stick control.
    let paddles_active = matches!(
        state.phase,
        GamePhase::Serve | GamePhase::Playing | GamePhase::Paused | GamePhase::Countdown
    );
    if paddles_active {
        move_paddles(state, input);
    }

    match state.phase {
        GamePhase::Title => {
            if edge {
                state.reset_round();
                state.phase = GamePhase::Serve;
                log::info!("game start");
            }
        }
        GamePhase::Serve => {
            if edge {
                // Joystick ADC noise is the entropy source for the serve.
                let vel = launch_direction(input.raw_x);
                state.ball.set_velocity(vel);
                state.phase = GamePhase::Playing;
                log::info!("serve: launch velocity ({}, {})", vel.x, vel.y);
            }
        }
        GamePhase::Playing => {
            if edge {
                state.paused_ball_vel = state.ball.velocity();
                state.ball.set_velocity(IVec2::ZERO);
                state.phase = GamePhase::Paused;
                log::info!("paused at score {}", state.score);
            } else {
                step_ball(state);
            }
        }
        GamePhase::Paused => {
            if edge {
                state.countdown_ticks = COUNTDOWN_FRAMES;
                state.phase = GamePhase::Countdown;
            }
        }
        GamePhase::Countdown => {
            state.countdown_ticks = state.countdown_ticks.saturating_sub(1);
            if state.countdown_ticks == 0 {
                state.ball.set_velocity(state.paused_ball_vel);
                state.phase = GamePhase::Playing;
                log::info!("resumed");
            }
        }
        GamePhase::GameOver => {
            state.flash_ticks = state.flash_ticks.saturating_sub(1);
            if edge {
                state.flash_ticks = 0;
                state.phase = GamePhase::Title;
            }
        }
    }

    state.button_was_down = input.primary;

    // Cooldowns drain every frame no matter the phase.
    for cd in &mut state.cooldowns {
        *cd = cd.saturating_sub(1);
    }
}

/// Re-derive the shared paddle velocity from the stick and advance all four
/// paddles, clamped into their overlap-free travel ranges.
fn move_paddles(state: &mut GameState, input: &FrameInput) {
    let target_x = input::axis_target(input.raw_x, input.boost);
    let target_y = input::axis_target(input.raw_y, input.boost);
    state.paddle_vel.x = input::approach(state.paddle_vel.x, target_x);
    state.paddle_vel.y = input::approach(state.paddle_vel.y, target_y);

    // Top/bottom track the X axis, left/right track Y.
    state.paddles[TOP].set_velocity(IVec2::new(state.paddle_vel.x, 0));
    state.paddles[BOTTOM].set_velocity(IVec2::new(state.paddle_vel.x, 0));
    state.paddles[LEFT].set_velocity(IVec2::new(0, state.paddle_vel.y));
    state.paddles[RIGHT].set_velocity(IVec2::new(0, state.paddle_vel.y));

    for paddle in &mut state.paddles {
        paddle.step();
    }

    let (h_min, h_max) = state.bounds.travel_x;
    for idx in [TOP, BOTTOM] {
        let pos = state.paddles[idx].position();
        let clamped = IVec2::new(pos.x.clamp(h_min, h_max), pos.y);
        if clamped != pos {
            state.paddles[idx].set_position(clamped);
        }
    }
    let (v_min, v_max) = state.bounds.travel_y;
    for idx in [LEFT, RIGHT] {
        let pos = state.paddles[idx].position();
        let clamped = IVec2::new(pos.x, pos.y.clamp(v_min, v_max));
        if clamped != pos {
            state.paddles[idx].set_position(clamped);
        }
    }
}

/// One flight frame: move the ball, score paddle hits, end the round on any
/// wall contact.
fn step_ball(state: &mut GameState) {
    state.ball.step();

    // Paddles first; a corner can legitimately hit two in the same frame.
    for i in 0..4 {
        if state.cooldowns[i] == 0 && resolve(&mut state.ball, &mut state.paddles[i]) {
            state.score += 1;
            state.cooldowns[i] = PADDLE_COOLDOWN_FRAMES;
            log::debug!("paddle {i} hit, score {}", state.score);
        }
    }

    for wall in &state.walls {
        if overlaps(&state.ball, wall) {
            state.final_score = state.score;
            state.ball.set_velocity(IVec2::ZERO);
            state.flash_ticks = GAME_OVER_FLASH_FRAMES;
            state.phase = GamePhase::GameOver;
            log::info!("game over, final score {}", state.final_score);
            break;
        }
    }
}
