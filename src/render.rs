//! Frame composition
//!
//! Pure translation from [`GameState`] to [`Display`] calls. Nothing here
//! mutates the state; the embedding driver decides how shapes and glyphs
//! become pixels.

use crate::consts::*;
use crate::platform::Display;
use crate::sim::{Anchor, Color, GamePhase, GameState, Shape, arena_center};

/// Draw one frame of whatever the current phase shows. `clear`/`present`
/// bracketing is the caller's job.
pub fn draw_frame(state: &GameState, display: &mut impl Display) {
    match state.phase {
        GamePhase::Title => {
            display.draw_text(16, 15, "PADDLE PANIC", Color::White, 2);
            display.draw_text(42, 50, "PRESS START", Color::White, 1);
            return;
        }
        GamePhase::GameOver => {
            display.draw_text(28, 15, "GAME OVER", Color::White, 2);
            display.draw_text(54, 35, "SCORE", Color::White, 1);
            display.draw_number(SCREEN_WIDTH / 2 - 10, 45, state.final_score, Color::White, 2);
            return;
        }
        _ => {}
    }

    for wall in &state.walls {
        display.draw_shape(wall.shape());
    }
    for paddle in &state.paddles {
        display.draw_shape(paddle.shape());
    }
    display.draw_shape(state.ball.shape());

    match state.phase {
        GamePhase::Paused => draw_pause_overlay(state, display),
        GamePhase::Countdown => {
            let center = arena_center();
            display.draw_number(
                center.x - 9,
                center.y - 15,
                u16::from(state.countdown_digit()),
                Color::White,
                6,
            );
        }
        _ => {}
    }
}

/// Black card over the arena center with a white border and the running
/// score inside.
fn draw_pause_overlay(state: &GameState, display: &mut impl Display) {
    let center = arena_center();
    let card = Shape::rect(center, 60, 30, Anchor::Center, Color::Black);
    display.draw_shape(&card);
    let mut border = Shape::rect(center, 60, 30, Anchor::Center, Color::White);
    border.filled = false;
    display.draw_shape(&border);
    display.draw_number(center.x - 10, center.y - 7, state.score, Color::White, 3);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Axis, Button, InputDevice};
    use crate::sim::ShapeKind;

    /// Records every display call in order.
    #[derive(Default)]
    struct RecordingDisplay {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Shape(Shape),
        Text(String),
        Number(u16, u8),
        Inverted(bool),
        Present,
    }

    impl Display for RecordingDisplay {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn draw_shape(&mut self, shape: &Shape) {
            self.calls.push(Call::Shape(*shape));
        }
        fn draw_text(&mut self, _x: i32, _y: i32, text: &str, _color: Color, _scale: u8) {
            self.calls.push(Call::Text(text.to_owned()));
        }
        fn draw_number(&mut self, _x: i32, _y: i32, value: u16, _color: Color, scale: u8) {
            self.calls.push(Call::Number(value, scale));
        }
        fn set_inverted(&mut self, inverted: bool) {
            self.calls.push(Call::Inverted(inverted));
        }
        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    /// Fixed-value input device for driving `run_frame`.
    struct Pad {
        primary: bool,
    }

    impl InputDevice for Pad {
        fn button(&self, button: Button) -> bool {
            match button {
                Button::Primary => self.primary,
                Button::Boost => false,
            }
        }
        fn axis(&self, _axis: Axis) -> u16 {
            2048
        }
    }

    fn shape_count(display: &RecordingDisplay) -> usize {
        display
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Shape(_)))
            .count()
    }

    #[test]
    fn title_screen_is_text_only() {
        let state = GameState::new();
        let mut display = RecordingDisplay::default();
        draw_frame(&state, &mut display);

        assert_eq!(shape_count(&display), 0);
        assert!(display.calls.contains(&Call::Text("PADDLE PANIC".into())));
        assert!(display.calls.contains(&Call::Text("PRESS START".into())));
    }

    #[test]
    fn arena_draws_all_nine_bodies() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        let mut display = RecordingDisplay::default();
        draw_frame(&state, &mut display);

        // Four walls, four paddles, the ball.
        assert_eq!(shape_count(&display), 9);
        let circles = display
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Shape(s) if matches!(s.kind, ShapeKind::Circle { .. })))
            .count();
        assert_eq!(circles, 1);
    }

    #[test]
    fn pause_overlay_sits_on_top_of_the_arena() {
        let mut state = GameState::new();
        state.phase = GamePhase::Paused;
        state.score = 12;
        let mut display = RecordingDisplay::default();
        draw_frame(&state, &mut display);

        // Arena first, then card, border and score.
        assert_eq!(shape_count(&display), 11);
        assert_eq!(display.calls.last(), Some(&Call::Number(12, 3)));
        let border_unfilled = display
            .calls
            .iter()
            .any(|c| matches!(c, Call::Shape(s) if !s.filled && s.color == Color::White));
        assert!(border_unfilled);
    }

    #[test]
    fn countdown_shows_the_current_digit() {
        let mut state = GameState::new();
        state.phase = GamePhase::Countdown;
        state.countdown_ticks = COUNTDOWN_FRAMES;
        let mut display = RecordingDisplay::default();
        draw_frame(&state, &mut display);
        assert!(display.calls.contains(&Call::Number(3, 6)));

        state.countdown_ticks = 5;
        let mut display = RecordingDisplay::default();
        draw_frame(&state, &mut display);
        assert!(display.calls.contains(&Call::Number(1, 6)));
    }

    #[test]
    fn game_over_shows_the_final_score() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        state.final_score = 37;
        let mut display = RecordingDisplay::default();
        draw_frame(&state, &mut display);

        assert_eq!(shape_count(&display), 0);
        assert!(display.calls.contains(&Call::Text("GAME OVER".into())));
        assert!(display.calls.contains(&Call::Number(37, 2)));
    }

    #[test]
    fn run_frame_brackets_with_clear_and_present() {
        let mut state = GameState::new();
        let mut display = RecordingDisplay::default();
        crate::run_frame(&mut state, &Pad { primary: false }, &mut display);

        assert_eq!(display.calls.first(), Some(&Call::Inverted(false)));
        assert_eq!(display.calls.get(1), Some(&Call::Clear));
        assert_eq!(display.calls.last(), Some(&Call::Present));
    }

    #[test]
    fn run_frame_inverts_the_panel_while_flashing() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        state.flash_ticks = GAME_OVER_FLASH_FRAMES;
        let mut display = RecordingDisplay::default();
        crate::run_frame(&mut state, &Pad { primary: false }, &mut display);
        assert!(display.calls.contains(&Call::Inverted(true)));

        // Once the flash drains the inversion is withdrawn.
        state.flash_ticks = 1;
        let mut display = RecordingDisplay::default();
        crate::run_frame(&mut state, &Pad { primary: false }, &mut display);
        assert!(display.calls.contains(&Call::Inverted(false)));
    }
}
