// input/dispatch.rs
//
// Turns raw input events into book commands. Every input modality ends in
// the same `BookState::begin_turn` call, so lock and boundary rejection is
// identical for buttons, keys, swipes and clicks.

use glam::Vec2;

use crate::api::types::Direction;
use crate::book::state::{BookState, TurnStarted};
use super::queue::{Cover, InputEvent, NavButton};

/// DOM `keyCode` for ArrowLeft.
pub const KEY_ARROW_LEFT: u32 = 37;
/// DOM `keyCode` for ArrowRight.
pub const KEY_ARROW_RIGHT: u32 = 39;

/// A request to move through the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TurnNext,
    TurnPrev,
}

impl Command {
    pub fn direction(self) -> Direction {
        match self {
            Command::TurnNext => Direction::Next,
            Command::TurnPrev => Direction::Prev,
        }
    }
}

/// Maps input events to commands. Holds the only gesture state: where the
/// current swipe started.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    swipe_start: Option<Vec2>,
    swipe_threshold: f32,
}

impl CommandDispatcher {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe_start: None,
            swipe_threshold: swipe_threshold.max(0.0),
        }
    }

    pub fn set_swipe_threshold(&mut self, threshold: f32) {
        self.swipe_threshold = threshold.max(0.0);
    }

    /// Translate one event. `book` is read to decide which leaf is topmost.
    pub fn translate(&mut self, event: InputEvent, book: &BookState) -> Option<Command> {
        match event {
            InputEvent::Button { button: NavButton::Next } => Some(Command::TurnNext),
            InputEvent::Button { button: NavButton::Prev } => Some(Command::TurnPrev),
            InputEvent::KeyDown { key_code: KEY_ARROW_RIGHT } => Some(Command::TurnNext),
            InputEvent::KeyDown { key_code: KEY_ARROW_LEFT } => Some(Command::TurnPrev),
            InputEvent::KeyDown { .. } => None,
            InputEvent::PointerDown { x, y } => {
                self.swipe_start = Some(Vec2::new(x, y));
                None
            }
            InputEvent::PointerUp { x, y } => {
                let start = self.swipe_start.take()?;
                self.swipe(start, Vec2::new(x, y))
            }
            InputEvent::LeafClick { leaf, x, width } => click(leaf, x, width, book.position()),
            InputEvent::CoverClick { cover: Cover::Front } if book.position() == 0 => {
                Some(Command::TurnNext)
            }
            InputEvent::CoverClick { cover: Cover::Back } if book.position() == book.leaf_count() => {
                Some(Command::TurnPrev)
            }
            InputEvent::CoverClick { .. } => None,
        }
    }

    /// Translate and apply one event to the book.
    pub fn dispatch(&mut self, event: InputEvent, book: &mut BookState) -> Option<TurnStarted> {
        let command = self.translate(event, book)?;
        book.begin_turn(command.direction())
    }

    /// Leftward swipe reads forward, rightward swipe reads back.
    fn swipe(&self, start: Vec2, end: Vec2) -> Option<Command> {
        let dx = end.x - start.x;
        if dx == 0.0 || dx.abs() < self.swipe_threshold {
            return None;
        }
        if dx < 0.0 {
            Some(Command::TurnNext)
        } else {
            Some(Command::TurnPrev)
        }
    }
}

/// Clicks count only on the topmost leaf of each pile: the right half of the
/// next closed leaf turns forward, the left half of the last flipped leaf
/// turns back.
fn click(leaf: usize, x: f32, width: f32, position: usize) -> Option<Command> {
    if !(width > 0.0) || !x.is_finite() {
        return None;
    }
    let right_half = x > width / 2.0;
    if right_half && leaf == position {
        Some(Command::TurnNext)
    } else if !right_half && position > 0 && leaf == position - 1 {
        Some(Command::TurnPrev)
    } else {
        None
    }
}
