// book/state.rs
//
// Pagination state machine for the photo book.
//
// A turn is two-phase: `begin_turn` moves the position and flips/closes the
// leaf immediately, then `tick(dt)` runs the fixed-duration transition down.
// While a transition is in flight every further turn request is dropped (not
// queued). The stack layout is recomputed only when a transition completes.
//
// Usage:
//   let mut book = BookState::new(3);
//   book.turn_next();
//   book.tick(dt);   // once per frame; returns Some(..) when the turn lands

use crate::api::config::BookConfig;
use crate::api::types::{Direction, Orientation};
use crate::core::time::TransitionTimer;
use crate::extensions::easing::ease;

use super::counter;
use super::leaf::Leaf;
use super::stack::StackLayout;

/// A turn currently animating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    /// Index of the leaf being turned.
    pub leaf: usize,
    timer: TransitionTimer,
    tilt: TransitionTimer,
}

impl Transition {
    /// Normalized progress of the turn [0, 1].
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// Seconds until the lock releases.
    pub fn remaining(&self) -> f32 {
        self.timer.remaining()
    }
}

/// Record of an accepted turn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnStarted {
    pub direction: Direction,
    pub leaf: usize,
    /// Position after the turn.
    pub position: usize,
}

/// Record of a transition that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCompleted {
    pub direction: Direction,
    pub leaf: usize,
    pub position: usize,
}

/// Owns the current page position of a flip-book and its transition lock.
#[derive(Debug, Clone)]
pub struct BookState {
    leaves: Vec<Leaf>,
    /// Number of flipped leaves, in [0, leaf_count].
    position: usize,
    transition: Option<Transition>,
    stack: StackLayout,
    config: BookConfig,
}

impl BookState {
    /// Create a closed book with default timing.
    pub fn new(leaf_count: usize) -> Self {
        Self::with_config(leaf_count, BookConfig::default())
    }

    pub fn with_config(leaf_count: usize, config: BookConfig) -> Self {
        Self {
            leaves: (0..leaf_count).map(Leaf::new).collect(),
            position: 0,
            transition: None,
            stack: StackLayout::compute(leaf_count, 0),
            config,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of flipped leaves. 0 = front cover showing, `leaf_count` = back cover.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True strictly between the start and completion of a turn.
    pub fn is_locked(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn leaf(&self, index: usize) -> Option<&Leaf> {
        self.leaves.get(index)
    }

    /// Layering as of the last completed transition.
    pub fn stack_layout(&self) -> &StackLayout {
        &self.stack
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Replace timing parameters. An in-flight transition keeps its own duration.
    pub fn set_config(&mut self, config: BookConfig) {
        self.config = config;
    }

    pub fn display_page(&self) -> usize {
        counter::display_page(self.leaf_count(), self.position)
    }

    pub fn total_pages(&self) -> usize {
        counter::total_pages(self.leaf_count())
    }

    /// Whether a turn in `direction` would be accepted right now.
    pub fn can_turn(&self, direction: Direction) -> bool {
        if self.is_locked() {
            return false;
        }
        match direction {
            Direction::Next => self.position < self.leaf_count(),
            Direction::Prev => self.position > 0,
        }
    }

    /// Start a turn. Returns `None` (and changes nothing) when the book is
    /// locked or already at the end it would turn past.
    pub fn begin_turn(&mut self, direction: Direction) -> Option<TurnStarted> {
        if !self.can_turn(direction) {
            log::debug!(
                "book: dropped {:?} at position {} (locked: {})",
                direction,
                self.position,
                self.is_locked()
            );
            return None;
        }

        let leaf = match direction {
            Direction::Next => {
                let leaf = self.position;
                self.leaves[leaf].set_orientation(Orientation::Flipped);
                self.position += 1;
                leaf
            }
            Direction::Prev => {
                self.position -= 1;
                let leaf = self.position;
                self.leaves[leaf].set_orientation(Orientation::Closed);
                leaf
            }
        };

        self.transition = Some(Transition {
            direction,
            leaf,
            timer: TransitionTimer::new(self.config.turn_duration),
            tilt: TransitionTimer::new(self.config.tilt_duration),
        });

        log::debug!("book: turning leaf {} {:?}, position now {}", leaf, direction, self.position);

        Some(TurnStarted {
            direction,
            leaf,
            position: self.position,
        })
    }

    pub fn turn_next(&mut self) -> Option<TurnStarted> {
        self.begin_turn(Direction::Next)
    }

    pub fn turn_prev(&mut self) -> Option<TurnStarted> {
        self.begin_turn(Direction::Prev)
    }

    /// Advance the in-flight transition by `dt` seconds.
    /// Returns the completion record on the tick the lock releases.
    pub fn tick(&mut self, dt: f32) -> Option<TurnCompleted> {
        let finished = match self.transition.as_mut() {
            Some(transition) => {
                transition.tilt.advance(dt);
                transition.timer.advance(dt)
            }
            None => return None,
        };

        if finished {
            self.complete_transition()
        } else {
            None
        }
    }

    /// Finish the in-flight transition now: release the lock and recompute
    /// the stack. No-op when nothing is in flight.
    pub fn complete_transition(&mut self) -> Option<TurnCompleted> {
        let transition = self.transition.take()?;
        self.recompute_stack_order();
        Some(TurnCompleted {
            direction: transition.direction,
            leaf: transition.leaf,
            position: self.position,
        })
    }

    /// Rebuild the stack layout from the current position.
    pub fn recompute_stack_order(&mut self) -> &StackLayout {
        self.stack = StackLayout::compute(self.leaf_count(), self.position);
        &self.stack
    }

    /// Rotation of a leaf around the spine in degrees, for renderers that
    /// animate without CSS. The leaf in flight is eased between its resting
    /// angles; every other leaf sits at its resting angle.
    pub fn leaf_angle(&self, index: usize) -> f32 {
        let Some(leaf) = self.leaves.get(index) else {
            return 0.0;
        };
        match &self.transition {
            Some(t) if t.leaf == index => {
                let (from, to) = match t.direction {
                    Direction::Next => (Orientation::Closed, Orientation::Flipped),
                    Direction::Prev => (Orientation::Flipped, Orientation::Closed),
                };
                ease(
                    from.angle_degrees(),
                    to.angle_degrees(),
                    t.timer.progress(),
                    self.config.easing,
                )
            }
            _ => leaf.orientation().angle_degrees(),
        }
    }

    /// Tilt of the whole book in degrees; non-zero only early in a turn.
    pub fn tilt_degrees(&self) -> f32 {
        match &self.transition {
            Some(t) if !t.tilt.is_finished() => t.direction.tilt_sign() * self.config.tilt_degrees,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orientations(book: &BookState) -> Vec<Orientation> {
        book.leaves().iter().map(|l| l.orientation()).collect()
    }

    fn assert_orientation_invariant(book: &BookState) {
        for leaf in book.leaves() {
            assert_eq!(
                leaf.is_flipped(),
                leaf.index() < book.position(),
                "leaf {} at position {}",
                leaf.index(),
                book.position()
            );
        }
    }

    #[test]
    fn starts_closed() {
        for n in 0..5 {
            let book = BookState::new(n);
            assert_eq!(book.position(), 0);
            assert!(!book.is_locked());
            assert_orientation_invariant(&book);
        }
    }

    #[test]
    fn turn_next_flips_and_locks() {
        let mut book = BookState::new(3);
        let started = book.turn_next().unwrap();
        assert_eq!(started, TurnStarted { direction: Direction::Next, leaf: 0, position: 1 });
        assert_eq!(book.position(), 1);
        assert!(book.is_locked());
        assert_eq!(book.leaf(0).unwrap().orientation(), Orientation::Flipped);
    }

    #[test]
    fn request_during_lock_is_dropped() {
        let mut book = BookState::new(3);
        book.turn_next();
        assert!(book.turn_next().is_none());
        assert!(book.turn_prev().is_none());
        assert_eq!(book.position(), 1);
        assert_eq!(book.transition().unwrap().leaf, 0);
    }

    #[test]
    fn dropped_request_is_not_replayed_after_unlock() {
        let mut book = BookState::new(3);
        book.turn_next();
        book.turn_next();
        book.tick(1.0);
        assert!(!book.is_locked());
        assert_eq!(book.position(), 1);
    }

    #[test]
    fn lock_releases_after_duration() {
        let mut book = BookState::new(3);
        book.turn_next();
        assert!(book.tick(0.5).is_none());
        assert!(book.is_locked());
        let done = book.tick(0.3).unwrap();
        assert_eq!(done, TurnCompleted { direction: Direction::Next, leaf: 0, position: 1 });
        assert!(!book.is_locked());
        assert!(book.tick(1.0).is_none());
    }

    #[test]
    fn stack_recomputed_only_on_completion() {
        let mut book = BookState::new(3);
        let closed = StackLayout::compute(3, 0);
        book.turn_next();
        assert_eq!(book.stack_layout(), &closed);
        book.complete_transition();
        assert_eq!(book.stack_layout(), &StackLayout::compute(3, 1));
    }

    #[test]
    fn turn_past_back_cover_is_noop() {
        let mut book = BookState::new(2);
        book.turn_next();
        book.complete_transition();
        book.turn_next();
        book.complete_transition();
        assert_eq!(book.position(), 2);
        assert!(book.turn_next().is_none());
        assert_eq!(book.position(), 2);
        assert!(!book.is_locked());
    }

    #[test]
    fn turn_before_front_cover_is_noop() {
        let mut book = BookState::new(2);
        assert!(book.turn_prev().is_none());
        assert_eq!(book.position(), 0);
        assert!(!book.is_locked());
    }

    #[test]
    fn empty_book_never_turns() {
        let mut book = BookState::new(0);
        assert!(book.turn_next().is_none());
        assert!(book.turn_prev().is_none());
        assert_eq!(book.display_page(), 1);
        assert_eq!(book.total_pages(), 1);
    }

    #[test]
    fn three_leaf_walkthrough() {
        let mut book = BookState::new(3);
        assert_eq!(book.display_page(), 1);

        book.turn_next();
        book.complete_transition();
        assert_eq!(book.position(), 1);
        assert_eq!(book.leaf(0).unwrap().orientation(), Orientation::Flipped);
        assert_eq!(book.display_page(), 2);

        for _ in 0..2 {
            book.turn_next();
            book.complete_transition();
        }
        assert_eq!(book.position(), 3);
        assert_eq!(book.display_page(), 7);

        assert!(book.turn_next().is_none());
        assert_eq!(book.position(), 3);

        book.turn_prev();
        book.complete_transition();
        assert_eq!(book.position(), 2);
        assert_eq!(book.leaf(2).unwrap().orientation(), Orientation::Closed);
        assert_eq!(book.display_page(), 4);
        assert_eq!(
            orientations(&book),
            vec![Orientation::Flipped, Orientation::Flipped, Orientation::Closed]
        );
    }

    #[test]
    fn position_stays_in_range_for_all_short_sequences() {
        // Every sequence of 6 next/prev requests, with and without waiting
        // out the transition in between.
        for n in 0..4 {
            for mask in 0u32..(1 << 6) {
                for settle in [false, true] {
                    let mut book = BookState::new(n);
                    for step in 0..6 {
                        if mask & (1 << step) != 0 {
                            book.turn_next();
                        } else {
                            book.turn_prev();
                        }
                        if settle {
                            book.tick(1.0);
                        }
                        assert!(book.position() <= n);
                        assert_orientation_invariant(&book);
                    }
                }
            }
        }
    }

    #[test]
    fn recompute_twice_is_identical() {
        let mut book = BookState::new(4);
        book.turn_next();
        book.complete_transition();
        let first = book.recompute_stack_order().clone();
        let second = book.recompute_stack_order().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn configured_duration_is_honored() {
        let config = BookConfig { turn_duration: 0.2, ..BookConfig::default() };
        let mut book = BookState::with_config(2, config);
        book.turn_next();
        assert!(book.tick(0.1).is_none());
        assert!(book.tick(0.1).is_some());
    }

    #[test]
    fn zero_duration_completes_on_next_tick() {
        let config = BookConfig { turn_duration: 0.0, tilt_duration: 0.0, ..BookConfig::default() };
        let mut book = BookState::with_config(2, config);
        book.turn_next();
        assert!(book.is_locked());
        assert!(book.tick(0.0).is_some());
        assert!(!book.is_locked());
    }

    #[test]
    fn config_change_spares_in_flight_turn() {
        let mut book = BookState::new(2);
        book.turn_next();
        book.set_config(BookConfig { turn_duration: 5.0, ..BookConfig::default() });
        assert!(book.tick(0.8).is_some());
        book.turn_next();
        assert!(book.tick(0.8).is_none());
        assert!((book.transition().unwrap().remaining() - 4.2).abs() < 1e-4);
    }

    #[test]
    fn leaf_angle_eases_during_turn() {
        let config = BookConfig {
            easing: crate::extensions::easing::Easing::Linear,
            ..BookConfig::default()
        };
        let mut book = BookState::with_config(2, config);
        assert_eq!(book.leaf_angle(0), 0.0);
        book.turn_next();
        book.tick(0.4);
        assert!((book.leaf_angle(0) + 90.0).abs() < 1e-3);
        assert_eq!(book.leaf_angle(1), 0.0);
        book.tick(0.4);
        assert_eq!(book.leaf_angle(0), -180.0);

        book.turn_prev();
        book.tick(0.2);
        assert!((book.leaf_angle(0) + 135.0).abs() < 1e-3);
    }

    #[test]
    fn leaf_angle_out_of_range_is_zero() {
        let book = BookState::new(1);
        assert_eq!(book.leaf_angle(9), 0.0);
    }

    #[test]
    fn tilt_follows_direction_then_settles() {
        let mut book = BookState::new(2);
        assert_eq!(book.tilt_degrees(), 0.0);
        book.turn_next();
        assert_eq!(book.tilt_degrees(), -3.0);
        book.tick(0.6);
        assert_eq!(book.tilt_degrees(), 0.0);
        assert!(book.is_locked());
        book.tick(0.3);

        book.turn_prev();
        assert_eq!(book.tilt_degrees(), 3.0);
    }
}
