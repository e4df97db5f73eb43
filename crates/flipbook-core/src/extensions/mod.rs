// extensions/mod.rs
//
// Optional animation helpers. Decoupled from the book state machine; the
// state machine only asks them for numbers.

pub mod easing;

pub use easing::{Easing, ease, lerp};
