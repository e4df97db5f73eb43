pub mod counter;
pub mod leaf;
pub mod stack;
pub mod state;

pub use counter::{display_page, total_pages};
pub use leaf::Leaf;
pub use stack::{LeafLayout, StackLayout};
pub use state::{BookState, Transition, TurnCompleted, TurnStarted};
