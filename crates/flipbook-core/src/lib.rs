pub mod api;
pub mod book;
pub mod bridge;
pub mod core;
pub mod extensions;
pub mod input;
pub mod scroll;

// Re-export key types at crate root for convenience
pub use api::config::{BookConfig, ConfigError};
pub use api::types::{BookEvent, Direction, Orientation};
pub use book::{
    display_page, total_pages, BookState, Leaf, LeafLayout, StackLayout, Transition,
    TurnCompleted, TurnStarted,
};
pub use bridge::protocol::{LeafRecord, OutputBuffer, ProtocolLayout, PROTOCOL_VERSION};
pub use crate::core::time::TransitionTimer;
pub use extensions::{ease, lerp, Easing};
pub use input::{
    Command, CommandDispatcher, Cover, InputEvent, InputQueue, NavButton, KEY_ARROW_LEFT, KEY_ARROW_RIGHT,
};
pub use scroll::{scroll_progress, SectionTracker};
