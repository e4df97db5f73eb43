pub mod dispatch;
pub mod queue;

pub use dispatch::{Command, CommandDispatcher, KEY_ARROW_LEFT, KEY_ARROW_RIGHT};
pub use queue::{Cover, InputEvent, InputQueue, NavButton};
