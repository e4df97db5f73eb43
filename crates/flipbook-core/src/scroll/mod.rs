pub mod progress;
pub mod sections;

pub use progress::scroll_progress;
pub use sections::SectionTracker;
