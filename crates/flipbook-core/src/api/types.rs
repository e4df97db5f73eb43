use bytemuck::{Pod, Zeroable};

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the back cover.
    Next,
    /// Towards the front cover.
    Prev,
}

impl Direction {
    /// Sign of the book tilt while a turn in this direction is in flight.
    pub fn tilt_sign(self) -> f32 {
        match self {
            Direction::Next => -1.0,
            Direction::Prev => 1.0,
        }
    }
}

/// Orientation of a single leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Lying on the right-hand (unread) stack.
    #[default]
    Closed,
    /// Turned over onto the left-hand (read) stack.
    Flipped,
}

impl Orientation {
    /// Resting rotation around the spine, in degrees.
    pub fn angle_degrees(self) -> f32 {
        match self {
            Orientation::Closed => 0.0,
            Orientation::Flipped => -180.0,
        }
    }

    /// Wire encoding used by the output buffer.
    pub fn as_f32(self) -> f32 {
        match self {
            Orientation::Closed => 0.0,
            Orientation::Flipped => 1.0,
        }
    }
}

/// A book event communicated from Rust to JavaScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BookEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl BookEvent {
    pub const FLOATS: usize = 4;

    /// A turn began. `a` = leaf index, `b` = new position, `c` = direction (+1 next, -1 prev).
    pub const TURN_STARTED: f32 = 1.0;
    /// A turn finished and the lock released. Payload as `TURN_STARTED`.
    pub const TURN_COMPLETED: f32 = 2.0;
    /// The active page section changed. `a` = section index.
    pub const SECTION_CHANGED: f32 = 3.0;

    pub fn turn(kind: f32, leaf: usize, position: usize, direction: Direction) -> Self {
        let c = match direction {
            Direction::Next => 1.0,
            Direction::Prev => -1.0,
        };
        Self {
            kind,
            a: leaf as f32,
            b: position as f32,
            c,
        }
    }

    pub fn section_changed(section: usize) -> Self {
        Self {
            kind: Self::SECTION_CHANGED,
            a: section as f32,
            ..Self::default()
        }
    }
}
