use crate::api::types::Orientation;

/// One flip-able page of the book. Covers are not leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    index: usize,
    orientation: Orientation,
}

impl Leaf {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            orientation: Orientation::Closed,
        }
    }

    /// Position in the book, front to back. Fixed at construction.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_flipped(&self) -> bool {
        self.orientation == Orientation::Flipped
    }

    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}
