// book/stack.rs
//
// Visual layering of leaves and covers. A pure function of leaf count and
// position so repeated recomputation is always identical.

use crate::api::types::Orientation;

/// Where one leaf sits in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafLayout {
    pub index: usize,
    pub orientation: Orientation,
    /// Larger draws on top.
    pub z: i32,
}

/// Layering of the whole book for one position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackLayout {
    pub leaves: Vec<LeafLayout>,
    pub front_cover: i32,
    pub back_cover: i32,
}

impl StackLayout {
    /// Compute the stack for `leaf_count` leaves with `position` of them flipped.
    ///
    /// Flipped leaves stack upward from the bottom in reading order, so the most
    /// recently turned one is on top of the left pile. Closed leaves stack in
    /// reverse so the next leaf to turn is on top of the right pile.
    pub fn compute(leaf_count: usize, position: usize) -> Self {
        let position = position.min(leaf_count);
        let top = leaf_count as i32 + 1;

        let leaves = (0..leaf_count)
            .map(|index| {
                let flipped = index < position;
                LeafLayout {
                    index,
                    orientation: if flipped {
                        Orientation::Flipped
                    } else {
                        Orientation::Closed
                    },
                    z: if flipped {
                        index as i32
                    } else {
                        (leaf_count - index) as i32
                    },
                }
            })
            .collect();

        let front_cover = if position == 0 { top } else { -1 };
        // With no leaves both covers would claim the top; the front cover wins.
        let back_cover = if position == leaf_count && leaf_count > 0 {
            top
        } else {
            0
        };

        Self {
            leaves,
            front_cover,
            back_cover,
        }
    }

    pub fn leaf(&self, index: usize) -> Option<&LeafLayout> {
        self.leaves.get(index)
    }

    /// Highest z among leaves and covers.
    pub fn max_z(&self) -> i32 {
        self.leaves
            .iter()
            .map(|l| l.z)
            .chain([self.front_cover, self.back_cover])
            .max()
            .unwrap_or(self.front_cover)
    }
}
