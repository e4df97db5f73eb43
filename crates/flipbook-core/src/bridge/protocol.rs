//! Flat output buffer layout read by the page's rendering layer.
//! Must stay in sync with the JavaScript reader.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Header: 12 floats]
//! [Leaves: leaf_count × 4 floats]  index, orientation (0 closed / 1 flipped), z, angle_deg
//! ```
//!
//! The buffer is rewritten in full every tick. JavaScript reads the header to
//! find the leaf count and computes offsets from it.

use bytemuck::{Pod, Zeroable};

use crate::book::state::BookState;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_LEAF_COUNT: usize = 1;
pub const HEADER_POSITION: usize = 2;
pub const HEADER_LOCKED: usize = 3;
pub const HEADER_DISPLAY_PAGE: usize = 4;
pub const HEADER_TOTAL_PAGES: usize = 5;
pub const HEADER_TILT_DEGREES: usize = 6;
pub const HEADER_FRONT_COVER_Z: usize = 7;
pub const HEADER_BACK_COVER_Z: usize = 8;
/// Index of the leaf in flight, or -1.
pub const HEADER_TURNING_LEAF: usize = 9;
pub const HEADER_TURN_PROGRESS: usize = 10;
pub const HEADER_RESERVED: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Per-leaf record as laid out in the buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LeafRecord {
    pub index: f32,
    pub orientation: f32,
    pub z: f32,
    pub angle: f32,
}

impl LeafRecord {
    pub const FLOATS: usize = 4;
}

/// Offsets and sizes for a book with a given leaf count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub leaf_count: usize,
    /// Offset (in floats) where leaf records begin.
    pub leaf_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn for_leaves(leaf_count: usize) -> Self {
        let leaf_data_offset = HEADER_FLOATS;
        let buffer_total_floats = leaf_data_offset + leaf_count * LeafRecord::FLOATS;
        Self {
            leaf_count,
            leaf_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }
}

/// Owned float buffer JavaScript reads through a pointer into wasm memory.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
}

impl OutputBuffer {
    pub fn new(leaf_count: usize) -> Self {
        let layout = ProtocolLayout::for_leaves(leaf_count);
        Self {
            layout,
            data: vec![0.0; layout.buffer_total_floats],
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Rewrite the buffer from the book's current state.
    pub fn write(&mut self, book: &BookState) {
        if book.leaf_count() != self.layout.leaf_count {
            *self = Self::new(book.leaf_count());
        }

        let stack = book.stack_layout();
        let header = &mut self.data[..HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_LEAF_COUNT] = book.leaf_count() as f32;
        header[HEADER_POSITION] = book.position() as f32;
        header[HEADER_LOCKED] = if book.is_locked() { 1.0 } else { 0.0 };
        header[HEADER_DISPLAY_PAGE] = book.display_page() as f32;
        header[HEADER_TOTAL_PAGES] = book.total_pages() as f32;
        header[HEADER_TILT_DEGREES] = book.tilt_degrees();
        header[HEADER_FRONT_COVER_Z] = stack.front_cover as f32;
        header[HEADER_BACK_COVER_Z] = stack.back_cover as f32;
        header[HEADER_TURNING_LEAF] = book.transition().map_or(-1.0, |t| t.leaf as f32);
        header[HEADER_TURN_PROGRESS] = book.transition().map_or(0.0, |t| t.progress());
        header[HEADER_RESERVED] = 0.0;

        let records: &mut [LeafRecord] =
            bytemuck::cast_slice_mut(&mut self.data[self.layout.leaf_data_offset..]);
        for (record, leaf) in records.iter_mut().zip(book.leaves()) {
            let z = stack.leaf(leaf.index()).map_or(0, |l| l.z);
            *record = LeafRecord {
                index: leaf.index() as f32,
                orientation: leaf.orientation().as_f32(),
                z: z as f32,
                angle: book.leaf_angle(leaf.index()),
            };
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Leaf records as typed structs.
    pub fn leaf_records(&self) -> &[LeafRecord] {
        bytemuck::cast_slice(&self.data[self.layout.leaf_data_offset..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_sizes() {
        let layout = ProtocolLayout::for_leaves(3);
        assert_eq!(layout.leaf_data_offset, 12);
        assert_eq!(layout.buffer_total_floats, 12 + 3 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn empty_book_is_header_only() {
        let mut out = OutputBuffer::new(0);
        out.write(&BookState::new(0));
        assert_eq!(out.len(), HEADER_FLOATS);
        assert!(out.leaf_records().is_empty());
        assert_eq!(out.as_slice()[HEADER_DISPLAY_PAGE], 1.0);
    }

    #[test]
    fn header_reflects_closed_book() {
        let book = BookState::new(3);
        let mut out = OutputBuffer::new(3);
        out.write(&book);
        let h = out.as_slice();
        assert_eq!(h[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(h[HEADER_LEAF_COUNT], 3.0);
        assert_eq!(h[HEADER_POSITION], 0.0);
        assert_eq!(h[HEADER_LOCKED], 0.0);
        assert_eq!(h[HEADER_TOTAL_PAGES], 7.0);
        assert_eq!(h[HEADER_FRONT_COVER_Z], 4.0);
        assert_eq!(h[HEADER_BACK_COVER_Z], 0.0);
        assert_eq!(h[HEADER_TURNING_LEAF], -1.0);
    }

    #[test]
    fn leaf_records_track_turn() {
        let mut book = BookState::new(3);
        let mut out = OutputBuffer::new(3);
        book.turn_next();
        out.write(&book);
        assert_eq!(out.as_slice()[HEADER_LOCKED], 1.0);
        assert_eq!(out.as_slice()[HEADER_TURNING_LEAF], 0.0);
        assert_eq!(out.leaf_records()[0].orientation, 1.0);
        // Stack not yet recomputed mid-turn.
        assert_eq!(out.leaf_records()[0].z, 3.0);

        book.complete_transition();
        out.write(&book);
        let records = out.leaf_records();
        assert_eq!(records[0].z, 0.0);
        assert_eq!(records[0].angle, -180.0);
        assert_eq!(records[1].z, 2.0);
        assert_eq!(records[2].index, 2.0);
        assert_eq!(out.as_slice()[HEADER_DISPLAY_PAGE], 2.0);
    }

    #[test]
    fn resizes_for_different_book() {
        let mut out = OutputBuffer::new(1);
        out.write(&BookState::new(5));
        assert_eq!(out.layout().leaf_count, 5);
        assert_eq!(out.leaf_records().len(), 5);
    }
}
