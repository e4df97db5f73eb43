/// Which on-screen navigation button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
}

/// One of the two covers outside the leaf set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cover {
    Front,
    Back,
}

/// Input events the book understands.
/// JS translates DOM listeners into these; no DOM types cross the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch began at screen coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch ended at screen coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A previous/next button was activated.
    Button { button: NavButton },
    /// A leaf was clicked `x` pixels from its left edge; `width` is its rendered width.
    LeafClick { leaf: usize, x: f32, width: f32 },
    /// A cover was clicked.
    CoverClick { cover: Cover },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 39 });
        q.push(InputEvent::Button { button: NavButton::Prev });
        assert_eq!(q.len(), 3);
        let events = q.drain();
        assert_eq!(events[1], InputEvent::KeyDown { key_code: 39 });
        assert_eq!(events[2], InputEvent::Button { button: NavButton::Prev });
        assert!(q.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut q = InputQueue::default();
        q.push(InputEvent::LeafClick { leaf: 0, x: 5.0, width: 100.0 });
        assert_eq!(q.iter().count(), 1);
        assert_eq!(q.len(), 1);
    }
}
