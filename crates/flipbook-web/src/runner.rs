use flipbook_core::{
    BookConfig, BookEvent, BookState, CommandDispatcher, ConfigError, Direction, InputEvent,
    InputQueue, OutputBuffer, SectionTracker,
};

/// Wires the book state machine to per-frame input and output.
///
/// The page owns one `BookRunner` in `thread_local!` storage and drives it
/// through free `#[wasm_bindgen]` functions: listeners push input, the
/// animation frame calls `tick`, and the renderer reads the output buffer.
#[derive(Debug)]
pub struct BookRunner {
    book: BookState,
    input: InputQueue,
    dispatcher: CommandDispatcher,
    sections: SectionTracker,
    output: OutputBuffer,
    /// Events produced during the last tick, flattened for pointer reads.
    events: Vec<BookEvent>,
    /// Events raised between ticks, published by the next tick.
    pending: Vec<BookEvent>,
}

impl BookRunner {
    pub fn new(leaf_count: usize, config: BookConfig) -> Self {
        let dispatcher = CommandDispatcher::new(config.swipe_threshold);
        let sections = SectionTracker::new(config.activation_threshold);
        let book = BookState::with_config(leaf_count, config);
        let mut output = OutputBuffer::new(leaf_count);
        output.write(&book);

        Self {
            book,
            input: InputQueue::new(),
            dispatcher,
            sections,
            output,
            events: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: advance the transition, apply queued input, rebuild output.
    pub fn tick(&mut self, dt: f32) {
        self.events.clear();
        self.events.append(&mut self.pending);

        // Advance before applying input: a turn started this frame gets its
        // full duration ahead of it.
        if let Some(done) = self.book.tick(dt) {
            log::debug!("book: turn landed at position {}", done.position);
            self.events.push(BookEvent::turn(
                BookEvent::TURN_COMPLETED,
                done.leaf,
                done.position,
                done.direction,
            ));
        }

        for event in self.input.drain() {
            if let Some(started) = self.dispatcher.dispatch(event, &mut self.book) {
                self.events.push(BookEvent::turn(
                    BookEvent::TURN_STARTED,
                    started.leaf,
                    started.position,
                    started.direction,
                ));
            }
        }

        self.output.write(&self.book);
    }

    /// Parse and apply a JSON config. On error the previous config stays.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = BookConfig::from_json(json)?;
        self.dispatcher.set_swipe_threshold(config.swipe_threshold);
        self.sections.set_threshold(config.activation_threshold);
        self.book.set_config(config);
        log::info!("book: config loaded");
        Ok(())
    }

    pub fn add_section(&mut self, id: &str) -> usize {
        self.sections.add(id)
    }

    /// Report section visibility; emits `SECTION_CHANGED` when the active one moves.
    pub fn observe_section(&mut self, id: &str, visible_ratio: f32) -> bool {
        match self.sections.observe(id, visible_ratio) {
            Some(idx) => {
                log::debug!("page: section '{}' active", id);
                self.pending.push(BookEvent::section_changed(idx));
                true
            }
            None => false,
        }
    }

    pub fn activate_section(&mut self, id: &str) -> bool {
        match self.sections.activate(id) {
            Some(idx) => {
                self.pending.push(BookEvent::section_changed(idx));
                true
            }
            None => false,
        }
    }

    pub fn active_section(&self) -> Option<String> {
        self.sections.active().map(str::to_owned)
    }

    pub fn book(&self) -> &BookState {
        &self.book
    }

    pub fn can_turn_next(&self) -> bool {
        self.book.can_turn(Direction::Next)
    }

    pub fn can_turn_prev(&self) -> bool {
        self.book.can_turn(Direction::Prev)
    }

    // -- Buffer accessors --

    pub fn output(&self) -> &[f32] {
        self.output.as_slice()
    }

    pub fn output_ptr(&self) -> *const f32 {
        self.output.as_ptr()
    }

    pub fn output_len(&self) -> u32 {
        self.output.len() as u32
    }

    pub fn events(&self) -> &[BookEvent] {
        &self.events
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    /// Number of floats in the events buffer.
    pub fn events_len(&self) -> u32 {
        (self.events.len() * BookEvent::FLOATS) as u32
    }
}
