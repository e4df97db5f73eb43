// scroll/sections.rs
//
// Tracks which page section is "current" for nav-dot highlighting. The
// embedding page reports visibility ratios from its intersection observer;
// a section becomes active once enough of it is on screen and stays active
// until another one crosses the threshold.

/// Ordered list of page sections and the one currently active.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: Option<usize>,
    threshold: f32,
}

impl SectionTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            sections: Vec::new(),
            active: None,
            threshold,
        }
    }

    /// Register a section id. Duplicates are ignored. Returns its index.
    pub fn add(&mut self, id: &str) -> usize {
        if let Some(idx) = self.index_of(id) {
            return idx;
        }
        self.sections.push(id.to_owned());
        self.sections.len() - 1
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }

    /// Report how much of a section is visible. Returns the new active index
    /// when this report changed it.
    pub fn observe(&mut self, id: &str, visible_ratio: f32) -> Option<usize> {
        let idx = self.index_of(id)?;
        if !visible_ratio.is_finite() || visible_ratio < self.threshold || self.active == Some(idx) {
            return None;
        }
        self.active = Some(idx);
        Some(idx)
    }

    /// Make a section active directly (nav-dot click).
    pub fn activate(&mut self, id: &str) -> Option<usize> {
        let idx = self.index_of(id)?;
        if self.active == Some(idx) {
            return None;
        }
        self.active = Some(idx);
        Some(idx)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.sections[idx].as_str())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(0.5)
    }
}
