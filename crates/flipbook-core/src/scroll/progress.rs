/// Fraction of the document scrolled past, in [0, 1].
/// A document no taller than the viewport reports 0.
pub fn scroll_progress(scroll_top: f32, doc_height: f32, viewport_height: f32) -> f32 {
    let scrollable = doc_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}
