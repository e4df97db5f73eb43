pub mod runner;

pub use runner::BookRunner;

use std::cell::RefCell;

use flipbook_core::{BookConfig, Cover, InputEvent, NavButton};
use wasm_bindgen::prelude::*;

// wasm-bindgen cannot export a stateful struct to free listener callbacks,
// so the page's single runner lives here and every export goes through
// `with_runner`. Calls made before `book_init` fall back to neutral values.
thread_local! {
    static RUNNER: RefCell<Option<BookRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut BookRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push(event: InputEvent) {
    if with_runner(|r| r.push_input(event)).is_none() {
        log::warn!("book: input before book_init() ignored");
    }
}

/// Create the book with `leaf_count` leaves. Safe to call again to rebuild.
#[wasm_bindgen]
pub fn book_init(leaf_count: u32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = BookRunner::new(leaf_count as usize, BookConfig::default());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("flipbook: initialized with {} leaves", leaf_count);
}

/// Apply a JSON config. Returns false (and keeps the old config) on error.
#[wasm_bindgen]
pub fn book_load_config(json: &str) -> bool {
    match with_runner(|r| r.load_config(json)) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::warn!("{}", err);
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
            false
        }
        None => false,
    }
}

#[wasm_bindgen]
pub fn book_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn book_prev_button() {
    push(InputEvent::Button { button: NavButton::Prev });
}

#[wasm_bindgen]
pub fn book_next_button() {
    push(InputEvent::Button { button: NavButton::Next });
}

#[wasm_bindgen]
pub fn book_key_down(key_code: u32) {
    push(InputEvent::KeyDown { key_code });
}

#[wasm_bindgen]
pub fn book_pointer_down(x: f32, y: f32) {
    push(InputEvent::PointerDown { x, y });
}

#[wasm_bindgen]
pub fn book_pointer_up(x: f32, y: f32) {
    push(InputEvent::PointerUp { x, y });
}

#[wasm_bindgen]
pub fn book_leaf_click(leaf: u32, x: f32, width: f32) {
    push(InputEvent::LeafClick { leaf: leaf as usize, x, width });
}

#[wasm_bindgen]
pub fn book_front_cover_click() {
    push(InputEvent::CoverClick { cover: Cover::Front });
}

#[wasm_bindgen]
pub fn book_back_cover_click() {
    push(InputEvent::CoverClick { cover: Cover::Back });
}

// ---- Page sections ----

#[wasm_bindgen]
pub fn page_add_section(id: &str) -> u32 {
    with_runner(|r| r.add_section(id) as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn page_observe_section(id: &str, visible_ratio: f32) -> bool {
    with_runner(|r| r.observe_section(id, visible_ratio)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn page_activate_section(id: &str) -> bool {
    with_runner(|r| r.activate_section(id)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn page_active_section() -> Option<String> {
    with_runner(|r| r.active_section()).flatten()
}

/// Progress-bar fill in [0, 1]. Stateless; usable before `book_init`.
#[wasm_bindgen]
pub fn page_scroll_progress(scroll_top: f32, doc_height: f32, viewport_height: f32) -> f32 {
    flipbook_core::scroll_progress(scroll_top, doc_height, viewport_height)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_output_ptr() -> *const f32 {
    with_runner(|r| r.output_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_output_len() -> u32 {
    with_runner(|r| r.output_len()).unwrap_or(0)
}

/// Copy of the output buffer, for callers that cannot view wasm memory.
#[wasm_bindgen]
pub fn get_output_snapshot() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(r.output()))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_current_position() -> u32 {
    with_runner(|r| r.book().position() as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_display_page() -> u32 {
    with_runner(|r| r.book().display_page() as u32).unwrap_or(1)
}

#[wasm_bindgen]
pub fn get_total_pages() -> u32 {
    with_runner(|r| r.book().total_pages() as u32).unwrap_or(1)
}

#[wasm_bindgen]
pub fn is_turning() -> bool {
    with_runner(|r| r.book().is_locked()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn can_turn_next() -> bool {
    with_runner(|r| r.can_turn_next()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn can_turn_prev() -> bool {
    with_runner(|r| r.can_turn_prev()).unwrap_or(false)
}
