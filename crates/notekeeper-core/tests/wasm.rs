//! WASM-target tests for notekeeper-core.
//!
//! Runs EventBus, formatting and editor tests
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use notekeeper_core::editor::{export_filename, FreeFormEditor, SessionEditor, StructuredEditor};
use notekeeper_core::event_bus::EventBus;
use notekeeper_core::format::{wrap_selection, Marker};
use notekeeper_types::event::AppEvent;
use notekeeper_types::session::SessionType;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(AppEvent::LoginRejected);
    bus.emit(AppEvent::NpcsLoaded(vec![]));

    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 2);
    assert!(!bus.has_pending());
}

// ─── Formatting Tests ────────────────────────────────────

#[wasm_bindgen_test]
fn wrap_selection_bold() {
    assert_eq!(wrap_selection("a dire wolf", 2, 6, Marker::Bold), "a **dire** wolf");
}

#[wasm_bindgen_test]
fn wrap_empty_selection_unchanged() {
    assert_eq!(wrap_selection("a dire wolf", 6, 6, Marker::Underline), "a dire wolf");
}

// ─── Editor Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn editor_ids_are_unique() {
    let mut editor = StructuredEditor::new();
    let a = editor.add_npc_encounter();
    let b = editor.add_npc_encounter();
    assert_ne!(a, b);
}

#[wasm_bindgen_test]
fn duplicate_player_ignored() {
    let mut editor = StructuredEditor::new();
    assert!(editor.add_player("Alice"));
    assert!(!editor.add_player("Alice"));
    assert_eq!(editor.data.players_present.len(), 1);
}

#[wasm_bindgen_test]
fn free_form_extraction_targets_new_session() {
    let mut editor = FreeFormEditor::new();
    editor.content = "Mira the sage".to_string();
    editor.capture_selection(0..4);
    editor.use_suggestion("Mira");
    let req = editor.extraction_request().unwrap();
    assert_eq!(req.session_id, "new");
}

#[wasm_bindgen_test]
fn new_editor_uses_preselected_type() {
    let editor = SessionEditor::open(None, SessionType::Structured);
    assert_eq!(editor.session_type(), SessionType::Structured);
}

#[wasm_bindgen_test]
fn export_filename_replaces_whitespace() {
    assert_eq!(export_filename("Session 12"), "Session_12_export.json");
}
