//! WASM-target tests for notekeeper-platform (Node.js runtime).
//!
//! Covers request construction only; calls that need `fetch()` or a
//! DOM run against a live backend in the browser.

use wasm_bindgen_test::*;

use notekeeper_platform::http::{basic_auth_header, HttpNotesApi};
use notekeeper_platform::location::resolve_backend;
use notekeeper_types::auth::Credentials;
use notekeeper_types::config::ClientConfig;

#[wasm_bindgen_test]
fn basic_auth_header_value() {
    let creds = Credentials::new("admin", "admin");
    assert_eq!(basic_auth_header(&creds), "Basic YWRtaW46YWRtaW4=");
}

#[wasm_bindgen_test]
fn endpoints_join_backend_and_prefix() {
    let api = HttpNotesApi::new(ClientConfig::with_backend_url("https://notes.example"));
    assert_eq!(api.url("extract-npc"), "https://notes.example/api/extract-npc");
    assert_eq!(api.url("/npcs/n1"), "https://notes.example/api/npcs/n1");
}

#[wasm_bindgen_test]
fn configured_backend_is_kept() {
    let config = ClientConfig::with_backend_url("http://localhost:8001");
    assert_eq!(resolve_backend(config.clone()), config);
}
