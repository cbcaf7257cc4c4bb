//! WASM-specific tests
//!
//! These tests run in a browser environment using wasm-pack test.
//! Run with: cd web && wasm-pack test --headless --chrome

use noughts::{GamePhase, GameSession, Mark, Winner};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Test console logging works
#[wasm_bindgen_test]
fn test_console_logging() {
    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("WASM test logging works!");
}

/// Test web_sys window and document access
#[wasm_bindgen_test]
fn test_window_and_document_exist() {
    let window = web_sys::window();
    assert!(window.is_some(), "Window should exist in browser context");
    assert!(
        window.and_then(|w| w.document()).is_some(),
        "Document should exist"
    );
}

/// Test the engine runs a full game in the browser runtime
#[wasm_bindgen_test]
fn test_session_plays_in_wasm() {
    let mut session = GameSession::new();

    for position in [0, 3, 1, 4, 2] {
        session.apply_move(position);
    }

    assert_eq!(session.state().phase(), GamePhase::Finished);
    assert_eq!(session.state().winner(), Winner::X);
    assert_eq!(session.state().current_player(), Mark::X);

    session.reset();
    assert_eq!(session.state().phase(), GamePhase::Playing);
}
