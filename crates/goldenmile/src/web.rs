//! Browser entry point: the same [`App`] rendered through ratzilla.
//!
//! Requests go to the server that served the page, so the configured
//! `server_url` is not used here.

use std::cell::RefCell;
use std::rc::Rc;

use goldenmile_core::FormController;
use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::App;
use crate::data::config_data::AppConfig;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::platform::WebWorker;
use crate::state::AppState;

/// Keys the browser would otherwise act on (focus change, bookmarks, reload).
fn captures(key: &str, ctrl: bool) -> bool {
    match key {
        "Tab" | "F5" => true,
        _ => ctrl && matches!(key.to_lowercase().as_str(), "g" | "d"),
    }
}

fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let ctrl = event.ctrl_key() || event.meta_key();
        if captures(&event.key(), ctrl) {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Listener lives as long as the page
    closure.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("Golden Mile web client starting");

    setup_prevent_default()?;

    let state = AppState::new(
        FormController::new(AppConfig::default().form_config()),
        KeybindingsConfig::default(),
    );
    let app = Rc::new(RefCell::new(App::new(state, WebWorker::new())));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        app_clone.borrow_mut().handle_key(key);
    });

    terminal.draw_web(move |frame| {
        let mut app = app.borrow_mut();
        app.process_worker_responses();
        app.draw(frame);
    });

    Ok(())
}
