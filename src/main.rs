//! Perform Mode entry point
//!
//! On the web this runs once the host page's content has loaded. The native
//! build runs a dry run of the controller against an in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use wasm_bindgen::prelude::*;

    use perform_mode::Config;

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
        }

        log::info!("Perform mode selector loading...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document - nothing to inject");
            return;
        };

        // Module may load before the host page finishes parsing
        if document.ready_state() == "loading" {
            let closure = Closure::once(move |_event: web_sys::Event| inject());
            if let Err(e) = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("Perform mode selector not started: {:?}", e);
            }
            closure.forget();
        } else {
            inject();
        }
    }

    fn inject() {
        let config = Config::load();
        match perform_mode::platform::start(config) {
            Ok(_) => log::info!("Perform mode selector running"),
            Err(e) => log::warn!("Perform mode selector not started: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Perform mode (native) starting...");
    log::info!("The selector needs a browser page - build for wasm32 to inject it");

    println!("\nRunning controller dry run...");
    dry_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Sink that logs page mutations instead of applying them
#[cfg(not(target_arch = "wasm32"))]
struct LogSink;

#[cfg(not(target_arch = "wasm32"))]
impl perform_mode::UiSink for LogSink {
    type Input = ();

    fn render_header(&mut self, header: &perform_mode::Header) {
        let labels: Vec<_> = header.buttons.iter().map(|b| b.label).collect();
        println!(
            "  header #{} into <{}>: {:?}",
            header.id, header.container_selector, labels
        );
    }

    fn show_selection(&mut self, selection: &perform_mode::Selection) {
        println!(
            "  selected: {:?} ({})",
            selection.selected,
            selection.caption.unwrap_or("no caption")
        );
    }

    fn set_input_placeholder(&mut self, _input: &(), placeholder: &str) {
        println!("  placeholder -> {:?}", placeholder);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn dry_run() {
    use perform_mode::{ChatRequest, Config, KeyPress, MemoryStore, Mode, ModeController};

    let mut controller = ModeController::new(Config::load(), MemoryStore::new(), LogSink);
    controller.initialize();
    controller.select_mode(Mode::SelfAssessment);
    controller.attach_input(&());

    let enter = KeyPress::new("Enter", false);
    let mut text = "hello".to_string();
    for _ in 0..2 {
        if let Some(tagged) = controller.on_key_press(&enter, &text) {
            text = tagged;
        }
    }
    assert_eq!(text, "[SELF] hello");

    let request = ChatRequest::for_message(&text);
    assert_eq!(
        request.messages[0].content,
        Mode::SelfAssessment.system_prompt()
    );
    println!("✓ Sent {:?}", text);
    match serde_json::to_string_pretty(&request) {
        Ok(json) => println!("  backend request:\n{}", json),
        Err(e) => log::warn!("Failed to encode request: {}", e),
    }
}
