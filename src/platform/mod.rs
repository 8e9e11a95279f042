//! Platform abstraction layer
//!
//! Browser side of the controller:
//! - Storage (LocalStorage)
//! - DOM rendering and input events
//! - Interval ticks for element discovery
//!
//! Everything here is wasm only; native builds use `MemoryStore` and
//! their own sink.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSink;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    use super::{DomSink, LocalStorage, dom, time};
    use crate::config::Config;
    use crate::controller::ModeController;
    use crate::error::Result;
    use crate::watch::ElementWatch;

    /// Controller shared between the page callbacks
    pub type SharedController = Rc<RefCell<ModeController<LocalStorage, DomSink>>>;

    /// Inject the selector and start watching for the chat input
    pub fn start(config: Config) -> Result<SharedController> {
        let interval_ms = config.poll_interval_ms;
        let selector = config.input_selector();

        let sink = DomSink::new()?;
        let document = sink.document().clone();
        let controller = Rc::new(RefCell::new(ModeController::new(
            config,
            LocalStorage::open(),
            sink,
        )));

        controller.borrow_mut().initialize();
        dom::wire_mode_buttons(&document, &controller)?;

        let found_controller = controller.clone();
        let watch = ElementWatch::new(
            move || {
                document
                    .query_selector(&selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            },
            move |input: HtmlInputElement| {
                let attached = found_controller.borrow_mut().attach_input(&input);
                if attached {
                    if let Err(e) = dom::intercept_submit(&input, found_controller.clone()) {
                        log::warn!("Failed to intercept chat input: {}", e);
                    }
                }
            },
        );
        time::drive_watch(watch, interval_ms)?;

        Ok(controller)
    }
}

#[cfg(target_arch = "wasm32")]
pub use page::{SharedController, start};
