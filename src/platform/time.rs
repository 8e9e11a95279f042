//! Interval ticks for element discovery

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::error::{Error, Result};
use crate::watch::{ElementWatch, WatchState};

/// Poll a watch on a browser interval until it finds or stops.
///
/// The interval is cleared on the first tick that leaves `Watching`; until
/// then it keeps running for the life of the page.
pub fn drive_watch<T: 'static>(watch: ElementWatch<T>, interval_ms: u32) -> Result<()> {
    let window = web_sys::window().ok_or(Error::MissingGlobal("window"))?;

    let watch = Rc::new(RefCell::new(watch));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_handle = handle.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let state = watch.borrow_mut().poll();
        if state == WatchState::Watching {
            return;
        }

        if let (Some(id), Some(window)) = (tick_handle.take(), web_sys::window()) {
            window.clear_interval_with_handle(id);
            log::debug!(
                "Watch {:?} after {} probes",
                state,
                watch.borrow().attempts()
            );
        }
    });

    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(callback, interval_ms as i32)?;
    handle.set(Some(id));
    closure.forget();

    Ok(())
}
