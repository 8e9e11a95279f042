//! Perform Mode - chat mode selector for the Perform Assistant page
//!
//! Core modules:
//! - `mode`: The three assistant modes and the message tag rule
//! - `persona`: Backend prompt per mode and the completion request
//! - `controller`: Mode state, persistence, and submit interception
//! - `ui`: Header view model and the `UiSink` effect boundary
//! - `watch`: Tick-driven discovery of late-rendered elements
//! - `store`: Persisted key-value storage abstraction
//! - `config`: Page configuration (classic and enhanced layouts)
//! - `platform`: Browser bindings (wasm only)

pub mod config;
pub mod controller;
pub mod error;
pub mod mode;
pub mod persona;
pub mod platform;
pub mod store;
pub mod ui;
pub mod watch;

pub use config::Config;
pub use controller::{KeyPress, ModeController};
pub use error::{Error, Result};
pub use mode::{Mode, ParsedMessage};
pub use persona::{ChatRequest, Persona};
pub use store::{MemoryStore, ModeStore};
pub use ui::{Header, Selection, UiSink};
pub use watch::{ElementWatch, WatchState};

/// Fixed identifiers of the injected markup
pub mod consts {
    /// Outer header container
    pub const TOP_BAR_ID: &str = "perform-top-bar";
    /// Logo image
    pub const LOGO_ID: &str = "perform-logo-img";
    /// Row holding the mode buttons
    pub const BUTTONS_ID: &str = "perform-mode-buttons";
    /// Buttons are `perform-btn-<mode key>`
    pub const BUTTON_ID_PREFIX: &str = "perform-btn-";
    /// Caption under the buttons (enhanced layout only)
    pub const DESCRIPTION_ID: &str = "perform-description";

    /// Class carried by every mode button
    pub const BUTTON_CLASS: &str = "perform-mode-btn";
    /// Class marking the selected mode button
    pub const SELECTED_CLASS: &str = "perform-btn-selected";

    /// LocalStorage key holding the selected mode
    pub const STORAGE_KEY: &str = "perform_mode";

    /// Placeholder the host chat widget renders its input with
    pub const HOST_INPUT_PLACEHOLDER: &str = "Type your message here";
    /// Placeholder written over the host's once the input is wired
    pub const REPLACEMENT_PLACEHOLDER: &str = "Type your message and press Enter...";

    /// Interval between input discovery probes (ms)
    pub const POLL_INTERVAL_MS: u32 = 100;
}
