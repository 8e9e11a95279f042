//! Mode controller
//!
//! Single owner of the selected mode. Reads and writes it through a
//! `ModeStore`, draws through a `UiSink`, and decides how outgoing chat
//! text gets tagged.

use crate::config::Config;
use crate::mode::{self, Mode};
use crate::store::ModeStore;
use crate::ui::{Header, Selection, UiSink};

/// A key press seen by the chat input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key` value
    pub key: String,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }

    /// Plain Enter sends the message; Shift+Enter does not
    pub fn is_submit(&self) -> bool {
        self.key == "Enter" && !self.shift
    }
}

/// Selected mode state plus the page it drives
pub struct ModeController<S, U> {
    config: Config,
    store: S,
    sink: U,
    /// Raw stored value; may be outside the known modes
    current: String,
    input_wired: bool,
}

impl<S: ModeStore, U: UiSink> ModeController<S, U> {
    pub fn new(config: Config, store: S, sink: U) -> Self {
        Self {
            config,
            store,
            sink,
            current: Mode::default().key().to_string(),
            input_wired: false,
        }
    }

    /// Load (or default) the stored mode, then draw the header
    pub fn initialize(&mut self) {
        self.current = self
            .store
            .get(&self.config.storage_key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| Mode::default().key().to_string());
        self.store.set(&self.config.storage_key, &self.current);

        if self.mode().is_none() {
            log::warn!("Unrecognised stored mode {:?}", self.current);
        }
        log::info!("Mode controller initialized (mode: {})", self.current);

        let header = Header::from_config(&self.config);
        self.sink.render_header(&header);
        self.refresh_selection();
    }

    /// Switch to a new mode and persist it
    pub fn select_mode(&mut self, mode: Mode) {
        self.current = mode.key().to_string();
        self.store.set(&self.config.storage_key, &self.current);
        self.refresh_selection();
        log::info!("Mode selected: {}", self.current);
    }

    /// Wire the discovered chat input.
    ///
    /// Returns `false` if an input is already wired, in which case the caller
    /// must not install another key handler.
    pub fn attach_input(&mut self, input: &U::Input) -> bool {
        if self.input_wired {
            return false;
        }

        self.sink
            .set_input_placeholder(input, &self.config.replacement_placeholder);
        self.input_wired = true;
        log::info!("Chat input wired");
        true
    }

    /// Tag rule for a key press on the chat input.
    ///
    /// Returns the replacement text, or `None` if the text stays as it is.
    pub fn on_key_press(&self, key: &KeyPress, text: &str) -> Option<String> {
        if !key.is_submit() {
            return None;
        }
        mode::apply_tag(&self.current, text)
    }

    /// Known mode currently selected
    pub fn mode(&self) -> Option<Mode> {
        Mode::from_key(&self.current)
    }

    /// Raw stored value
    pub fn raw_mode(&self) -> &str {
        &self.current
    }

    pub fn is_input_wired(&self) -> bool {
        self.input_wired
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &U {
        &self.sink
    }

    /// Tear down, returning the store (used to simulate a reload)
    pub fn into_store(self) -> S {
        self.store
    }

    fn refresh_selection(&mut self) {
        let selection = Selection::new(self.mode(), self.config.show_description);
        self.sink.show_selection(&selection);
    }
}
