//! Header view model and the page effect boundary
//!
//! The controller describes what the page should show; a `UiSink` applies
//! it. In the browser that is `platform::DomSink`.

use crate::config::Config;
use crate::consts::{BUTTONS_ID, DESCRIPTION_ID, LOGO_ID, TOP_BAR_ID};
use crate::mode::Mode;

/// Logo image at the top of the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub id: &'static str,
    pub src: String,
    pub alt: String,
    pub max_px: u32,
}

/// One mode button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeButton {
    pub mode: Mode,
    pub id: String,
    pub label: &'static str,
}

/// Everything injected above the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: &'static str,
    pub logo: Logo,
    pub buttons_id: &'static str,
    pub buttons: Vec<ModeButton>,
    /// Caption element id, `None` in the classic layout
    pub description_id: Option<&'static str>,
    /// Container the header goes into
    pub container_selector: String,
}

impl Header {
    pub fn from_config(config: &Config) -> Self {
        Self {
            id: TOP_BAR_ID,
            logo: Logo {
                id: LOGO_ID,
                src: config.logo_path.clone(),
                alt: config.logo_alt.clone(),
                max_px: config.logo_max_px,
            },
            buttons_id: BUTTONS_ID,
            buttons: Mode::ALL
                .into_iter()
                .map(|mode| ModeButton {
                    mode,
                    id: mode.button_id(),
                    label: mode.label(),
                })
                .collect(),
            description_id: config.show_description.then_some(DESCRIPTION_ID),
            container_selector: config.container_selector.clone(),
        }
    }
}

/// Selection state derived from the stored mode value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Highlighted mode, `None` for an unrecognised stored value
    pub selected: Option<Mode>,
    /// Caption text, `None` when captions are off or nothing is selected
    pub caption: Option<&'static str>,
}

impl Selection {
    pub fn new(selected: Option<Mode>, show_description: bool) -> Self {
        Self {
            selected,
            caption: selected
                .filter(|_| show_description)
                .map(|m| m.description()),
        }
    }

    /// Whether a given mode's button is marked selected
    pub fn is_selected(&self, mode: Mode) -> bool {
        self.selected == Some(mode)
    }
}

/// Page mutations performed by the controller
pub trait UiSink {
    /// Handle to the discovered chat input
    type Input;

    /// Build the header and insert it into the page
    fn render_header(&mut self, header: &Header);

    /// Mark exactly the selected button and update the caption
    fn show_selection(&mut self, selection: &Selection);

    /// Replace the chat input's placeholder
    fn set_input_placeholder(&mut self, input: &Self::Input, placeholder: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layouts() {
        let header = Header::from_config(&Config::default());
        assert_eq!(header.id, "perform-top-bar");
        assert_eq!(header.description_id, Some("perform-description"));
        let ids: Vec<_> = header.buttons.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "perform-btn-goals",
                "perform-btn-feedback",
                "perform-btn-self",
            ]
        );

        let classic = Header::from_config(&Config::classic());
        assert_eq!(classic.description_id, None);
        assert_eq!(classic.logo.max_px, 180);
        assert_eq!(classic.logo.src, "/public/logo_dark.png");
    }

    #[test]
    fn test_selection_caption() {
        let sel = Selection::new(Some(Mode::Feedback), true);
        assert!(sel.is_selected(Mode::Feedback));
        assert!(!sel.is_selected(Mode::Goals));
        assert_eq!(sel.caption, Some(Mode::Feedback.description()));

        assert_eq!(Selection::new(Some(Mode::Feedback), false).caption, None);
        assert_eq!(Selection::new(None, true).caption, None);
    }
}
