//! DOM rendering and chat input events

use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, HtmlButtonElement, HtmlElement, HtmlImageElement,
    HtmlInputElement, KeyboardEvent, MouseEvent, Node,
};

use super::SharedController;
use crate::consts::{BUTTON_CLASS, DESCRIPTION_ID, SELECTED_CLASS};
use crate::controller::KeyPress;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::ui::{Header, Selection, UiSink};

/// Applies controller output to the live page
pub struct DomSink {
    document: Document,
}

impl DomSink {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .ok_or(Error::MissingGlobal("window"))?
            .document()
            .ok_or(Error::MissingGlobal("document"))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn build_header(&self, header: &Header) -> Result<HtmlElement> {
        let top_bar: HtmlElement = create(&self.document, "div")?;
        top_bar.set_id(header.id);
        set_styles(
            &top_bar,
            &[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "center"),
                ("margin-bottom", "24px"),
                ("margin-top", "16px"),
            ],
        )?;

        // Logo
        let logo: HtmlImageElement = create(&self.document, "img")?;
        logo.set_id(header.logo.id);
        logo.set_src(&header.logo.src);
        logo.set_alt(&header.logo.alt);
        let max = format!("{}px", header.logo.max_px);
        set_styles(
            &logo,
            &[
                ("max-width", max.as_str()),
                ("max-height", max.as_str()),
                ("margin-bottom", "12px"),
            ],
        )?;
        top_bar.append_child(&logo)?;

        // Button group
        let group: HtmlElement = create(&self.document, "div")?;
        group.set_id(header.buttons_id);
        set_styles(
            &group,
            &[
                ("display", "flex"),
                ("gap", "12px"),
                ("margin-bottom", "8px"),
            ],
        )?;
        for button in &header.buttons {
            let btn: HtmlButtonElement = create(&self.document, "button")?;
            btn.set_id(&button.id);
            btn.set_class_name(BUTTON_CLASS);
            btn.set_text_content(Some(button.label));
            group.append_child(&btn)?;
        }
        top_bar.append_child(&group)?;

        if let Some(id) = header.description_id {
            let caption: HtmlElement = create(&self.document, "div")?;
            caption.set_id(id);
            set_styles(
                &caption,
                &[
                    ("font-size", "14px"),
                    ("opacity", "0.8"),
                    ("text-align", "center"),
                    ("max-width", "480px"),
                ],
            )?;
            top_bar.append_child(&caption)?;
        }

        Ok(top_bar)
    }

    /// Prepend into the configured container, or into `body` without one
    fn insert_header(&self, top_bar: &HtmlElement, container_selector: &str) -> Result<()> {
        let container: Node = match self.document.query_selector(container_selector)? {
            Some(el) => el.into(),
            None => {
                log::info!("No {} container, inserting into body", container_selector);
                self.document
                    .body()
                    .ok_or(Error::MissingGlobal("body"))?
                    .into()
            }
        };

        container.insert_before(top_bar, container.first_child().as_ref())?;
        Ok(())
    }

    fn apply_selection(&self, selection: &Selection) -> Result<()> {
        for mode in Mode::ALL {
            let Some(btn) = self.document.get_element_by_id(&mode.button_id()) else {
                continue;
            };
            if selection.is_selected(mode) {
                btn.class_list().add_1(SELECTED_CLASS)?;
            } else {
                btn.class_list().remove_1(SELECTED_CLASS)?;
            }
        }

        if let Some(caption) = self.document.get_element_by_id(DESCRIPTION_ID) {
            caption.set_text_content(Some(selection.caption.unwrap_or_default()));
        }
        Ok(())
    }
}

impl UiSink for DomSink {
    type Input = HtmlInputElement;

    fn render_header(&mut self, header: &Header) {
        let result = self
            .build_header(header)
            .and_then(|top_bar| self.insert_header(&top_bar, &header.container_selector));
        if let Err(e) = result {
            log::warn!("Failed to render mode selector: {}", e);
        }
    }

    fn show_selection(&mut self, selection: &Selection) {
        if let Err(e) = self.apply_selection(selection) {
            log::warn!("Failed to update mode selection: {}", e);
        }
    }

    fn set_input_placeholder(&mut self, input: &HtmlInputElement, placeholder: &str) {
        input.set_placeholder(placeholder);
    }
}

/// Route clicks on the mode buttons to the controller
pub fn wire_mode_buttons(document: &Document, controller: &SharedController) -> Result<()> {
    for mode in Mode::ALL {
        let Some(btn) = document.get_element_by_id(&mode.button_id()) else {
            continue;
        };

        let controller = controller.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            controller.borrow_mut().select_mode(mode);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Tag the chat input's text on Enter, before the host widget sees the key.
///
/// Runs in the capture phase and only rewrites `value`; the host's own
/// submit handling is left alone.
pub fn intercept_submit(input: &HtmlInputElement, controller: SharedController) -> Result<()> {
    let target = input.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let press = KeyPress::new(event.key(), event.shift_key());
        let tagged = controller.borrow().on_key_press(&press, &target.value());
        if let Some(text) = tagged {
            target.set_value(&text);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_capture(true);
    input.add_event_listener_with_callback_and_add_event_listener_options(
        "keydown",
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();

    Ok(())
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| Error::ElementType(tag.to_string()))
}

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<()> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}
