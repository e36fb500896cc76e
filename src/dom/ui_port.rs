// ============================================================================
// UI PORT - What the view models may do to the page
// ============================================================================
// View models only talk to this trait; `DomUi` is the browser implementation.
// ============================================================================

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::*;
use crate::models::TorrentFile;

/// One "Label: value" line of an info panel
#[derive(Debug, Clone, PartialEq)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
    /// Rendered as a link when present
    pub href: Option<String>,
}

impl InfoEntry {
    /// Bold part of the line, separator included
    pub fn label_text(&self) -> String {
        format!("{}: ", self.label)
    }
}

#[async_trait(?Send)]
pub trait UiPort {
    /// Value of an input field, empty when the field does not exist
    fn get_field(&self, id: &str) -> String;
    fn set_field(&self, id: &str, value: &str);
    fn is_checked(&self, id: &str) -> bool;

    /// Sets `style.display` to `display` (`"block"`, `"flex"`...)
    fn show_element(&self, id: &str, display: &str);
    fn hide_element(&self, id: &str);

    fn text(&self, id: &str) -> String;
    fn set_text(&self, id: &str, text: &str);
    /// Replaces the class attribute
    fn set_class(&self, id: &str, class: &str);
    fn toggle_class(&self, id: &str, class: &str, on: bool);
    fn set_info_panel(&self, id: &str, entries: &[InfoEntry], note: &str);

    fn scroll_into_view(&self, selector: &str);
    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;

    /// First file selected in a file input
    async fn read_file(&self, id: &str) -> Result<Option<TorrentFile>, String>;
}

/// Browser implementation over web-sys
pub struct DomUi;

impl DomUi {
    fn with_element(&self, id: &str, f: impl FnOnce(&web_sys::Element) -> Result<(), JsValue>) {
        match get_element_by_id(id) {
            Some(element) => {
                if let Err(e) = f(&element) {
                    log::warn!("⚠️ [DOM] #{}: {:?}", id, e);
                }
            }
            None => log::warn!("⚠️ [DOM] Element #{} not found", id),
        }
    }

    fn build_info_panel(entries: &[InfoEntry], note: &str) -> Result<Vec<web_sys::Element>, JsValue> {
        let mut nodes = Vec::new();
        for entry in entries {
            nodes.push(ElementBuilder::new("strong")?.text(&entry.label_text()).build());
            let value = match &entry.href {
                Some(href) => ElementBuilder::new("a")?
                    .attr("href", href)?
                    .attr("target", "_blank")?
                    .attr("rel", "noopener")?
                    .text(&entry.value)
                    .build(),
                None => ElementBuilder::new("span")?.text(&entry.value).build(),
            };
            nodes.push(value);
            nodes.push(ElementBuilder::new("br")?.build());
        }
        if !note.is_empty() {
            nodes.push(ElementBuilder::new("br")?.build());
            nodes.push(ElementBuilder::new("em")?.text(note).build());
        }
        Ok(nodes)
    }
}

#[async_trait(?Send)]
impl UiPort for DomUi {
    fn get_field(&self, id: &str) -> String {
        get_input_value(id).unwrap_or_default()
    }

    fn set_field(&self, id: &str, value: &str) {
        if !set_input_value(id, value) {
            log::warn!("⚠️ [DOM] Input #{} not found", id);
        }
    }

    fn is_checked(&self, id: &str) -> bool {
        input_element(id).map(|input| input.checked()).unwrap_or(false)
    }

    fn show_element(&self, id: &str, display: &str) {
        self.with_element(id, |element| set_display(element, display));
    }

    fn hide_element(&self, id: &str) {
        self.with_element(id, |element| set_display(element, "none"));
    }

    fn text(&self, id: &str) -> String {
        get_element_by_id(id)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.with_element(id, |element| {
            set_text_content(element, text);
            Ok(())
        });
    }

    fn set_class(&self, id: &str, class: &str) {
        self.with_element(id, |element| {
            set_class_name(element, class);
            Ok(())
        });
    }

    fn toggle_class(&self, id: &str, class: &str, on: bool) {
        self.with_element(id, |element| {
            if on {
                add_class(element, class)
            } else {
                remove_class(element, class)
            }
        });
    }

    fn set_info_panel(&self, id: &str, entries: &[InfoEntry], note: &str) {
        self.with_element(id, |element| {
            set_inner_html(element, "");
            for node in Self::build_info_panel(entries, note)? {
                append_child(element, &node)?;
            }
            Ok(())
        });
    }

    fn scroll_into_view(&self, selector: &str) {
        match query_selector(selector) {
            Ok(Some(element)) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            Ok(None) => log::debug!("[DOM] {} not found, skipping scroll", selector),
            Err(e) => log::warn!("⚠️ [DOM] Invalid selector {}: {:?}", selector, e),
        }
    }

    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    async fn read_file(&self, id: &str) -> Result<Option<TorrentFile>, String> {
        let Some(file) = input_element(id)
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return Ok(None);
        };

        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?;
        Ok(Some(TorrentFile {
            name: file.name(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        }))
    }
}
