//! Browser [`Host`] over a `web_sys::Element`, plus the browser-side
//! collaborators (confirmation prompt and task spawner).
//!
//! Closures handed to the DOM are kept alive per control slot. Rebinding a
//! slot drops the previous closure, and slots past the current control count
//! are dropped with it.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::slots::HandlerSlots;
use super::{ClickHandler, Control, Host};
use crate::app::{ConfirmationGate, Spawner};
use crate::error::HostError;

/// Host backed by a live DOM element.
pub struct WebHost {
    root: web_sys::Element,
    closures: RefCell<HandlerSlots<Closure<dyn FnMut()>>>,
}

impl WebHost {
    #[must_use]
    pub fn new(root: web_sys::Element) -> Self {
        Self { root, closures: RefCell::new(HandlerSlots::default()) }
    }

    /// Look up the host element by CSS selector in the current document.
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        match document.query_selector(selector) {
            Ok(Some(root)) => Some(Self::new(root)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "host selector lookup failed");
                None
            }
        }
    }

    fn first(&self, class_name: &str) -> Result<web_sys::Element, HostError> {
        self.root
            .get_elements_by_class_name(class_name)
            .item(0)
            .ok_or_else(|| HostError::MissingElement(class_name.to_owned()))
    }
}

impl Host for WebHost {
    fn set_text(&self, class_name: &str, text: &str) -> Result<(), HostError> {
        self.first(class_name)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_html(&self, class_name: &str, html: &str) -> Result<(), HostError> {
        self.first(class_name)?.set_inner_html(html);
        let root = &self.root;
        self.closures
            .borrow_mut()
            .retain_live(|class| usize::try_from(root.get_elements_by_class_name(class).length()).unwrap_or(usize::MAX));
        Ok(())
    }

    fn controls(&self, class_name: &str) -> Vec<Control> {
        let collection = self.root.get_elements_by_class_name(class_name);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .enumerate()
            .map(|(index, el)| Control {
                class_name: class_name.to_owned(),
                index,
                data_id: el.get_attribute("data-id"),
            })
            .collect()
    }

    fn set_on_click(&self, control: &Control, handler: ClickHandler) -> Result<(), HostError> {
        let detached = || HostError::Detached { class_name: control.class_name.clone(), index: control.index };
        let index = u32::try_from(control.index).map_err(|_| detached())?;
        let collection = self.root.get_elements_by_class_name(&control.class_name);
        let live = usize::try_from(collection.length()).map_err(|_| detached())?;
        let element = collection
            .item(index)
            .ok_or_else(detached)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| detached())?;

        let closure = Closure::<dyn FnMut()>::new(move || handler());
        element.set_onclick(Some(closure.as_ref().unchecked_ref()));
        self.closures.borrow_mut().bind(control, closure, live);
        Ok(())
    }
}

/// Confirmation through `window.confirm`.
pub struct BrowserConfirm;

impl ConfirmationGate for BrowserConfirm {
    fn ask(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = ?e, "confirm prompt failed");
                false
            }
        }
    }
}

/// Spawner running tasks on the browser microtask queue.
#[must_use]
pub fn browser_spawner() -> Spawner {
    Rc::new(|task: LocalBoxFuture<'static, ()>| wasm_bindgen_futures::spawn_local(task))
}
