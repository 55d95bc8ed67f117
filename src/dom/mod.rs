//! Host element contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never touch the DOM directly. They write text and markup into regions
//! found by class name and bind click handlers to the controls currently
//! present. `memory` backs tests and non-browser embedders; `web` wraps a real
//! `web_sys::Element` when built with the `hydrate` feature.
//!
//! Binding is by position in the *current* element set. Replacing a region's
//! markup detaches the old elements and their handlers with them, so a handler
//! bound before a re-render can never fire afterwards.

pub mod memory;
pub mod slots;
#[cfg(feature = "hydrate")]
pub mod web;

use std::rc::Rc;

use crate::error::HostError;

/// Page title region.
pub const TITLE_CLASS: &str = "content-title";
/// Transaction list region.
pub const CONTENT_CLASS: &str = "content";
/// Single "remove account" button.
pub const REMOVE_ACCOUNT_CLASS: &str = "remove-account";
/// Per-transaction "remove" buttons, each carrying `data-id`.
pub const REMOVE_TRANSACTION_CLASS: &str = "transaction__remove";
/// Launcher button for the income modal.
pub const CREATE_INCOME_CLASS: &str = "create-income-button";
/// Launcher button for the expense modal.
pub const CREATE_EXPENSE_CLASS: &str = "create-expense-button";

/// Click callback installed on a control.
pub type ClickHandler = Rc<dyn Fn()>;

/// A clickable element located by class name and position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub class_name: String,
    pub index: usize,
    /// Value of the element's `data-id` attribute, if any.
    pub data_id: Option<String>,
}

/// Element subtree a page renders into.
pub trait Host {
    /// Replace the text content of the first element with `class_name`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::MissingElement`] if no such element exists.
    fn set_text(&self, class_name: &str, text: &str) -> Result<(), HostError>;

    /// Replace the inner markup of the first element with `class_name`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::MissingElement`] if no such element exists.
    fn set_html(&self, class_name: &str, html: &str) -> Result<(), HostError>;

    /// Controls currently carrying `class_name`, in document order.
    fn controls(&self, class_name: &str) -> Vec<Control>;

    /// Install `handler` as the sole click handler of `control`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Detached`] if the control no longer exists.
    fn set_on_click(&self, control: &Control, handler: ClickHandler) -> Result<(), HostError>;

    /// Whether at least one element carries `class_name`.
    fn has(&self, class_name: &str) -> bool {
        !self.controls(class_name).is_empty()
    }
}
