//! Application-level collaborators injected into pages and components.
//!
//! DESIGN
//! ======
//! Nothing here is a process-wide singleton. The embedding application builds
//! one [`Services`] bundle and hands it to every widget it creates, so each
//! widget can be exercised in isolation with fakes.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
#[cfg(test)]
#[path = "app_helpers_test.rs"]
pub mod test_helpers;

use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::{AccountResource, TransactionResource};

/// Runs a task on the UI thread's executor.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Synchronous yes/no prompt guarding destructive actions.
pub trait ConfirmationGate {
    /// Ask the user; `true` only on explicit agreement.
    fn ask(&self, message: &str) -> bool;
}

/// A dialog that can be opened.
pub trait Modal {
    fn open(&self);
}

/// Lookup of dialogs by name.
pub trait ModalRegistry {
    fn get(&self, name: &str) -> Option<Rc<dyn Modal>>;
}

/// Cross-widget refresh hooks invoked after successful mutations.
pub trait AppCoordinator {
    /// Refresh every widget (account list, balances, current page).
    fn refresh_all(&self);
    /// Refresh the current page and the widgets that summarize it.
    fn refresh_current(&self);
}

/// Registry backed by a name → modal map.
#[derive(Default, Clone)]
pub struct NamedModals {
    modals: HashMap<String, Rc<dyn Modal>>,
}

impl NamedModals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, modal: Rc<dyn Modal>) -> Self {
        self.modals.insert(name.into(), modal);
        self
    }
}

impl ModalRegistry for NamedModals {
    fn get(&self, name: &str) -> Option<Rc<dyn Modal>> {
        self.modals.get(name).cloned()
    }
}

/// Everything a page needs from the rest of the application.
#[derive(Clone)]
pub struct Services {
    pub accounts: Rc<dyn AccountResource>,
    pub transactions: Rc<dyn TransactionResource>,
    pub confirm: Rc<dyn ConfirmationGate>,
    pub coordinator: Rc<dyn AppCoordinator>,
    pub modals: Rc<dyn ModalRegistry>,
    pub spawner: Spawner,
}

impl Services {
    /// Hand `task` to the configured spawner.
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        (self.spawner)(task.boxed_local());
    }
}
