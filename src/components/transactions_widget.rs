//! Create-transaction launcher: two buttons that open the income and expense
//! creation modals.

#[cfg(test)]
#[path = "transactions_widget_test.rs"]
mod transactions_widget_test;

use std::rc::Rc;

use crate::app::ModalRegistry;
use crate::dom::{CREATE_EXPENSE_CLASS, CREATE_INCOME_CLASS, Host};
use crate::error::ViewError;

/// Registry name of the income creation modal.
pub const NEW_INCOME_MODAL: &str = "newIncome";
/// Registry name of the expense creation modal.
pub const NEW_EXPENSE_MODAL: &str = "newExpense";

const LAUNCHERS: [(&str, &str); 2] = [(CREATE_INCOME_CLASS, NEW_INCOME_MODAL), (CREATE_EXPENSE_CLASS, NEW_EXPENSE_MODAL)];

pub struct TransactionsWidget {
    host: Rc<dyn Host>,
    modals: Rc<dyn ModalRegistry>,
}

impl TransactionsWidget {
    /// Attach to `host` and bind both launcher buttons.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidHost`] if `host` is absent or lacks either
    /// button, and [`ViewError::Host`] if binding fails.
    pub fn new(host: Option<Rc<dyn Host>>, modals: Rc<dyn ModalRegistry>) -> Result<Self, ViewError> {
        let host = host.ok_or_else(|| ViewError::InvalidHost("host element is absent".to_owned()))?;
        for (class_name, _) in LAUNCHERS {
            if !host.has(class_name) {
                return Err(ViewError::InvalidHost(format!("missing `.{class_name}` button")));
            }
        }
        let widget = Self { host, modals };
        widget.register_events()?;
        Ok(widget)
    }

    /// Bind each launcher button to its modal.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Host`] if a button vanished while binding.
    pub fn register_events(&self) -> Result<(), ViewError> {
        for (class_name, modal_name) in LAUNCHERS {
            for control in self.host.controls(class_name) {
                let modals = self.modals.clone();
                self.host.set_on_click(
                    &control,
                    Rc::new(move || match modals.get(modal_name) {
                        Some(modal) => modal.open(),
                        None => tracing::warn!(modal = modal_name, "modal is not registered"),
                    }),
                )?;
            }
        }
        Ok(())
    }
}
