//! Transaction history of one account.
//!
//! DESIGN
//! ======
//! `TransactionsPage` is a cheap handle (`Rc`) over the page state. Click
//! handlers hold a `Weak` to it, so dropping the last handle silences every
//! handler still attached to the host.
//!
//! RENDER PIPELINE
//! ===============
//! 1. `begin_render` stores the request and issues a render token.
//! 2. Fetch the account, check the token, write the title.
//! 3. Fetch the list, check the token, replace the list region and re-bind
//!    every handler in one step.
//!
//! A token check that fails means another `render` or `clear` started in the
//! meantime; the response is dropped without touching the host. State borrows
//! are never held across an await.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::app::Services;
use crate::components::transaction_list::transactions_html;
use crate::config::ViewConfig;
use crate::dom::{CONTENT_CLASS, Host, REMOVE_ACCOUNT_CLASS, REMOVE_TRANSACTION_CLASS, TITLE_CLASS};
use crate::error::ViewError;
use crate::net::types::{AccountId, RenderRequest, TransactionId};
use crate::state::view::{Phase, RenderToken, ViewState};

/// Result of a `render` or `update` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No request was given or stored; nothing was fetched.
    NoRequest,
    /// Title and list were both written.
    Rendered { count: usize },
    /// A newer render or a `clear` superseded this one.
    Stale,
    /// A fetch or host write failed; the host keeps what it showed before
    /// the failing step.
    Failed(ViewError),
}

/// Result of a destructive action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// No account is loaded, so there is nothing to act on.
    NoRequest,
    /// The user declined the confirmation prompt.
    Declined,
    Completed,
    Failed(ViewError),
}

struct PageInner {
    host: Rc<dyn Host>,
    services: Services,
    config: ViewConfig,
    state: RefCell<ViewState>,
}

/// Controller for the transactions page.
#[derive(Clone)]
pub struct TransactionsPage {
    inner: Rc<PageInner>,
}

impl TransactionsPage {
    /// Attach to `host` and bind the page controls.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidHost`] if `host` is absent or has no
    /// remove-account control, and [`ViewError::Host`] if binding fails.
    pub fn new(host: Option<Rc<dyn Host>>, services: Services, config: ViewConfig) -> Result<Self, ViewError> {
        let host = host.ok_or_else(|| ViewError::InvalidHost("host element is absent".to_owned()))?;
        if !host.has(REMOVE_ACCOUNT_CLASS) {
            return Err(ViewError::InvalidHost(format!("missing `.{REMOVE_ACCOUNT_CLASS}` button")));
        }
        let page = Self { inner: Rc::new(PageInner { host, services, config, state: RefCell::new(ViewState::default()) }) };
        page.register_events()?;
        Ok(page)
    }

    /// The request the page was last asked to render, if any.
    #[must_use]
    pub fn request(&self) -> Option<RenderRequest> {
        self.inner.state.borrow().request().cloned()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase()
    }

    /// Render `request`, remembering it for [`update`](Self::update).
    ///
    /// An absent request is stored as such and fetches nothing; it also
    /// invalidates any render still in flight.
    pub async fn render(&self, request: Option<RenderRequest>) -> RenderOutcome {
        let token = self.inner.state.borrow_mut().begin_render(request.clone());
        let Some(request) = request else {
            return RenderOutcome::NoRequest;
        };

        match self.load(token, &request).await {
            Ok(count) => RenderOutcome::Rendered { count },
            Err(ViewError::StaleResponse) => {
                tracing::debug!(account_id = %request.account_id, "discarding superseded render");
                RenderOutcome::Stale
            }
            Err(e) => {
                tracing::error!(account_id = %request.account_id, error = %e, "render failed");
                RenderOutcome::Failed(e)
            }
        }
    }

    /// Render the stored request again. Fetches nothing when none is stored.
    pub async fn update(&self) -> RenderOutcome {
        let request = self.request();
        match request {
            Some(request) => self.render(Some(request)).await,
            None => RenderOutcome::NoRequest,
        }
    }

    /// Empty the list, restore the placeholder title and forget the request.
    pub fn clear(&self) {
        self.inner.state.borrow_mut().clear();
        if let Err(e) = self.reset_host() {
            tracing::error!(error = %e, "clearing the page failed");
        }
    }

    /// Delete the loaded account after confirmation.
    pub async fn remove_account(&self) -> MutationOutcome {
        let target = {
            let state = self.inner.state.borrow();
            state
                .request()
                .map(|r| (r.account_id.clone(), state.account_name().map(str::to_owned)))
        };
        let Some((account_id, name)) = target else {
            tracing::warn!("remove account requested with no account loaded");
            return MutationOutcome::NoRequest;
        };

        let label = name.unwrap_or_else(|| account_id.to_string());
        if !self.confirm(&format!("Are you sure you want to remove account {label}?")) {
            return MutationOutcome::Declined;
        }

        let services = &self.inner.services;
        match services.accounts.remove(&account_id).await {
            Ok(()) => {
                tracing::info!(%account_id, "account removed");
                self.clear();
                services.coordinator.refresh_all();
                MutationOutcome::Completed
            }
            Err(e) => {
                tracing::error!(%account_id, error = %e, "account removal failed");
                MutationOutcome::Failed(e.into())
            }
        }
    }

    /// Delete one transaction of the loaded account after confirmation.
    pub async fn remove_transaction(&self, transaction_id: &TransactionId) -> MutationOutcome {
        let Some(account_id) = self.current_account() else {
            tracing::warn!(%transaction_id, "remove transaction requested with no account loaded");
            return MutationOutcome::NoRequest;
        };
        if !self.confirm("Are you sure you want to remove this transaction?") {
            return MutationOutcome::Declined;
        }

        let services = &self.inner.services;
        match services.transactions.remove(&account_id, transaction_id).await {
            Ok(()) => {
                tracing::info!(%account_id, %transaction_id, "transaction removed");
                services.coordinator.refresh_current();
                MutationOutcome::Completed
            }
            Err(e) => {
                tracing::error!(%account_id, %transaction_id, error = %e, "transaction removal failed");
                MutationOutcome::Failed(e.into())
            }
        }
    }

    /// Bind the remove-account button and every transaction remove button
    /// currently in the host. Each control ends up with exactly one handler.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Host`] if a control vanished while binding.
    pub fn register_events(&self) -> Result<(), ViewError> {
        let host = &self.inner.host;

        for control in host.controls(REMOVE_ACCOUNT_CLASS) {
            let weak = Rc::downgrade(&self.inner);
            host.set_on_click(
                &control,
                Rc::new(move || {
                    if let Some(page) = Self::upgrade(&weak) {
                        let task = page.clone();
                        page.inner.services.spawn(async move {
                            task.remove_account().await;
                        });
                    }
                }),
            )?;
        }

        for control in host.controls(REMOVE_TRANSACTION_CLASS) {
            let Some(data_id) = control.data_id.clone() else {
                tracing::warn!(index = control.index, "transaction remove button has no data-id");
                continue;
            };
            let transaction_id = TransactionId::new(data_id);
            let weak = Rc::downgrade(&self.inner);
            host.set_on_click(
                &control,
                Rc::new(move || {
                    if let Some(page) = Self::upgrade(&weak) {
                        let task = page.clone();
                        let transaction_id = transaction_id.clone();
                        page.inner.services.spawn(async move {
                            task.remove_transaction(&transaction_id).await;
                        });
                    }
                }),
            )?;
        }
        Ok(())
    }

    fn upgrade(weak: &Weak<PageInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn current_account(&self) -> Option<AccountId> {
        self.inner.state.borrow().request().map(|r| r.account_id.clone())
    }

    fn confirm(&self, message: &str) -> bool {
        self.inner.services.confirm.ask(message)
    }

    fn ensure_current(&self, token: RenderToken) -> Result<(), ViewError> {
        if self.inner.state.borrow().is_current(token) { Ok(()) } else { Err(ViewError::StaleResponse) }
    }

    async fn load(&self, token: RenderToken, request: &RenderRequest) -> Result<usize, ViewError> {
        let inner = &self.inner;

        let account = inner.services.accounts.get(&request.account_id).await;
        self.ensure_current(token)?;
        let account = account?;
        inner.host.set_text(TITLE_CLASS, &account.name)?;
        inner.state.borrow_mut().title_rendered(token, &account.name);

        let records = inner.services.transactions.list(request).await;
        self.ensure_current(token)?;
        let records = records?;
        inner
            .host
            .set_html(CONTENT_CLASS, &transactions_html(&records, &inner.config.currency_symbol))?;
        self.register_events()?;
        inner.state.borrow_mut().loaded(token);

        tracing::debug!(account_id = %request.account_id, count = records.len(), "transactions rendered");
        Ok(records.len())
    }

    fn reset_host(&self) -> Result<(), ViewError> {
        let inner = &self.inner;
        inner
            .host
            .set_html(CONTENT_CLASS, &transactions_html(&[], &inner.config.currency_symbol))?;
        inner.host.set_text(TITLE_CLASS, &inner.config.placeholder_title)?;
        self.register_events()
    }
}
