//! Remote resources consumed by the view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages talk to the server only through [`AccountResource`] and
//! [`TransactionResource`]. `api` provides the HTTP implementation; tests
//! supply in-memory fakes. `types` defines the shared wire schema.
//!
//! The traits are `?Send`: everything runs on the single UI thread, and
//! browser fetch futures are not `Send`.

pub mod api;
pub mod types;

use crate::error::RemoteError;
use types::{AccountId, AccountSummary, RenderRequest, TransactionId, TransactionRecord};

/// Account CRUD used by the transactions page.
#[async_trait::async_trait(?Send)]
pub trait AccountResource {
    /// Fetch account metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the call fails or the server rejects it.
    async fn get(&self, account_id: &AccountId) -> Result<AccountSummary, RemoteError>;

    /// Delete an account.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the call fails or the server rejects it.
    async fn remove(&self, account_id: &AccountId) -> Result<(), RemoteError>;
}

/// Transaction CRUD used by the transactions page.
#[async_trait::async_trait(?Send)]
pub trait TransactionResource {
    /// List the transactions matching `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the call fails or the server rejects it.
    async fn list(&self, request: &RenderRequest) -> Result<Vec<TransactionRecord>, RemoteError>;

    /// Delete one transaction of one account.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the call fails or the server rejects it.
    async fn remove(&self, account_id: &AccountId, transaction_id: &TransactionId) -> Result<(), RemoteError>;
}
