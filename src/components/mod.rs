//! Markup builders and small stateless widgets.
//!
//! ARCHITECTURE
//! ============
//! `transaction_list` turns records into the list markup the transactions page
//! writes into its host; `transactions_widget` wires the create-transaction
//! launcher buttons to their modals.

pub mod transaction_list;
pub mod transactions_widget;
