//! Transaction-history view for a single account.
//!
//! The crate renders one account's transactions into a host element, lets the
//! user delete transactions or the account itself, and keeps the list in step
//! with server-confirmed state after every mutation. It compiles natively (the
//! in-memory host is used by tests and non-browser embedders) and to
//! WebAssembly with the `hydrate` feature, which adds the `web-sys` host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | [`pages::transactions::TransactionsPage`], the stateful list controller |
//! | [`components`] | Markup for the list and the create-transaction launcher |
//! | [`state`] | Render request bookkeeping and the stale-response token |
//! | [`net`] | Resource traits, wire types and the HTTP implementation |
//! | [`dom`] | The [`dom::Host`] contract and its in-memory/browser implementations |
//! | [`app`] | Collaborators injected into pages (confirmation, modals, coordinator) |
//! | [`config`] | Runtime configuration |
//! | [`error`] | Error taxonomy |
//! | [`util`] | Date formatting and HTML escaping |

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::Services;
pub use config::ViewConfig;
pub use error::{HostError, RemoteError, ViewError};
pub use pages::transactions::{MutationOutcome, RenderOutcome, TransactionsPage};
