//! Page controllers.
//!
//! A page owns its host subtree exclusively: it is the only writer of the
//! regions it renders into and the only binder of handlers on its controls.

pub mod transactions;
