//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure string helpers with no host or network dependencies, kept separate so
//! the markup builders stay easy to test.

pub mod date;
pub mod html;
