//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is plain data owned by one page. Pages mutate it only between await
//! points, never while holding a borrow across one.

pub mod view;
