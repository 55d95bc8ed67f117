//! Per-control storage for values that must outlive a binding call, such as
//! the JS closures a browser host hands to the DOM.
//!
//! Slots are keyed by `(class, index)`. After a shorter re-render the slots at
//! or past the new control count belong to detached elements and are dropped.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use std::collections::HashMap;

use super::Control;

#[derive(Debug)]
pub struct HandlerSlots<V> {
    slots: HashMap<(String, usize), V>,
}

impl<V> Default for HandlerSlots<V> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<V> HandlerSlots<V> {
    /// Store `value` for `control`, replacing its previous value, and drop the
    /// slots of `control.class_name` at or past `live` controls.
    pub fn bind(&mut self, control: &Control, value: V, live: usize) {
        self.slots.insert((control.class_name.clone(), control.index), value);
        self.slots
            .retain(|(class_name, index), _| class_name != &control.class_name || *index < live);
    }

    /// Drop every slot whose index is at or past the live control count that
    /// `live` reports for its class. Used after markup replacement, which may
    /// leave a class with no controls to rebind.
    pub fn retain_live(&mut self, live: impl Fn(&str) -> usize) {
        self.slots.retain(|(class_name, index), _| *index < live(class_name));
    }

    /// Number of stored values for `class_name`.
    #[must_use]
    pub fn count(&self, class_name: &str) -> usize {
        self.slots.keys().filter(|(c, _)| c == class_name).count()
    }

    #[must_use]
    pub fn contains(&self, control: &Control) -> bool {
        self.slots.contains_key(&(control.class_name.clone(), control.index))
    }
}
