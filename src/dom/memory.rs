//! In-memory [`Host`] used by tests and non-browser embedders.
//!
//! DESIGN
//! ======
//! The tree is two levels deep: fixed top-level elements (regions and static
//! buttons) and the elements parsed out of markup written into a region.
//! Parsing only looks at start tags and their `class` and `data-id`
//! attributes, which is all the page contract needs. Every write assigns fresh
//! node ids, so handlers keyed by the old ids are dropped with their nodes.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;

use super::{
    CONTENT_CLASS, CREATE_EXPENSE_CLASS, CREATE_INCOME_CLASS, ClickHandler, Control, Host, REMOVE_ACCOUNT_CLASS,
    TITLE_CLASS,
};
use crate::error::HostError;

#[derive(Debug)]
struct Node {
    id: u64,
    classes: Vec<String>,
    data_id: Option<String>,
    text: String,
    html: String,
    children: Vec<Node>,
}

impl Node {
    fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }
}

#[derive(Default)]
struct Tree {
    next_id: u64,
    nodes: Vec<Node>,
    handlers: HashMap<u64, ClickHandler>,
}

impl Tree {
    fn alloc(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// All nodes in document order.
    fn walk(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().flat_map(|n| std::iter::once(n).chain(n.children.iter()))
    }

    fn first_mut(&mut self, class_name: &str) -> Option<&mut Node> {
        for node in &mut self.nodes {
            if node.has_class(class_name) {
                return Some(node);
            }
            if let Some(child) = node.children.iter_mut().find(|c| c.has_class(class_name)) {
                return Some(child);
            }
        }
        None
    }

    fn resolve(&self, control: &Control) -> Option<u64> {
        self.walk()
            .filter(|n| n.has_class(&control.class_name))
            .nth(control.index)
            .map(|n| n.id)
    }

    /// Replace the children of the first `class_name` element, dropping the
    /// handlers of the children it had.
    fn replace_children(&mut self, class_name: &str, children: Vec<ParsedElement>) -> Result<&mut Node, HostError> {
        let fresh: Vec<Node> = children
            .into_iter()
            .map(|el| Node {
                id: self.alloc(),
                classes: el.classes,
                data_id: el.data_id,
                text: String::new(),
                html: String::new(),
                children: Vec::new(),
            })
            .collect();
        let node = self
            .first_mut(class_name)
            .ok_or_else(|| HostError::MissingElement(class_name.to_owned()))?;
        let old = std::mem::replace(&mut node.children, fresh);
        let stale: Vec<u64> = old.iter().map(|c| c.id).collect();
        for id in stale {
            self.handlers.remove(&id);
        }
        self.first_mut(class_name)
            .ok_or_else(|| HostError::MissingElement(class_name.to_owned()))
    }
}

struct ParsedElement {
    classes: Vec<String>,
    data_id: Option<String>,
}

/// Value of attribute `name` inside a start tag body.
fn attribute(tag: &str, name: &str) -> Option<String> {
    for (pos, _) in tag.match_indices(name) {
        let before_ok = tag[..pos].chars().next_back().is_none_or(char::is_whitespace);
        let rest = &tag[pos + name.len()..];
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        if !before_ok {
            continue;
        }
        let mut chars = rest.chars();
        let quote = match chars.next() {
            Some(q @ ('"' | '\'')) => q,
            _ => continue,
        };
        let value = chars.as_str();
        if let Some(end) = value.find(quote) {
            return Some(value[..end].to_owned());
        }
    }
    None
}

/// Start tags of `html` that carry a `class` attribute, in document order.
fn parse_elements(html: &str) -> Vec<ParsedElement> {
    let mut out = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        let Some(end) = rest.find('>') else {
            break;
        };
        let tag = &rest[..end];
        rest = &rest[end + 1..];
        if tag.starts_with('/') || tag.starts_with('!') {
            continue;
        }
        let Some(class_attr) = attribute(tag, "class") else {
            continue;
        };
        out.push(ParsedElement {
            classes: class_attr.split_whitespace().map(str::to_owned).collect(),
            data_id: attribute(tag, "data-id"),
        });
    }
    out
}

/// Host tree kept entirely in memory.
#[derive(Default)]
pub struct MemoryHost {
    tree: RefCell<Tree>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout expected by the transactions page.
    #[must_use]
    pub fn transactions_page() -> Self {
        Self::new()
            .with_element(&format!("{TITLE_CLASS} h1"))
            .with_element(&format!("btn btn-danger {REMOVE_ACCOUNT_CLASS}"))
            .with_element(CONTENT_CLASS)
    }

    /// Layout expected by the create-transaction launcher.
    #[must_use]
    pub fn transactions_widget() -> Self {
        Self::new()
            .with_element(&format!("btn btn-success {CREATE_INCOME_CLASS}"))
            .with_element(&format!("btn btn-danger {CREATE_EXPENSE_CLASS}"))
    }

    /// Append a top-level element with the given space-separated classes.
    #[must_use]
    pub fn with_element(self, classes: &str) -> Self {
        {
            let mut tree = self.tree.borrow_mut();
            let id = tree.alloc();
            tree.nodes.push(Node {
                id,
                classes: classes.split_whitespace().map(str::to_owned).collect(),
                data_id: None,
                text: String::new(),
                html: String::new(),
                children: Vec::new(),
            });
        }
        self
    }

    /// Text last written to the first `class_name` element.
    #[must_use]
    pub fn text(&self, class_name: &str) -> Option<String> {
        self.tree
            .borrow()
            .walk()
            .find(|n| n.has_class(class_name))
            .map(|n| n.text.clone())
    }

    /// Markup last written to the first `class_name` element.
    #[must_use]
    pub fn html(&self, class_name: &str) -> Option<String> {
        self.tree
            .borrow()
            .walk()
            .find(|n| n.has_class(class_name))
            .map(|n| n.html.clone())
    }

    /// Number of installed click handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.tree.borrow().handlers.len()
    }

    /// Fire the click handler of `control`. Returns whether one was installed.
    pub fn click(&self, control: &Control) -> bool {
        let handler = {
            let tree = self.tree.borrow();
            tree.resolve(control).and_then(|id| tree.handlers.get(&id).cloned())
        };
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Click the first `class_name` control whose `data-id` equals `data_id`.
    pub fn click_data_id(&self, class_name: &str, data_id: &str) -> bool {
        let control = self
            .controls(class_name)
            .into_iter()
            .find(|c| c.data_id.as_deref() == Some(data_id));
        control.is_some_and(|c| self.click(&c))
    }

    /// Click the first `class_name` control.
    pub fn click_first(&self, class_name: &str) -> bool {
        let control = self.controls(class_name).into_iter().next();
        control.is_some_and(|c| self.click(&c))
    }
}

impl Host for MemoryHost {
    fn set_text(&self, class_name: &str, text: &str) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        let node = tree.replace_children(class_name, Vec::new())?;
        node.text = text.to_owned();
        node.html = crate::util::html::escape(text);
        Ok(())
    }

    fn set_html(&self, class_name: &str, html: &str) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        let node = tree.replace_children(class_name, parse_elements(html))?;
        node.text = String::new();
        node.html = html.to_owned();
        Ok(())
    }

    fn controls(&self, class_name: &str) -> Vec<Control> {
        self.tree
            .borrow()
            .walk()
            .filter(|n| n.has_class(class_name))
            .enumerate()
            .map(|(index, n)| Control { class_name: class_name.to_owned(), index, data_id: n.data_id.clone() })
            .collect()
    }

    fn set_on_click(&self, control: &Control, handler: ClickHandler) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        let id = tree
            .resolve(control)
            .ok_or_else(|| HostError::Detached { class_name: control.class_name.clone(), index: control.index })?;
        tree.handlers.insert(id, handler);
        Ok(())
    }
}
