use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dom::REMOVE_TRANSACTION_CLASS;

fn counting_handler(counter: &Rc<Cell<u32>>) -> ClickHandler {
    let counter = counter.clone();
    Rc::new(move || counter.set(counter.get() + 1))
}

// =============================================================
// Markup parsing
// =============================================================

#[test]
fn parse_elements_reads_classes_and_data_ids() {
    let parsed = parse_elements(
        r#"<div class="transaction row"><button class="btn transaction__remove" data-id="12"><i class="fa"></i></button></div>"#,
    );
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0].classes, vec!["transaction", "row"]);
    assert_eq!(parsed[1].data_id.as_deref(), Some("12"));
    assert_eq!(parsed[2].data_id, None);
}

#[test]
fn parse_elements_skips_closing_tags_and_classless_elements() {
    let parsed = parse_elements("<p>plain</p><!-- note --><span class='x'>y</span>");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].classes, vec!["x"]);
}

#[test]
fn attribute_ignores_suffix_matches() {
    assert_eq!(attribute(r#"div data-class="a" class="b""#, "class").as_deref(), Some("b"));
    assert_eq!(attribute("div class=unquoted", "class"), None);
}

// =============================================================
// Host behavior
// =============================================================

#[test]
fn set_text_and_html_are_observable() {
    let host = MemoryHost::transactions_page();
    host.set_text(TITLE_CLASS, "Cash <main>").unwrap();
    assert_eq!(host.text(TITLE_CLASS).as_deref(), Some("Cash <main>"));
    assert_eq!(host.html(TITLE_CLASS).as_deref(), Some("Cash &lt;main&gt;"));

    host.set_html(CONTENT_CLASS, r#"<button class="transaction__remove" data-id="4"></button>"#)
        .unwrap();
    let controls = host.controls(REMOVE_TRANSACTION_CLASS);
    assert_eq!(controls.len(), 1);
    assert_eq!(controls[0].data_id.as_deref(), Some("4"));
}

#[test]
fn writing_to_missing_region_fails() {
    let host = MemoryHost::new();
    let err = host.set_text(TITLE_CLASS, "x").unwrap_err();
    assert_eq!(err, HostError::MissingElement(TITLE_CLASS.to_owned()));
}

#[test]
fn set_on_click_replaces_previous_handler() {
    let host = MemoryHost::transactions_page();
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let control = host.controls(REMOVE_ACCOUNT_CLASS).remove(0);

    host.set_on_click(&control, counting_handler(&first)).unwrap();
    host.set_on_click(&control, counting_handler(&second)).unwrap();
    assert_eq!(host.handler_count(), 1);

    assert!(host.click(&control));
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

#[test]
fn replacing_markup_drops_handlers_of_removed_elements() {
    let host = MemoryHost::transactions_page();
    host.set_html(CONTENT_CLASS, r#"<button class="transaction__remove" data-id="1"></button>"#)
        .unwrap();
    let fired = Rc::new(Cell::new(0));
    let stale = host.controls(REMOVE_TRANSACTION_CLASS).remove(0);
    host.set_on_click(&stale, counting_handler(&fired)).unwrap();
    assert_eq!(host.handler_count(), 1);

    host.set_html(CONTENT_CLASS, r#"<button class="transaction__remove" data-id="1"></button>"#)
        .unwrap();
    assert_eq!(host.handler_count(), 0);
    assert!(!host.click(&stale));
    assert_eq!(fired.get(), 0);
}

#[test]
fn binding_detached_control_fails() {
    let host = MemoryHost::transactions_page();
    let ghost = Control { class_name: REMOVE_TRANSACTION_CLASS.to_owned(), index: 0, data_id: None };
    let err = host.set_on_click(&ghost, Rc::new(|| {})).unwrap_err();
    assert!(matches!(err, HostError::Detached { index: 0, .. }));
}

#[test]
fn click_data_id_targets_matching_control() {
    let host = MemoryHost::transactions_page();
    host.set_html(
        CONTENT_CLASS,
        r#"<button class="transaction__remove" data-id="1"></button><button class="transaction__remove" data-id="2"></button>"#,
    )
    .unwrap();
    let clicked = Rc::new(RefCell::new(Vec::new()));
    for control in host.controls(REMOVE_TRANSACTION_CLASS) {
        let clicked = clicked.clone();
        let id = control.data_id.clone().unwrap_or_default();
        host.set_on_click(&control, Rc::new(move || clicked.borrow_mut().push(id.clone())))
            .unwrap();
    }

    assert!(host.click_data_id(REMOVE_TRANSACTION_CLASS, "2"));
    assert!(!host.click_data_id(REMOVE_TRANSACTION_CLASS, "3"));
    assert_eq!(*clicked.borrow(), vec!["2".to_owned()]);
}

#[test]
fn widget_layout_exposes_both_launchers() {
    let host = MemoryHost::transactions_widget();
    assert!(host.has(CREATE_INCOME_CLASS));
    assert!(host.has(CREATE_EXPENSE_CLASS));
    assert!(!host.has(CONTENT_CLASS));
}
