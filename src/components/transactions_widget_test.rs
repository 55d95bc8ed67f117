use super::*;
use crate::app::NamedModals;
use crate::app::test_helpers::Harness;
use crate::dom::memory::MemoryHost;

fn widget_host() -> Rc<MemoryHost> {
    Rc::new(MemoryHost::transactions_widget())
}

fn as_host(host: &Rc<MemoryHost>) -> Option<Rc<dyn Host>> {
    let host: Rc<dyn Host> = host.clone();
    Some(host)
}

#[test]
fn absent_host_is_rejected() {
    let harness = Harness::new();
    let err = TransactionsWidget::new(None, harness.services().modals).err();
    assert!(matches!(err, Some(ViewError::InvalidHost(_))));
}

#[test]
fn host_without_launchers_is_rejected() {
    let harness = Harness::new();
    let host: Rc<dyn Host> = Rc::new(MemoryHost::new().with_element(CREATE_INCOME_CLASS));
    let err = TransactionsWidget::new(Some(host), harness.services().modals).err();
    assert!(matches!(err, Some(ViewError::InvalidHost(ref msg)) if msg.contains(CREATE_EXPENSE_CLASS)));
}

#[test]
fn launchers_open_their_modals() {
    let harness = Harness::new();
    let host = widget_host();
    let _widget = TransactionsWidget::new(as_host(&host), harness.services().modals).unwrap();

    assert!(host.click_first(CREATE_INCOME_CLASS));
    assert!(host.click_first(CREATE_INCOME_CLASS));
    assert!(host.click_first(CREATE_EXPENSE_CLASS));

    assert_eq!(harness.income_modal.opened.get(), 2);
    assert_eq!(harness.expense_modal.opened.get(), 1);
}

#[test]
fn re_registering_does_not_stack_handlers() {
    let harness = Harness::new();
    let host = widget_host();
    let widget = TransactionsWidget::new(as_host(&host), harness.services().modals).unwrap();
    widget.register_events().unwrap();
    widget.register_events().unwrap();

    assert_eq!(host.handler_count(), 2);
    host.click_first(CREATE_EXPENSE_CLASS);
    assert_eq!(harness.expense_modal.opened.get(), 1);
}

#[test]
fn missing_modal_is_tolerated() {
    let host = widget_host();
    let _widget = TransactionsWidget::new(as_host(&host), Rc::new(NamedModals::new())).unwrap();
    assert!(host.click_first(CREATE_INCOME_CLASS));
}
