//! Markup for the transaction list region.
//!
//! Each entry exposes a `transaction__remove` button whose `data-id` carries
//! the transaction id; the page binds its remove handler through that
//! attribute after every render.

#[cfg(test)]
#[path = "transaction_list_test.rs"]
mod transaction_list_test;

use crate::dom::REMOVE_TRANSACTION_CLASS;
use crate::net::types::TransactionRecord;
use crate::util::date::format_created_at;
use crate::util::html::escape;

fn format_sum(sum: f64) -> String {
    format!("{sum}")
}

/// Markup for a single transaction entry.
#[must_use]
pub fn transaction_html(item: &TransactionRecord, currency: &str) -> String {
    let kind = item.kind.css_class();
    let name = escape(&item.name);
    let date = escape(&format_created_at(&item.created_at));
    let sum = format_sum(item.signed_sum());
    let currency = escape(currency);
    let id = escape(item.id.as_str());
    format!(
        r#"<div class="transaction {kind} row">
    <div class="col-md-7 transaction__details">
        <div class="transaction__icon">
            <span class="fa fa-money fa-2x"></span>
        </div>
        <div class="transaction__info">
            <h4 class="transaction__title">{name}</h4>
            <div class="transaction__date">{date}</div>
        </div>
    </div>
    <div class="col-md-3">
        <div class="transaction__summ">{sum} <span class="currency">{currency}</span></div>
    </div>
    <div class="col-md-2 transaction__controls">
        <button class="btn btn-danger {REMOVE_TRANSACTION_CLASS}" data-id="{id}">
            <i class="fa fa-trash"></i>
        </button>
    </div>
</div>"#
    )
}

/// Markup for the whole list; empty for no records.
#[must_use]
pub fn transactions_html(items: &[TransactionRecord], currency: &str) -> String {
    items
        .iter()
        .map(|item| transaction_html(item, currency))
        .collect::<Vec<_>>()
        .join("\n")
}
