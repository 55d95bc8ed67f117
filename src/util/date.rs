//! Timestamp formatting for transaction entries.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const SPACE_SEPARATED: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const T_SEPARATED: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Parse a server timestamp, ignoring any fraction or offset suffix.
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let head = raw.trim().get(..19)?;
    PrimitiveDateTime::parse(head, SPACE_SEPARATED)
        .or_else(|_| PrimitiveDateTime::parse(head, T_SEPARATED))
        .ok()
}

/// Render `2019-03-10 03:20:41` as `10 March 2019 at 03:20`.
///
/// Input that is not a recognizable timestamp is returned unchanged.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!("{} {} {} at {:02}:{:02}", dt.day(), dt.month(), dt.year(), dt.hour(), dt.minute()),
        None => raw.to_owned(),
    }
}
