//! Messaging link opened when an order is confirmed.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::OrderError;
use crate::selection::OrderSelection;

/// Restaurant number the order message is addressed to.
pub const RESTAURANT_PHONE: u64 = 553_299_999_999;

const MESSAGE_BASE_URL: &str = "https://wa.me";

/// Bytes left unescaped by `encodeURIComponent`: alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build `https://wa.me/<phone>?text=<summary>` for a complete order.
///
/// # Errors
///
/// Returns [`OrderError::Incomplete`] until every category is selected.
pub fn order_link(selection: &OrderSelection) -> Result<String, OrderError> {
    let summary = selection.summary_text()?;
    Ok(message_link(RESTAURANT_PHONE, &summary))
}

fn message_link(phone: u64, text: &str) -> String {
    let encoded = utf8_percent_encode(text, URI_COMPONENT);
    format!("{MESSAGE_BASE_URL}/{phone}?text={encoded}")
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
