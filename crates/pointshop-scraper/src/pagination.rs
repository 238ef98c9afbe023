//! Query-string helpers for batch and cursor-paginated reward queries.
//!
//! `QueryRewardItems` pages with an opaque `cursor` query parameter. The
//! first request sends an empty cursor; every response carries a
//! `next_cursor` for the following page. Cursors are base64-like and may
//! contain `+`, `/`, and `=`, so they are percent-encoded before being
//! appended.
//!
//! ```text
//! .../QueryRewardItems/v1/?count=1000&cursor=
//! .../QueryRewardItems/v1/?count=1000&cursor=AoJwz%2B3m%2FfcCKQ%3D%3D
//! ```

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::types::RewardItemsPage;

/// Appends `key=value` to `url`, choosing `?` or `&` as needed.
///
/// `value` is written as-is; callers encode anything that needs it.
#[must_use]
pub fn append_query_param(url: &str, key: &str, value: &str) -> String {
    let separator = if !url.contains('?') {
        "?"
    } else if url.ends_with('?') || url.ends_with('&') {
        ""
    } else {
        "&"
    };
    format!("{url}{separator}{key}={value}")
}

/// Builds the request URL for one cursor page.
#[must_use]
pub fn cursor_url(base_url: &str, cursor: &str) -> String {
    let escaped = utf8_percent_encode(cursor, NON_ALPHANUMERIC).to_string();
    append_query_param(base_url, "cursor", &escaped)
}

/// Returns the cursor for the page after `page`, if the chain continues.
///
/// `None` when the page carried no items or no usable cursor.
#[must_use]
pub fn next_cursor(page: &RewardItemsPage) -> Option<&str> {
    if page.definitions.is_empty() {
        return None;
    }
    page.next_cursor.as_deref().filter(|c| !c.is_empty())
}
