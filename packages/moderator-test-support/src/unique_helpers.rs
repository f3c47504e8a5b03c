//! Unique chat identities so concurrently running tests never share a seat.

use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_CHAT: AtomicI64 = AtomicI64::new(10_000);

/// A chat id no other caller in this process has received.
///
/// ```
/// use moderator_test_support::unique_helpers::unique_chat;
///
/// assert_ne!(unique_chat(), unique_chat());
/// ```
pub fn unique_chat() -> i64 {
    NEXT_CHAT.fetch_add(1, Ordering::Relaxed)
}

/// A player name with `prefix`, unique within the process.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", unique_chat())
}
