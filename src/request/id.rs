//! Correlation IDs
//!
//! IDs look like `id:<epoch-millis>:<n>` with `n` in `[0, 999]`. Uniqueness is
//! best-effort: two submissions in the same millisecond can draw the same `n`.

use rand::Rng;

/// Exclusive upper bound of the random suffix.
pub const NONCE_RANGE: u16 = 1000;

/// Generates a fresh correlation ID from the wall clock and a random draw.
pub fn generate_id() -> String {
    let nonce = rand::thread_rng().gen_range(0..NONCE_RANGE);
    format_id(now_ms(), nonce)
}

pub fn format_id(timestamp_ms: u64, nonce: u16) -> String {
    format!("id:{}:{}", timestamp_ms, nonce)
}

/// Current system time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
