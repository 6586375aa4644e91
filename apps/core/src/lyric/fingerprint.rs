//! Text fingerprint used to tell whether a locked result still matches a draft.
//!
//! Not cryptographic; collisions only cost a missed staleness hint.

/// Order-sensitive 31-multiplier rolling hash over UTF-16 code units, as
/// eight lowercase hex digits
pub fn fingerprint(text: &str) -> String {
    let hash = text
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_mul(31).wrapping_add(u32::from(unit)));
    format!("{:08x}", hash)
}
