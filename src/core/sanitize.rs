// src/core/sanitize.rs

/// Key for name matching: ends trimmed, lowercased. Inner whitespace is kept.
pub fn name_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare a user query against a listed name.
pub fn same_name(query: &str, listed: &str) -> bool {
    let q = name_key(query);
    !q.is_empty() && q == name_key(listed)
}
