/// Returns the longest prefix of `s` holding at most `max` characters.
pub fn char_prefix(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
