/// Keeps at most `max` characters of `value`, never splitting a code point.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
