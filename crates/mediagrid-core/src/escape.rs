//! Escaping helpers for generated markup.

/// Escape text for insertion into HTML content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a value embedded as a single-quoted argument of an inline handler.
pub fn escape_handler_arg(value: &str) -> String {
    value.replace('\'', "\\'")
}
