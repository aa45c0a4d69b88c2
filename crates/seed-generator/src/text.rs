//! Text shaping helpers.

/// Cut `text` to at most `max_chars` characters, preferring the last word
/// boundary inside the limit.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    match head.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => head[..pos].trim_end().to_string(),
        _ => head.to_string(),
    }
}
