use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `s` to at most `max_width` terminal columns, ending in "...".
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut truncated = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push_str("...");
    truncated
}

/// Byte offset of the `char_index`-th character, or the end of the string.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Insert `ch` before the character at `cursor`; returns the new cursor.
pub fn insert_char_at(text: &mut String, cursor: usize, ch: char) -> usize {
    let cursor = cursor.min(text.chars().count());
    text.insert(byte_offset(text, cursor), ch);
    cursor + 1
}

/// Backspace: remove the character before `cursor`; returns the new cursor.
pub fn remove_char_before(text: &mut String, cursor: usize) -> usize {
    let cursor = cursor.min(text.chars().count());
    if cursor == 0 {
        return 0;
    }
    text.remove(byte_offset(text, cursor - 1));
    cursor - 1
}

/// Delete: remove the character at `cursor`. The cursor does not move.
pub fn remove_char_at(text: &mut String, cursor: usize) {
    if cursor < text.chars().count() {
        text.remove(byte_offset(text, cursor));
    }
}

/// Terminal columns taken by the first `cursor` characters of `text`.
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

/// Largest scroll offset that still fills `visible_height` rows.
pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height
        .saturating_sub(visible_height)
        .min(u16::MAX as usize) as u16
}
