// Output formatting — terminal rendering of reports and tables.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// if truncated.
///
/// Byte slicing (`&text[..200]`) can panic mid-character on multi-byte
/// input; this walks characters instead.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
