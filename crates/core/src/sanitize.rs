//! Character-level sanitizers.
//!
//! Two distinct passes exist: [`strip_angle_brackets`] for attribute values
//! headed into generated markup, and [`escape_for_display`] for text shown on
//! documentation surfaces.

/// Removes every `<` and `>` from `text`. No other character is touched.
///
/// # Examples
///
/// ```
/// use uigen_core::sanitize::strip_angle_brackets;
///
/// assert_eq!(strip_angle_brackets("<b>bold</b>"), "bbold/b");
/// ```
pub fn strip_angle_brackets(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Replaces `& < > " '` with entity sequences for display surfaces.
///
/// Every replacement carries an extra `&amp;` prefix (`<` becomes `&amp;lt;`),
/// and existing entities are escaped again on their leading `&`. Clients
/// depend on this exact output.
///
/// # Examples
///
/// ```
/// use uigen_core::sanitize::escape_for_display;
///
/// assert_eq!(escape_for_display("it's"), "it&amp;#39;s");
/// assert_eq!(escape_for_display("&amp;"), "&amp;amp;amp;");
/// ```
pub fn escape_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;amp;"),
            '<' => out.push_str("&amp;lt;"),
            '>' => out.push_str("&amp;gt;"),
            '"' => out.push_str("&amp;quot;"),
            '\'' => out.push_str("&amp;#39;"),
            other => out.push(other),
        }
    }
    out
}
