use unicode_width::UnicodeWidthStr;

/// Display width of a string. Currency symbols such as `€` are one column.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad with spaces to `width` display columns. Never truncates.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let sw = display_width(s);
    if sw >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - sw))
    }
}

/// Left-pad with spaces to `width` display columns. Never truncates.
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    let sw = display_width(s);
    if sw >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - sw), s)
    }
}
