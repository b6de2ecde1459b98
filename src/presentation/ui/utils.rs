use unicode_width::UnicodeWidthChar;

/// Breaks `text` into rows no wider than `width` columns.
///
/// Breaks at the last space when one fits, otherwise mid-word. An empty line
/// yields one empty row.
#[must_use]
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for c in text.chars() {
        let c_width = c.width().unwrap_or(0);
        if row_width + c_width > width && !row.is_empty() {
            match row.rfind(' ') {
                Some(space) if space > 0 => {
                    let rest = row.split_off(space + 1);
                    rows.push(row.trim_end().to_string());
                    row = rest;
                    row_width = row.chars().filter_map(UnicodeWidthChar::width).sum();
                }
                _ => {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
            }
        }
        row.push(c);
        row_width += c_width;
    }

    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_at_spaces() {
        assert_eq!(
            wrap_line("renders the header title", 12),
            vec!["renders the", "header title"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap_line("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_short_and_empty_lines() {
        assert_eq!(wrap_line("fits", 10), vec!["fits"]);
        assert_eq!(wrap_line("", 10), vec![String::new()]);
    }
}
