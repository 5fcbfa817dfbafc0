//! Permissive CSV tokenizer.

use std::mem::take;

/// Splits `text` into rows of trimmed cells.
///
/// - `,` separates cells; `\n` or `\r\n` ends a row.
/// - `"` toggles quoting; inside quotes commas and newlines are literal and
///   `""` is one literal quote.
/// - Carriage returns that do not end a row are dropped.
/// - Rows whose cells are all empty are not emitted.
/// - Malformed quoting never fails: an unterminated quote simply runs to the
///   end of input, where the pending cell and row are closed.
///
/// A leading UTF-8 byte order mark is ignored.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                cell.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(finish_cell(&mut cell)),
            '\n' if !in_quotes => {
                row.push(finish_cell(&mut cell));
                finish_row(&mut rows, &mut row);
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {
                chars.next();
                row.push(finish_cell(&mut cell));
                finish_row(&mut rows, &mut row);
            }
            '\r' => {}
            _ => cell.push(ch),
        }
    }

    // Flush the trailing row even if quotes were unterminated.
    if !cell.is_empty() || !row.is_empty() {
        row.push(finish_cell(&mut cell));
        finish_row(&mut rows, &mut row);
    }

    rows
}

fn finish_cell(cell: &mut String) -> String {
    let value = take(cell);
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    let row = take(row);
    if row.iter().any(|cell| !cell.is_empty()) {
        rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        tokenize(text)
    }

    #[test]
    fn test_simple_rows() {
        assert_eq!(rows("a,b,c\nd,e,f"), vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn test_quoted_comma_and_escaped_quote() {
        assert_eq!(rows("\"a,b\",\"c\"\"d\""), vec![vec!["a,b", "c\"d"]]);
    }

    #[test]
    fn test_blank_rows_suppressed() {
        assert_eq!(rows("a,b\n\n,\n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(rows("a,b\r\nc,d\r\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_lone_carriage_return_dropped() {
        assert_eq!(rows("a\rb,c"), vec![vec!["ab", "c"]]);
    }

    #[test]
    fn test_newline_inside_quotes_is_literal() {
        assert_eq!(rows("\"line1\nline2\",x"), vec![vec!["line1\nline2", "x"]]);
        assert_eq!(rows("\"line1\r\nline2\",x"), vec![vec!["line1\nline2", "x"]]);
    }

    #[test]
    fn test_cells_trimmed() {
        assert_eq!(rows("  a  , b \n"), vec![vec!["a", "b"]]);
        assert_eq!(rows("\" padded \",x"), vec![vec!["padded", "x"]]);
    }

    #[test]
    fn test_unterminated_quote_closes_at_eof() {
        assert_eq!(rows("a,\"b,c\nd"), vec![vec!["a", "b,c\nd"]]);
    }

    #[test]
    fn test_trailing_empty_cell_kept_in_non_empty_row() {
        assert_eq!(rows("a,\n"), vec![vec!["a", ""]]);
        assert_eq!(rows("a,"), vec![vec!["a", ""]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n  \n").is_empty());
    }

    #[test]
    fn test_bom_ignored() {
        assert_eq!(rows("\u{feff}date,x"), vec![vec!["date", "x"]]);
    }
}
