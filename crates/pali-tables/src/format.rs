// Line-oriented data file helpers
//
// Every reference data file shares the same outer shape: UTF-8 text, one
// entry per line, blank lines and lines starting with `#` ignored.

use crate::TableError;

/// Yields `(line_number, trimmed_line)` for every data line of `text`.
///
/// Line numbers are 1-based and count skipped lines, so they point into the
/// source file.
pub fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Splits `key:spec` at the first colon.
pub fn split_entry(line: usize, text: &str) -> Result<(&str, &str), TableError> {
    text.split_once(':').ok_or(TableError::MissingSeparator {
        line,
        separator: ':',
    })
}

/// Splits a paradigm key `name;params` at the first semicolon.
pub fn split_key(line: usize, key: &str) -> Result<(&str, &str), TableError> {
    match key.split_once(';') {
        Some((name, params)) if !name.is_empty() => Ok((name, params)),
        _ => Err(TableError::MalformedKey {
            line,
            key: key.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let text = "# header\n\n  a:b  \n#x\nc:d\n";
        let lines: Vec<_> = data_lines(text).collect();
        assert_eq!(lines, vec![(3, "a:b"), (5, "c:d")]);
    }

    #[test]
    fn entry_splits_at_first_colon() {
        assert_eq!(split_entry(1, "k;x:a:b").unwrap(), ("k;x", "a:b"));
        assert_eq!(
            split_entry(7, "nocolon"),
            Err(TableError::MissingSeparator {
                line: 7,
                separator: ':'
            })
        );
    }

    #[test]
    fn key_needs_name_and_params() {
        assert_eq!(split_key(1, "generic;vatp").unwrap(), ("generic", "vatp"));
        assert!(split_key(2, "generic").is_err());
        assert!(split_key(3, ";vatp").is_err());
    }
}
