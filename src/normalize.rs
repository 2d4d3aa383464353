//! Input text normalization.
//!
//! Parsers assume normalized input: no byte-order mark, LF-only line endings.
//! Callers feeding raw file text through the facade get this applied
//! automatically before any format parser sees the content.

/// Strip a leading UTF-8 byte-order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Normalize line endings to LF (`\r\n` first, then lone `\r`).
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Lowercased extension of a file name (text after the last dot).
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_utf8_bom() {
        assert_eq!(strip_bom("\u{FEFF}hello"), "hello");
        assert_eq!(strip_bom("hello"), "hello");
    }

    #[test]
    fn normalizes_crlf_and_cr() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn extracts_lowercased_extension() {
        assert_eq!(file_extension("movie.en.SRT"), "srt");
        assert_eq!(file_extension("movie.sub"), "sub");
        assert_eq!(file_extension("noext"), "noext");
    }
}
