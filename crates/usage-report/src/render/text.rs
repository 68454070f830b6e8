//! Text encoding for PDF literal strings

/// Encode `text` as the body of a PDF literal string for a WinAnsi font.
///
/// Delimiters and backslashes are escaped, Latin-1 characters become octal
/// escapes and anything else is replaced with `?`.
pub fn encode_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '\t' | '\n' | '\r' => out.push(' '),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", ch as u32)),
            _ => out.push('?'),
        }
    }
    out
}

/// Encode `text` as raw WinAnsi bytes, for string objects outside content streams
pub(crate) fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_passes_through() {
        assert_eq!(encode_literal("Pizza API 1.0.0"), "Pizza API 1.0.0");
    }

    #[test]
    fn test_delimiters_are_escaped() {
        assert_eq!(encode_literal("1)"), "1\\)");
        assert_eq!(encode_literal("(a\\b)"), "\\(a\\\\b\\)");
    }

    #[test]
    fn test_latin1_becomes_octal() {
        assert_eq!(encode_literal("Versión"), "Versi\\363n");
        assert_eq!(encode_literal("año"), "a\\361o");
    }

    #[test]
    fn test_unsupported_characters() {
        assert_eq!(encode_literal("日本"), "??");
        assert_eq!(encode_literal("a\tb"), "a b");
        assert_eq!(win_ansi_bytes("é€"), vec![0xe9, b'?']);
    }
}
