//! Conversions between text and the integer message representation.

/// Maps a string to the code-point sequence the ciphers operate on.
pub fn to_codepoints(text: &str) -> Vec<i64> {
    text.chars().map(|c| c as i64).collect()
}

/// Maps a code-point sequence back to text.
///
/// Values with no valid `char` (negative, surrogate, out of range) render
/// as U+FFFD so a lossy ciphertext is still printable.
pub fn to_text(codepoints: &[i64]) -> String {
    codepoints
        .iter()
        .map(|&cp| {
            u32::try_from(cp)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips() {
        let text = "The quick brown fox, 42!";
        assert_eq!(to_text(&to_codepoints(text)), text);
    }

    #[test]
    fn unrepresentable_codepoints_become_replacement_chars() {
        assert_eq!(to_text(&[-1, 'a' as i64, 0xD800]), "\u{FFFD}a\u{FFFD}");
    }
}
