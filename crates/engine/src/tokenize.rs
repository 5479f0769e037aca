//! Script-aware sentence tokenization
//!
//! Two strategies, selected by detected script:
//!
//! - **Space-delimited**: any sentence containing at least one ASCII
//!   character. Every character that is neither a word character nor
//!   whitespace becomes a space, the result is lowercased and split on
//!   whitespace.
//! - **Per-character**: sentences with no ASCII at all (e.g. Han script).
//!   Every word character is its own lowercase single-character token;
//!   punctuation such as `。` and `！` is dropped.
//!
//! The ASCII-presence branch is a deliberate heuristic: a non-ASCII sentence
//! containing even one ASCII character takes the space-delimited path, so its
//! non-ASCII runs come out as multi-character tokens. Ratio results depend on
//! this exact branching; do not "improve" it.
//!
//! A word character is alphanumeric (Unicode-aware) or underscore.

/// Tokenize a sentence into lowercase word tokens.
///
/// The returned vector is finite and independent of any shared state;
/// repeated calls with the same input produce the same tokens.
///
/// # Examples
///
/// ```
/// use lexibank_engine::tokenize;
///
/// assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
/// assert_eq!(tokenize("你不懂。"), vec!["你", "不", "懂"]);
/// ```
pub fn tokenize(sentence: &str) -> Vec<String> {
    if sentence.chars().any(|c| c.is_ascii()) {
        tokenize_spaced(sentence)
    } else {
        tokenize_chars(sentence)
    }
}

/// True for characters that count as part of a word on either path.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Space-delimited path: punctuation becomes a separator, words survive.
fn tokenize_spaced(sentence: &str) -> Vec<String> {
    let cleaned: String = sentence
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Per-character path: each word character is one token, punctuation drops.
fn tokenize_chars(sentence: &str) -> Vec<String> {
    sentence
        .chars()
        .filter(|c| is_word_char(*c))
        .map(|c| c.to_lowercase().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tokenize_space_delimited() {
        assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("Hola, Como estas?"),
            vec!["hola", "como", "estas"]
        );
    }

    #[test]
    fn test_tokenize_han_per_character() {
        assert_eq!(tokenize("你不懂。"), vec!["你", "不", "懂"]);
    }

    #[test]
    fn test_tokenize_han_drops_fullwidth_punctuation() {
        assert_eq!(tokenize("你敢！"), vec!["你", "敢"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        assert!(tokenize("...---...").is_empty());
        assert!(tokenize("。！？").is_empty());
    }

    #[test]
    fn test_tokenize_mixed_script_takes_spaced_path() {
        // One ASCII character forces the space-delimited path, so the Han
        // run stays together as a single token.
        assert_eq!(tokenize("你好 ok"), vec!["你好", "ok"]);
    }

    #[test]
    fn test_tokenize_ascii_punctuation_forces_spaced_path() {
        // Same heuristic: the ASCII "!" alone flips the strategy.
        assert_eq!(tokenize("你不懂!"), vec!["你不懂"]);
    }

    #[test]
    fn test_tokenize_keeps_underscore_and_digits() {
        assert_eq!(tokenize("foo_bar 42"), vec!["foo_bar", "42"]);
    }

    #[test]
    fn test_tokenize_repeated_words_not_deduplicated() {
        assert_eq!(tokenize("no no NO"), vec!["no", "no", "no"]);
    }

    proptest! {
        #[test]
        fn tokens_are_never_empty(sentence in ".*") {
            for token in tokenize(&sentence) {
                prop_assert!(!token.is_empty());
            }
        }

        #[test]
        fn tokens_are_lowercase(sentence in ".*") {
            for token in tokenize(&sentence) {
                prop_assert_eq!(token.to_lowercase(), token);
            }
        }

        #[test]
        fn tokenize_is_deterministic(sentence in ".*") {
            prop_assert_eq!(tokenize(&sentence), tokenize(&sentence));
        }
    }
}
