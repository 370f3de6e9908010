use crate::utils::StopWords;

/// Extracts the core words of a document.
///
/// Tokens are split on whitespace, lowercased and stripped of ASCII
/// punctuation; a token is kept when its normalized form is not a stop word.
/// Order and duplicates are preserved.
///
/// A token made only of punctuation (`"---"`) normalizes to `""` and is kept
/// unless `""` is itself a stop word.
pub fn derive_core_words(text: &str, stopwords: &StopWords) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|word| !stopwords.contains(word))
        .collect()
}

/// Lowercases a token and removes every ASCII punctuation character.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn derives_core_words_from_sentence() {
        let sw = StopWords::new(["the", "on"]);
        let words = derive_core_words("The Cat sat on the MAT.", &sw);
        assert_eq!(words, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(derive_core_words("", &StopWords::english()).is_empty());
        assert!(derive_core_words(" \t\n ", &StopWords::empty()).is_empty());
    }

    #[test]
    fn no_stopwords_keeps_one_word_per_token_in_order() {
        let words = derive_core_words("Zeta alpha\tBeta\n\ngamma ALPHA", &StopWords::empty());
        assert_eq!(words, vec!["zeta", "alpha", "beta", "gamma", "alpha"]);
    }

    #[test]
    fn punctuation_only_token_becomes_empty_word() {
        let words = derive_core_words("one --- two", &StopWords::empty());
        assert_eq!(words, vec!["one", "", "two"]);
    }

    #[test]
    fn empty_word_dropped_when_it_is_a_stopword() {
        let sw = StopWords::new([""]);
        let words = derive_core_words("one --- two", &sw);
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn stopword_match_uses_normalized_form() {
        // "The," and "(on)" only equal stop words after normalization
        let sw = StopWords::new(["the", "on"]);
        let words = derive_core_words("The, cat (on) mat", &sw);
        assert_eq!(words, vec!["cat", "mat"]);
    }

    #[test]
    fn output_never_contains_stopwords() {
        let sw = StopWords::english();
        let words = derive_core_words("It was the best of times, it was the worst of times.", &sw);
        assert!(words.iter().all(|w| !sw.contains(w)));
        assert_eq!(words, vec!["best", "times", "worst", "times"]);
    }

    #[rstest]
    #[case("Hello,", "hello")]
    #[case("don't", "dont")]
    #[case("e-mail", "email")]
    #[case("[x]{y}", "xy")]
    #[case("!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~", "")]
    #[case("Café!", "café")]
    #[case("«quoted»", "«quoted»")]
    fn normalizes_tokens(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(normalize_token(token), expected);
    }
}
