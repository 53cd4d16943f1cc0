//! Utterance normalization applied before comparing an attempt with its
//! reference phrase.
//!
//! Phrases are transliterated into Latin script, so the comparison only needs
//! to ignore casing, sentence punctuation and surrounding whitespace. Inner
//! whitespace is kept: word boundaries count towards the edit distance.

/// Punctuation removed wherever it appears in the utterance.
const STRIPPED_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Normalize an utterance for accuracy scoring.
///
/// Applies the following transformations in order:
/// 1. Lowercase
/// 2. Remove every `.`, `,`, `!` and `?`
/// 3. Trim leading and trailing whitespace
///
/// The result is stable under repeated application, so
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(normalize("ek chai dijiye"), "ek chai dijiye");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("Hello!"), normalize("hello"));
        assert_eq!(normalize("NAMASTE"), "namaste");
    }

    #[test]
    fn test_punctuation_removed_anywhere() {
        assert_eq!(normalize("Ek chai dijiye."), "ek chai dijiye");
        assert_eq!(normalize("Haan, theek hai!"), "haan theek hai");
        assert_eq!(normalize("Kitna hua?"), "kitna hua");
        assert_eq!(normalize("a.b,c!d?e"), "abcde");
    }

    #[test]
    fn test_other_punctuation_kept() {
        // Only sentence punctuation is stripped
        assert_eq!(normalize("it's"), "it's");
        assert_eq!(normalize("well-known"), "well-known");
    }

    #[test]
    fn test_trim_after_stripping() {
        assert_eq!(normalize("  Namaste  "), "namaste");
        assert_eq!(normalize(" ! Namaste ? "), "namaste");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        assert_eq!(normalize("ek  chai"), "ek  chai");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!.,"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Ek chai dijiye.",
            "  Bus kab aayegi?  ",
            "Vanakkam!",
            "?! , hello . ",
            "",
            "Nandri, romba nandri!",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
