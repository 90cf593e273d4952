//! "Did you mean" suggestions for unknown command words.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use strsim::normalized_damerau_levenshtein;

use super::command::all_aliases;

/// Maximum number of suggestions offered for a single word.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum edit similarity for an alias to count as a close match.
const SIMILARITY_CUTOFF: f64 = 0.6;

/// Rank aliases against an unknown word, best match first.
///
/// Aliases within a small edit distance (typos, swapped or extra letters)
/// come first. Remaining slots are filled with aliases that contain the
/// word's characters in order, so abbreviations still get suggestions.
pub fn suggest(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let mut close: Vec<(&str, f64)> = all_aliases()
        .map(|alias| (alias, normalized_damerau_levenshtein(word, alias)))
        .filter(|&(_, similarity)| similarity >= SIMILARITY_CUTOFF)
        .collect();
    close.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.len().cmp(&b.0.len())));

    let matcher = SkimMatcherV2::default();
    let mut fuzzy: Vec<(&str, i64)> = all_aliases()
        .filter_map(|alias| matcher.fuzzy_match(alias, word).map(|score| (alias, score)))
        .collect();
    // Higher score first, shorter alias on ties.
    fuzzy.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.len().cmp(&b.0.len())));

    let mut suggestions: Vec<String> = Vec::new();
    for alias in close
        .into_iter()
        .map(|(alias, _)| alias)
        .chain(fuzzy.into_iter().map(|(alias, _)| alias))
    {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if !suggestions.iter().any(|s| s == alias) {
            suggestions.push(alias.to_string());
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(word: &str) -> String {
        suggest(word).into_iter().next().unwrap_or_default()
    }

    #[test]
    fn test_suggests_for_typos() {
        assert_eq!(first("addd"), "add");
        assert_eq!(first("sqtr"), "sqrt");
        assert_eq!(first("mutliply"), "multiply");
        assert_eq!(first("hlep"), "help");
        assert_eq!(first("exti"), "exit");
        assert_eq!(first("dvide"), "divide");
        assert!(suggest("clera").contains(&"clear".to_string()));
        assert!(suggest("sbu").contains(&"sub".to_string()));
    }

    #[test]
    fn test_suggests_for_abbreviations() {
        assert!(suggest("multipy").contains(&"multiply".to_string()));
        assert!(suggest("sqr").contains(&"sqrt".to_string()));
        assert!(suggest("factorl").contains(&"factorial".to_string()));
    }

    #[test]
    fn test_at_most_three_unique_suggestions() {
        for word in ["m", "ad", "clera", "memry"] {
            let suggestions = suggest(word);
            assert!(suggestions.len() <= MAX_SUGGESTIONS, "{:?}", suggestions);
            let mut unique = suggestions.clone();
            unique.dedup();
            assert_eq!(unique.len(), suggestions.len());
        }
        assert!(!suggest("m").is_empty());
    }

    #[test]
    fn test_no_suggestions_for_gibberish() {
        assert!(suggest("zzzz").is_empty());
        assert!(suggest("").is_empty());
    }
}
