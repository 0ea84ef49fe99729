//! Placeholder tokens: extraction, naming rules, sample values and diffs.
//!
//! A placeholder is a name written between double braces, `{{ name }}`, in a
//! content template body or a URL template pattern. Both template kinds use
//! the same syntax and go through the same extractor.
//!
//! ## Extraction Rules
//!
//! - Captures are trimmed, so `{{ title }}` and `{{title}}` are the same token.
//! - Empty or whitespace-only captures (`{{ }}`) are discarded.
//! - Braces cannot appear inside a name; `{{{title}}}` yields `title`.
//! - The result is a set: deduplicated and sorted lexicographically. Order of
//!   first appearance is *not* preserved.
//!
//! See [`naming`] for the naming convention, [`sample`] for preview values and
//! [`diff`] for comparing two placeholder sets.

pub mod diff;
pub mod naming;
pub mod sample;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub use diff::{diff, PlaceholderDiff};
pub use naming::{is_valid_placeholder_name, ValidationFailure};
pub use sample::sample_value;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("placeholder pattern is valid"));

/// Extracts the placeholder set of `text` as a sorted, deduplicated list.
///
/// # Examples
/// ```
/// use templinkapp::placeholders::extract_placeholders;
///
/// assert_eq!(extract_placeholders("<div>{{title}}</div>"), vec!["title"]);
/// assert_eq!(
///     extract_placeholders("{{ price }} {{image}} {{price}}"),
///     vec!["image", "price"]
/// );
/// assert!(extract_placeholders("{{ }} plain text").is_empty());
/// ```
pub fn extract_placeholders(text: &str) -> Vec<String> {
    placeholder_set(text).into_iter().collect()
}

/// Same as [`extract_placeholders`], as a set for membership checks.
pub fn placeholder_set(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_placeholder() {
        assert_eq!(extract_placeholders("<div>{{title}}</div>"), vec!["title"]);
    }

    #[test]
    fn trims_and_deduplicates() {
        let text = "{{ title }} and {{title}} and {{  title\t}}";
        assert_eq!(extract_placeholders(text), vec!["title"]);
    }

    #[test]
    fn sorts_lexicographically_not_by_appearance() {
        let text = "{{price}} {{image}} {{cta_button}} {{Brand}}";
        assert_eq!(
            extract_placeholders(text),
            vec!["Brand", "cta_button", "image", "price"]
        );
    }

    #[test]
    fn discards_empty_captures() {
        assert!(extract_placeholders("{{}} {{   }}").is_empty());
    }

    #[test]
    fn ignores_single_braces_and_unclosed_tokens() {
        assert!(extract_placeholders("{title} {{title").is_empty());
        assert!(extract_placeholders("style='a{color:red}'").is_empty());
    }

    #[test]
    fn triple_braces_yield_inner_name() {
        assert_eq!(extract_placeholders("{{{title}}}"), vec!["title"]);
    }

    #[test]
    fn url_patterns_use_same_syntax() {
        let pattern = "{{baseUrl}}?utm_source={{utm_source}}&utm_medium={{ utm_medium }}";
        assert_eq!(
            extract_placeholders(pattern),
            vec!["baseUrl", "utm_medium", "utm_source"]
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let samples = [
            "",
            "no tokens here",
            "<p>{{b}}{{a}}{{b}}</p>",
            "{{ x }}{{y}}{{ }}{{{z}}}",
        ];
        for text in samples {
            let first = extract_placeholders(text);
            let second = extract_placeholders(text);
            assert_eq!(first, second);

            let mut sorted = first.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(first, sorted, "not sorted/deduplicated for {:?}", text);
        }
    }
}
