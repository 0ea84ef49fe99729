//! Stand-in values for previews.
//!
//! When an editor previews a template that has no record bound yet, every
//! placeholder needs *something* plausible. The name is matched against
//! category keyword groups in a fixed priority order and the first matching
//! category supplies a canned example. Nothing produced here is ever stored.

use super::placeholder_set;
use std::collections::BTreeMap;

/// Category keyword groups, highest priority first, with their example value.
const CATEGORIES: &[(&[&str], &str)] = &[
    (
        &[
            "image",
            "img",
            "photo",
            "picture",
            "banner",
            "thumbnail",
            "logo",
            "avatar",
        ],
        "https://placehold.co/600x400",
    ),
    (&["url", "link", "href"], "https://example.com"),
    (
        &["title", "heading", "headline", "subtitle"],
        "Senior Product Designer",
    ),
    (
        &[
            "description",
            "desc",
            "text",
            "content",
            "body",
            "summary",
            "caption",
        ],
        "Join a fast-growing team and help shape products used by millions.",
    ),
    (&["price", "cost", "amount", "discount"], "$49.99"),
    (&["button", "btn", "cta", "action"], "Apply Now"),
    (&["date", "time", "deadline", "expiry"], "2024-12-31"),
    (&["name", "brand", "company", "author"], "Acme Corp"),
    (&["icon", "emoji"], "★"),
    (
        &[
            "job", "salary", "location", "city", "employer", "position", "role", "service",
        ],
        "Remote, Full-time",
    ),
    (&["rating", "review", "score", "stars"], "4.8"),
    (&["category", "tag", "type", "industry"], "Technology"),
];

/// Returns a human-readable example value for the placeholder `name`.
///
/// # Examples
/// ```
/// use templinkapp::placeholders::sample_value;
///
/// assert_eq!(sample_value("hero_image"), "https://placehold.co/600x400");
/// assert_eq!(sample_value("foo"), "Sample foo");
/// ```
pub fn sample_value(name: &str) -> String {
    let lowered = name.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, example)| example.to_string())
        .unwrap_or_else(|| format!("Sample {}", name))
}

/// Maps every placeholder of `text` to its sample value.
pub fn sample_data(text: &str) -> BTreeMap<String, String> {
    placeholder_set(text)
        .into_iter()
        .map(|name| {
            let value = sample_value(&name);
            (name, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_its_example() {
        assert_eq!(sample_value("photo"), "https://placehold.co/600x400");
        assert_eq!(sample_value("landingLink"), "https://example.com");
        assert_eq!(sample_value("headline"), "Senior Product Designer");
        assert!(sample_value("summary").starts_with("Join"));
        assert_eq!(sample_value("price"), "$49.99");
        assert_eq!(sample_value("cta"), "Apply Now");
        assert_eq!(sample_value("deadline"), "2024-12-31");
        assert_eq!(sample_value("company"), "Acme Corp");
        assert_eq!(sample_value("icon"), "★");
        assert_eq!(sample_value("salary"), "Remote, Full-time");
        assert_eq!(sample_value("stars"), "4.8");
        assert_eq!(sample_value("industry"), "Technology");
    }

    #[test]
    fn first_matching_category_wins() {
        // image outranks title
        assert_eq!(sample_value("title_image"), "https://placehold.co/600x400");
        // url outranks button
        assert_eq!(sample_value("button_url"), "https://example.com");
        // title outranks name
        assert_eq!(sample_value("title_name"), "Senior Product Designer");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(sample_value("HeroIMAGE"), "https://placehold.co/600x400");
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(sample_value("foo"), "Sample foo");
        assert_eq!(sample_value("Widget"), "Sample Widget");
    }

    #[test]
    fn sample_data_covers_every_placeholder() {
        let data = sample_data("<h1>{{title}}</h1><a href='{{link}}'>{{foo}}</a>");
        assert_eq!(data.len(), 3);
        assert_eq!(data["link"], "https://example.com");
        assert_eq!(data["foo"], "Sample foo");
    }
}
