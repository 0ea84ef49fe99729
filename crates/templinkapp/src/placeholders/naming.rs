//! Placeholder naming convention.
//!
//! Editors name placeholders freely, but a name only helps the next editor if
//! it says what kind of value goes there. A name is valid when its lower-cased
//! form contains at least one keyword from [`NAME_KEYWORDS`], anywhere in the
//! name: `hero_image`, `ctaButtonText` and `jobLocation` are all valid,
//! `foo` and `x1` are not.
//!
//! Validation never fails hard. [`check_names`] collects every invalid name of
//! a body into a [`NameCheck`]; the caller decides whether that blocks a save,
//! typically by turning it into a single multi-line [`ValidationFailure`].

use super::placeholder_set;
use serde::Serialize;

/// Domain keywords a placeholder name must contain (substring match).
pub const NAME_KEYWORDS: &[&str] = &[
    // image
    "image",
    "img",
    "photo",
    "picture",
    "banner",
    "thumbnail",
    "logo",
    "avatar",
    // url / link
    "url",
    "link",
    "href",
    // title
    "title",
    "heading",
    "headline",
    "subtitle",
    // description
    "description",
    "desc",
    "text",
    "content",
    "body",
    "summary",
    "caption",
    // price
    "price",
    "cost",
    "amount",
    "discount",
    "currency",
    // button / call to action
    "button",
    "btn",
    "cta",
    "action",
    "label",
    // date
    "date",
    "time",
    "deadline",
    "expiry",
    // name / brand
    "name",
    "brand",
    "company",
    "author",
    // icon
    "icon",
    "emoji",
    // job market
    "job",
    "salary",
    "location",
    "city",
    "employer",
    "position",
    "role",
    "skill",
    "experience",
    "contract",
    "remote",
    "service",
    // rating
    "rating",
    "review",
    "score",
    "stars",
    // category
    "category",
    "tag",
    "type",
    "industry",
    // tracking and presentation
    "utm",
    "source",
    "medium",
    "campaign",
    "color",
];

/// Returns true when `name` contains one of the domain keywords.
///
/// # Examples
/// ```
/// use templinkapp::placeholders::is_valid_placeholder_name;
///
/// assert!(is_valid_placeholder_name("hero_image"));
/// assert!(is_valid_placeholder_name("CTAButtonText"));
/// assert!(!is_valid_placeholder_name("foo"));
/// ```
pub fn is_valid_placeholder_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    NAME_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Result of checking every placeholder of a template body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameCheck {
    /// Invalid names, in extraction order (sorted).
    pub invalid: Vec<String>,
    /// One human-readable message per invalid name.
    pub messages: Vec<String>,
}

impl NameCheck {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                messages: self.messages,
            })
        }
    }
}

/// Checks the names of every placeholder found in `text`.
pub fn check_names(text: &str) -> NameCheck {
    let invalid: Vec<String> = placeholder_set(text)
        .into_iter()
        .filter(|name| !is_valid_placeholder_name(name))
        .collect();
    let messages = invalid
        .iter()
        .map(|name| invalid_name_message(name))
        .collect();
    NameCheck { invalid, messages }
}

fn invalid_name_message(name: &str) -> String {
    format!(
        "Invalid placeholder name '{}': it should describe its content (e.g. title, image, price, link, button)",
        name
    )
}

/// One or more placeholder names break the naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub messages: Vec<String>,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("\n"))
    }
}

impl std::error::Error for ValidationFailure {}
