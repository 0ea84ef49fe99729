//! Analysis primitives shared by the preview and scan commands.
//!
//! - [`consistency`]: per-record mismatch buckets between two templates and data.
//! - [`severity`]: ratings for changes and integrity issues.
//!
//! Both are pure functions over name sets and a [`crate::rules::RuleSet`]; the
//! commands layer fetches data and assembles reports around them.

pub mod consistency;
pub mod severity;

pub use consistency::{classify_record, Classification};
pub use severity::{classify, IssueSeverity, OverallStatus, Severity};
