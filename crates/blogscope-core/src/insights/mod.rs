//! Insight Generator - qualitative observations from blog metrics
//!
//! Each rule looks at one aggregate metric and emits at most one message.
//! Rules run in a fixed order, so the output order is stable:
//!
//! 1. Visibility (average views per post)
//! 2. Engagement (average engagement rate)
//! 3. Content length (average word count)
//! 4. Top category (highest average views)
//! 5. Publishing frequency (posts per month)
//! 6. Title optimization warning
//! 7. Image coverage warning
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blogscope_core::insights::InsightGenerator;
//!
//! let insights = InsightGenerator::new().generate(&engine.snapshot());
//! ```

pub mod generator;
pub mod rules;
pub mod types;

pub use generator::{InsightGenerator, InsightRule};
pub use rules::{Step, Threshold, ThresholdLadder, TopCategoryRule};
pub use types::{Insight, InsightKind, Severity};
