//! automatch - Structural equality matchers with diagnostic mismatch traces
//!
//! This crate builds matchers on demand from an expected value and reports,
//! on failure, exactly which nested property differed:
//! - Reflection of values into an immutable [`Value`] tree via [`Reflect`]
//! - Type classification and accessor discovery for structured objects
//! - Recursive matcher synthesis over scalars, arrays, lists, sets, maps,
//!   optionals and nested objects
//! - Diagnostic evaluation producing traces like
//!   `{children item 0: {attr {value was "x"}}}`
//!
//! # Usage
//!
//! ```
//! use automatch::{equal_to, ObjectValue, Reflect, Value};
//!
//! #[derive(Debug)]
//! struct Attribute {
//!     value: Option<String>,
//! }
//!
//! impl Reflect for Attribute {
//!     fn reflect(&self) -> Value {
//!         ObjectValue::bean(self).nullable("get_value", &self.value).build()
//!     }
//! }
//!
//! let expected = Attribute { value: Some("a".to_string()) };
//! let actual = Attribute { value: Some("b".to_string()) };
//!
//! let matcher = equal_to(&expected).unwrap();
//! assert!(!matcher.matches(&actual).unwrap());
//! assert_eq!(matcher.describe_expected(), "{value=\"a\"}");
//! assert_eq!(matcher.describe_mismatch(&actual).unwrap(), "{value was \"b\"}");
//! ```

pub mod assertion;
pub mod auto;
pub mod classify;
pub mod config;
pub mod description;
pub mod discovery;
pub mod errors;
pub mod evaluator;
pub mod logging_facility;
pub mod matchers;
pub mod settings;
pub mod synthesize;
pub mod value;

pub use automatch_core_types as core_types;

// Re-export commonly used types
pub use assertion::assert_that;
pub use auto::{contains, contains_in_any_order, equal_to, AutoMatcher};
pub use config::{Accessor, MatcherConfig, PropertyConfig};
pub use description::Description;
pub use errors::{ErrorKind, ExError, MatchError, Result};
pub use evaluator::ConfigurableMatcher;
pub use matchers::{BoxedMatcher, Matcher, Verdict};
pub use settings::MatcherSettings;
pub use synthesize::Synthesizer;
pub use value::{ObjectBuilder, ObjectKind, ObjectValue, Reflect, Value};
