//! Diagnostic evaluation of a [`MatcherConfig`]

use crate::config::MatcherConfig;
use crate::description::Description;
use crate::errors::Result;
use crate::matchers::{Matcher, Verdict};
use crate::value::Value;

/// Matcher driven by a [`MatcherConfig`].
///
/// Every property is evaluated, even after a failure, so the mismatch trace
/// lists all differing properties: `{name was "x", attr {value was null}}`.
pub struct ConfigurableMatcher {
    config: MatcherConfig,
}

impl ConfigurableMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}

impl Matcher for ConfigurableMatcher {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("{");
        for (i, property) in self.config.properties().iter().enumerate() {
            if i > 0 {
                description.append_text(", ");
            }
            description
                .append_text(property.name())
                .append_text("=")
                .append_description_of(&**property.matcher());
        }
        description.append_text("}");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        if actual.is_null() {
            return Ok(Verdict::fail("was null"));
        }
        let mut fragments = Vec::new();
        for property in self.config.properties() {
            let value = property.property_value(actual)?;
            let verdict = property.matcher().evaluate(&value)?;
            if !verdict.matched() {
                fragments.push(format!("{} {}", property.name(), verdict.mismatch()));
            }
        }
        Ok(Verdict::new(
            fragments.is_empty(),
            format!("{{{}}}", fragments.join(", ")),
        ))
    }
}
