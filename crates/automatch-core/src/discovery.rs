//! Accessor discovery
//!
//! Enumerates the readable properties of a reflected object, names them and
//! orders them deterministically: simple return types first, arrays last,
//! then by property name.

use crate::classify::is_simple_type;
use crate::config::Accessor;
use crate::core_types::schema;
use crate::settings::MatcherSettings;
use crate::value::{ObjectKind, ObjectValue, TypeRef};
use std::cmp::Ordering;

/// A discovered property before its matcher is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorTemplate {
    property: String,
    method: String,
    declared_by: String,
    returns: TypeRef,
}

impl AccessorTemplate {
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn declared_by(&self) -> &str {
        &self.declared_by
    }

    pub fn returns(&self) -> &TypeRef {
        &self.returns
    }

    /// Accessor reading this property from an instance of the declaring type
    pub fn accessor(&self) -> Accessor {
        Accessor::method(&self.declared_by, &self.method)
    }
}

/// Derive the property name for an accessor, or `None` if the accessor is
/// not eligible under the object's naming mode.
///
/// For [`ObjectKind::Bean`] only `get`/`is` prefixed accessors qualify. The
/// prefix and a following underscore are stripped and the first remaining
/// character is lower-cased; an empty remainder keeps the accessor name.
pub fn property_name(kind: ObjectKind, method: &str) -> Option<String> {
    match kind {
        ObjectKind::Record => Some(method.to_string()),
        ObjectKind::Bean => {
            let rest = method
                .strip_prefix("get")
                .or_else(|| method.strip_prefix("is"))?;
            let rest = rest.strip_prefix('_').unwrap_or(rest);
            let mut chars = rest.chars();
            match chars.next() {
                None => Some(method.to_string()),
                Some(first) => Some(first.to_lowercase().chain(chars).collect()),
            }
        }
    }
}

/// Discover the ordered accessors of `object`
pub fn discover(object: &ObjectValue, settings: &MatcherSettings) -> Vec<AccessorTemplate> {
    let mut templates: Vec<AccessorTemplate> = object
        .methods()
        .iter()
        .filter(|method| !settings.is_ignored(method.name()))
        .filter(|method| !method.returns().is_void())
        .filter_map(|method| {
            property_name(object.kind(), method.name()).map(|property| AccessorTemplate {
                property,
                method: method.name().to_string(),
                declared_by: method.declared_by().to_string(),
                returns: method.returns().clone(),
            })
        })
        .collect();

    templates.sort_by(|a, b| compare(a, b, settings));

    for template in &templates {
        tracing::trace!(
            component = module_path!(),
            op = schema::OP_DISCOVER,
            type_name = object.type_name(),
            property = template.property.as_str(),
            method = template.method.as_str(),
            "Adding property"
        );
    }
    tracing::debug!(
        component = module_path!(),
        op = schema::OP_DISCOVER,
        type_name = object.type_name(),
        property_count = templates.len(),
        "Discovered properties"
    );
    templates
}

fn compare(a: &AccessorTemplate, b: &AccessorTemplate, settings: &MatcherSettings) -> Ordering {
    let a_simple = is_simple_type(&a.returns, settings);
    let b_simple = is_simple_type(&b.returns, settings);
    b_simple
        .cmp(&a_simple)
        .then_with(|| a.returns.is_array().cmp(&b.returns.is_array()))
        .then_with(|| a.property.cmp(&b.property))
        .then_with(|| a.method.cmp(&b.method))
}
