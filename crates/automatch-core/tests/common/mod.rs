#![allow(dead_code)]

use automatch::{assert_that, equal_to, ObjectValue, Reflect, Value};

pub const ID1: i32 = 4711;
pub const ID2: i32 = 4242;
pub const ID3: i32 = 4243;
pub const NAME1: &str = "name1";
pub const NAME2: &str = "name2";
pub const NAME3: &str = "name3";
pub const ATTR1: &str = "attrValue1";
pub const ATTR2: &str = "attrValue2";
pub const ATTR3: &str = "attrValue3";

// ========== Fixtures ==========

/// Bean-style model with nullable scalar, nested, list and array properties
#[derive(Debug, Clone, Default)]
pub struct DemoModel {
    pub id: i32,
    pub name: Option<String>,
    pub long_val: Option<i64>,
    pub attr: Option<DemoAttribute>,
    pub string_array: Option<Box<[String]>>,
    pub children: Option<Vec<DemoModel>>,
}

impl Reflect for DemoModel {
    fn reflect(&self) -> Value {
        ObjectValue::bean(self)
            .accessor("get_id", &self.id)
            .nullable("get_name", &self.name)
            .nullable("get_long_val", &self.long_val)
            .nullable("get_attr", &self.attr)
            .nullable("get_string_array", &self.string_array)
            .nullable("get_children", &self.children)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoAttribute {
    pub value: Option<String>,
}

impl Reflect for DemoAttribute {
    fn reflect(&self) -> Value {
        ObjectValue::bean(self).nullable("get_value", &self.value).build()
    }
}

/// Plain data carrier whose accessors share the field names
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: Option<String>,
}

impl Reflect for Point {
    fn reflect(&self) -> Value {
        ObjectValue::record(self)
            .accessor("x", &self.x)
            .accessor("y", &self.y)
            .nullable("label", &self.label)
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

impl Reflect for Animal {
    fn reflect(&self) -> Value {
        ObjectValue::bean(self)
            .accessor("get_name", &self.name)
            .accessor("get_legs", &self.legs)
            .build()
    }
}

/// Inherits `get_name` and `get_legs` from [`Animal`] and overrides the
/// name accessor with its nickname
#[derive(Debug, Clone)]
pub struct Dog {
    pub base: Animal,
    pub nickname: String,
    pub good: bool,
}

impl Reflect for Dog {
    fn reflect(&self) -> Value {
        ObjectValue::bean(self)
            .accessor("get_name", &self.nickname)
            .accessor("is_good", &self.good)
            .inherit(&self.base)
            .build()
    }
}

pub fn model(id: i32, name: Option<&str>, attr: Option<DemoAttribute>, children: Option<Vec<DemoModel>>) -> DemoModel {
    DemoModel {
        id,
        name: name.map(str::to_string),
        attr,
        children,
        ..DemoModel::default()
    }
}

pub fn attr(value: Option<&str>) -> DemoAttribute {
    DemoAttribute {
        value: value.map(str::to_string),
    }
}

pub fn expected_simple_model() -> DemoModel {
    model(ID1, Some(NAME1), None, None)
}

pub fn expected_complex_model() -> DemoModel {
    model(
        ID1,
        Some(NAME1),
        Some(attr(Some(ATTR1))),
        Some(vec![model(ID2, Some(NAME2), Some(attr(Some(ATTR2))), Some(vec![]))]),
    )
}

pub fn model_with_string_array(values: &[&str]) -> DemoModel {
    DemoModel {
        string_array: Some(values.iter().map(|v| v.to_string()).collect()),
        ..expected_simple_model()
    }
}

pub fn model_with_long_val(value: i64) -> DemoModel {
    DemoModel {
        long_val: Some(value),
        ..expected_simple_model()
    }
}

pub fn dog(nickname: &str, legs: u32) -> Dog {
    Dog {
        base: Animal {
            name: "dog".to_string(),
            legs,
        },
        nickname: nickname.to_string(),
        good: true,
    }
}

// ========== Helpers ==========

fn describe(value: &dyn Reflect) -> String {
    equal_to(value).unwrap().describe_expected()
}

fn matches(actual: &dyn Reflect, expected: &dyn Reflect) -> bool {
    equal_to(expected).unwrap().matches(actual).unwrap()
}

/// Both values match themselves and each other, in both directions
pub fn assert_values_match(value1: &dyn Reflect, value2: &dyn Reflect) {
    assert!(matches(value1, value1), "Expected {} to match itself", value1.reflect());
    assert!(matches(value2, value2), "Expected {} to match itself", value2.reflect());
    assert!(matches(value2, value1), "Expected {} to match {}", value2.reflect(), value1.reflect());
    assert!(matches(value1, value2), "Expected {} to match {}", value1.reflect(), value2.reflect());
}

/// `value1` does not match a matcher built from `value2`, while each value
/// matches itself
pub fn assert_values_do_not_match(value1: &dyn Reflect, value2: &dyn Reflect) {
    assert!(
        !matches(value1, value2),
        "Expected {} not to match {}",
        value1.reflect(),
        value2.reflect()
    );
    assert!(matches(value1, value1), "Expected {} to match itself", value1.reflect());
    assert!(matches(value2, value2), "Expected {} to match itself", value2.reflect());
}

/// A value matches itself and yields a stable description
pub fn assert_match(value: &dyn Reflect) {
    let matcher = equal_to(value).unwrap();
    assert_that(value, &matcher).unwrap();
    assert_eq!(describe(value), describe(value));
}

/// Neither value matches a matcher built from the other, and their
/// descriptions differ
pub fn assert_no_match(a: &dyn Reflect, b: &dyn Reflect) {
    assert_match(a);
    assert_match(b);
    assert!(!matches(a, b), "Expected {} not to match {}", a.reflect(), b.reflect());
    assert!(!matches(b, a), "Expected {} not to match {}", b.reflect(), a.reflect());
    assert_ne!(describe(a), describe(b));
}

/// Matching `actual` against `expected` fails with exactly the given
/// expected and actual descriptions
pub fn assert_failure_description(
    expected_description: &str,
    actual_description: &str,
    expected: &dyn Reflect,
    actual: &dyn Reflect,
) {
    assert_no_match(expected, actual);

    let matcher = equal_to(expected).unwrap();
    let err = assert_that(actual, &matcher).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "\nExpected: {}\n     but: {}",
            expected_description, actual_description
        )
    );
}
