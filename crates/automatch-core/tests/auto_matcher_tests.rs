#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use automatch::errors::ErrorKind;
use automatch::{
    assert_that, contains, contains_in_any_order, equal_to, reflect_simple, MatcherSettings, ObjectValue,
    Reflect, Synthesizer, Value,
};
use common::*;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn value(name: &str, id: i32) -> DemoModel {
    let children = vec![
        full_model(&format!("{}-child1", name), id, Some(vec![])),
        full_model(&format!("{}-child2", name), id, Some(vec![])),
    ];
    full_model(name, id, Some(children))
}

fn full_model(name: &str, id: i32, children: Option<Vec<DemoModel>>) -> DemoModel {
    DemoModel {
        id,
        name: Some(format!("{}-{}", name, id)),
        long_val: Some(i64::from(id) * 2),
        attr: Some(attr(Some(&format!("{}-attr-{}", name, id)))),
        string_array: Some(
            vec![format!("{}-item1-{}", name, id), format!("{}-item2-{}", name, id)].into_boxed_slice(),
        ),
        children,
    }
}

// ========== Structured values ==========

#[test]
fn test_equal_to_same_and_equal_value() {
    let value1 = value("m", 1);
    assert!(equal_to(&value1).unwrap().matches(&value1).unwrap());
    assert!(equal_to(&value("m", 1)).unwrap().matches(&value1).unwrap());
}

#[test]
fn test_equal_to_not_equal() {
    assert!(!equal_to(&value("m", 2)).unwrap().matches(&value("m", 1)).unwrap());
}

#[test]
fn test_incompatible_types_is_type_mismatch() {
    let matcher = equal_to(&value("m", 1)).unwrap();
    let err = matcher.matches(&1i32).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        format!(
            "Expected object of type {} but got i32: 1",
            std::any::type_name::<DemoModel>()
        )
    );
}

#[test]
fn test_incompatible_list_member_types_is_type_mismatch() {
    let matcher = equal_to(&vec![attr(Some("attr"))]).unwrap();
    let err = matcher.matches(&vec![1i32]).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "Expected object of type {} but got i32: 1",
            std::any::type_name::<DemoAttribute>()
        )
    );
}

#[test]
fn test_complex_expected_map_actual_names_both_types() {
    // S3: an object compared to a map is a type mismatch, not a mismatch trace
    let matcher = equal_to(&attr(Some("a"))).unwrap();
    let actual: BTreeMap<&str, &str> = [("value", "a")].into_iter().collect();

    let err = matcher.matches(&actual).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    let message = err.to_string();
    assert!(message.contains(std::any::type_name::<DemoAttribute>()));
    assert!(message.contains(std::any::type_name::<BTreeMap<&str, &str>>()));
}

#[test]
fn test_type_mismatch_propagates_through_assertion() {
    let matcher = equal_to(&attr(Some("a"))).unwrap();
    let err = assert_that(&"a", &matcher).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_null_expected_is_rejected() {
    let err = equal_to(&Value::Null).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::NullExpected);
    assert_eq!(err.code(), "ERR_NULL_EXPECTED");
}

#[test]
fn test_object_without_properties_is_rejected() {
    #[derive(Debug)]
    struct Opaque;

    impl Reflect for Opaque {
        fn reflect(&self) -> Value {
            ObjectValue::bean(self).accessor("hash_code", &0i32).build()
        }
    }

    let err = equal_to(&Opaque).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::NoProperties);
    assert_eq!(
        err.to_string(),
        format!(
            "Failed to build MatcherConfig: type {} has no properties.",
            std::any::type_name::<Opaque>()
        )
    );

    let err = contains(&[Opaque]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::NoProperties);
}

#[test]
fn test_record_properties_keep_component_names() {
    let expected = Point { x: 1, y: 2, label: None };
    let matcher = equal_to(&expected).unwrap();

    assert_eq!(matcher.describe_expected(), "{label=null, x=<1>, y=<2>}");
    assert_eq!(
        matcher
            .describe_mismatch(&Point { x: 1, y: 3, label: Some("p".to_string()) })
            .unwrap(),
        "{label was \"p\", y was <3>}"
    );
}

#[test]
fn test_inherited_accessors_are_compared() {
    let matcher = equal_to(&dog("rex", 4)).unwrap();

    assert_eq!(matcher.describe_expected(), "{good=<true>, legs=<4>, name=\"rex\"}");
    assert!(matcher.matches(&dog("rex", 4)).unwrap());
    assert_eq!(matcher.describe_mismatch(&dog("rex", 3)).unwrap(), "{legs was <3>}");
}

#[test]
fn test_parent_matcher_accepts_subtype() {
    let parent = Animal {
        name: "rex".to_string(),
        legs: 4,
    };
    assert!(equal_to(&parent).unwrap().matches(&dog("rex", 4)).unwrap());

    let err = equal_to(&dog("rex", 4)).unwrap().matches(&parent).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

// ========== Contains ==========

#[test]
fn test_contains_on_models() {
    let (value1, value2) = (value("m", 1), value("m", 2));
    let actual = vec![value1.clone(), value2.clone()];

    assert!(contains::<DemoModel>(&[]).unwrap().matches(&Vec::<DemoModel>::new()).unwrap());
    assert!(!contains(&[value1.clone()]).unwrap().matches(&Vec::<DemoModel>::new()).unwrap());
    assert!(!contains::<DemoModel>(&[]).unwrap().matches(&vec![value1.clone()]).unwrap());
    assert!(contains(&[value1.clone()]).unwrap().matches(&vec![value1.clone()]).unwrap());
    assert!(contains(&[value("m", 1), value("m", 2)]).unwrap().matches(&actual).unwrap());
    assert!(!contains(&[value2.clone(), value1.clone()]).unwrap().matches(&actual).unwrap());
    assert!(!contains(&[value1.clone(), value2.clone(), value1.clone()])
        .unwrap()
        .matches(&actual)
        .unwrap());
}

#[test]
fn test_contains_in_any_order_on_models() {
    let (value1, value2) = (value("m", 1), value("m", 2));
    let actual = vec![value1.clone(), value2.clone()];

    assert!(contains_in_any_order::<DemoModel>(&[])
        .unwrap()
        .matches(&Vec::<DemoModel>::new())
        .unwrap());
    assert!(!contains_in_any_order(&[value1.clone()])
        .unwrap()
        .matches(&Vec::<DemoModel>::new())
        .unwrap());
    assert!(!contains_in_any_order::<DemoModel>(&[])
        .unwrap()
        .matches(&vec![value1.clone()])
        .unwrap());
    assert!(contains_in_any_order(&[value2.clone(), value1.clone()])
        .unwrap()
        .matches(&actual)
        .unwrap());
    assert!(!contains_in_any_order(&[value1.clone(), value2.clone(), value1.clone()])
        .unwrap()
        .matches(&actual)
        .unwrap());
}

#[test]
fn test_string_list_contains() {
    assert!(!contains(&["wrong"]).unwrap().matches(&vec!["val"]).unwrap());
    assert!(contains(&["val"]).unwrap().matches(&vec!["val"]).unwrap());
}

// ========== Simple types ==========

#[test]
fn test_simple_types() {
    assert_values_do_not_match(&"val", &"wrong");
    assert_values_do_not_match(&1u8, &2u8);
    assert_values_do_not_match(&1i16, &2i16);
    assert_values_do_not_match(&1i32, &2i32);
    assert_values_do_not_match(&1i64, &2i64);
    assert_values_do_not_match(&1u128, &2u128);
    assert_values_do_not_match(&true, &false);
    assert_values_do_not_match(&1.0f32, &1.1f32);
    assert_values_do_not_match(&1.0f64, &1.1f64);
    assert_values_do_not_match(&'a', &'b');
}

#[test]
fn test_value_types() {
    assert_values_do_not_match(&rust_decimal::Decimal::ZERO, &rust_decimal::Decimal::ONE);
    assert_values_do_not_match(&uuid::Uuid::new_v4(), &uuid::Uuid::new_v4());
    assert_values_do_not_match(
        &chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        &chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    );
    assert_values_do_not_match(
        &chrono::DateTime::from_timestamp_millis(1).unwrap(),
        &chrono::DateTime::from_timestamp_millis(2).unwrap(),
    );
    assert_values_do_not_match(&PathBuf::from("a"), &PathBuf::from("b"));
    assert_values_do_not_match(
        &url::Url::parse("http://example.com").unwrap(),
        &url::Url::parse("http://example.com/test").unwrap(),
    );
    assert_values_do_not_match(
        &"127.0.0.1".parse::<IpAddr>().unwrap(),
        &"::1".parse::<IpAddr>().unwrap(),
    );
    assert_values_do_not_match(&Duration::from_millis(1), &Duration::from_millis(2));
    assert_values_do_not_match(
        &std::any::TypeId::of::<i32>(),
        &std::any::TypeId::of::<i64>(),
    );
}

#[test]
fn test_owned_and_borrowed_values_compare_equal() {
    assert_values_match(&"a", &"a".to_string());
    assert_values_match(&PathBuf::from("a"), &Path::new("a"));
}

#[test]
fn test_numeric_types_are_not_coerced() {
    assert!(!equal_to(&1i32).unwrap().matches(&1i64).unwrap());
}

#[test]
fn test_nan_matches_itself() {
    assert!(equal_to(&f64::NAN).unwrap().matches(&f64::NAN).unwrap());
}

#[test]
fn test_string_descriptions_are_escaped() {
    let matcher = equal_to(&"a\"b\n").unwrap();
    assert_eq!(matcher.describe_expected(), "\"a\\\"b\\n\"");
}

#[derive(Debug, PartialEq)]
enum Color {
    Red,
    Green,
}

reflect_simple!(Color);

#[test]
fn test_registered_value_type() {
    assert_values_do_not_match(&Color::Red, &Color::Green);
    assert_eq!(equal_to(&Color::Red).unwrap().describe_expected(), "<Red>");
}

#[test]
fn test_settings_register_simple_object_type() {
    let synthesizer = Synthesizer::new(MatcherSettings::default().with_simple_type::<Point>());
    let expected = Point { x: 1, y: 2, label: None };

    let matcher = synthesizer.equal_to(&expected).unwrap();

    assert_eq!(matcher.describe_expected(), format!("<{:?}>", expected));
    assert!(matcher.matches(&expected).unwrap());
    assert!(!matcher.matches(&Point { x: 1, y: 3, label: None }).unwrap());
}

#[test]
fn test_settings_ignore_accessor() {
    let synthesizer = Synthesizer::new(MatcherSettings::default().with_ignored_accessor("get_name"));
    let matcher = synthesizer.equal_to(&model(ID1, Some(NAME1), None, None)).unwrap();

    assert!(matcher.matches(&model(ID1, Some(NAME2), None, None)).unwrap());
    assert!(!matcher.describe_expected().contains("name="));
}

#[test]
fn test_settings_from_toml() {
    let settings = MatcherSettings::from_toml_str(
        r#"
        ignored_accessors = ["get_long_val", "get_string_array"]
        "#,
    )
    .unwrap();
    let matcher = Synthesizer::new(settings)
        .equal_to(&expected_simple_model())
        .unwrap();

    assert_eq!(
        matcher.describe_expected(),
        format!(
            "{{id=<{}>, name=\"{}\", attr=null, children=null}}",
            ID1, NAME1
        )
    );
    assert!(matcher.matches(&model_with_long_val(42)).unwrap());
}

// ========== Optionals ==========

fn failure_message(expected: &dyn Reflect, actual: &dyn Reflect) -> String {
    let matcher = equal_to(expected).unwrap();
    assert_that(actual, &matcher).unwrap_err().to_string()
}

#[test]
fn test_optional_empty() {
    assert_values_do_not_match(&None::<&str>, &Some("a"));
    assert_eq!(
        failure_message(&Some("a"), &None::<&str>),
        "\nExpected: has value that is \"a\"\n     but: was <Empty>"
    );

    assert_values_do_not_match(&Some("a"), &None::<&str>);
    assert_eq!(
        failure_message(&None::<&str>, &Some("a")),
        "\nExpected: is <Empty>\n     but: had value \"a\""
    );
}

#[test]
fn test_optional_with_string() {
    assert_values_do_not_match(&Some("b"), &Some("a"));
    assert_eq!(
        failure_message(&Some("a"), &Some("b")),
        "\nExpected: has value that is \"a\"\n     but: value was \"b\""
    );
}

#[test]
fn test_optional_with_model() {
    let m1 = DemoModel {
        id: 1,
        name: Some("a".to_string()),
        long_val: Some(1),
        ..DemoModel::default()
    };
    let m2 = DemoModel { id: 2, ..m1.clone() };

    assert_values_do_not_match(&Some(m1.clone()), &Some(m2.clone()));
    assert!(failure_message(&Some(m2), &Some(m1)).contains("but: value {id was <1>}"));
    assert_values_match(&Some(value("m", 1)), &Some(value("m", 1)));
}
