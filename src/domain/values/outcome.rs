//! The raw shapes a resolver can produce.
//!
//! Every resolver returns exactly one [`IndicatorOutcome`] variant and never
//! raises past its own boundary; upstream failures become null payloads.
//! Groups keep insertion order so flattened rows come out deterministically.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A value inside a nested group: either a leaf number or one more
/// level of named numbers. Nesting stops here.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupValue {
    Leaf(Option<f64>),
    Group(Vec<(String, Option<f64>)>),
}

/// Raw resolver output, polymorphic over the three shapes indicators
/// come in.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutcome {
    /// A single number (or null when unavailable).
    Scalar(Option<f64>),
    /// A labeled group of numbers, e.g. a credit-spread breakdown.
    FlatGroup(Vec<(String, Option<f64>)>),
    /// A group whose entries may themselves be flat groups.
    NestedGroup(Vec<(String, GroupValue)>),
}

impl IndicatorOutcome {
    pub fn null_scalar() -> Self {
        IndicatorOutcome::Scalar(None)
    }

    /// A flat group with the given keys, every value null. Composite
    /// resolvers return this when any input series is missing.
    pub fn null_group(keys: &[&str]) -> Self {
        IndicatorOutcome::FlatGroup(keys.iter().map(|k| (k.to_string(), None)).collect())
    }

    /// Convenience for building a flat group from key/value pairs.
    pub fn group(entries: Vec<(&str, Option<f64>)>) -> Self {
        IndicatorOutcome::FlatGroup(
            entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        )
    }

    /// The `value` sub-key, if this outcome is a group that carries one.
    pub fn value_entry(&self) -> Option<Option<f64>> {
        match self {
            IndicatorOutcome::FlatGroup(entries) => entries
                .iter()
                .find(|(k, _)| k == "value")
                .map(|(_, v)| *v),
            _ => None,
        }
    }
}

// Serialized as JSON maps so CLI output reads like the records the
// exporter flattens: scalars as {"value": x}, groups keyed as-is.
impl Serialize for IndicatorOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndicatorOutcome::Scalar(v) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("value", v)?;
                map.end()
            }
            IndicatorOutcome::FlatGroup(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            IndicatorOutcome::NestedGroup(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    match v {
                        GroupValue::Leaf(n) => map.serialize_entry(k, n)?,
                        GroupValue::Group(inner) => {
                            let inner_map: serde_json::Map<String, serde_json::Value> = inner
                                .iter()
                                .map(|(ik, iv)| (ik.clone(), serde_json::json!(iv)))
                                .collect();
                            map.serialize_entry(k, &inner_map)?;
                        }
                    }
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_serializes_as_value_map() {
        let json = serde_json::to_value(IndicatorOutcome::Scalar(Some(21.5))).unwrap();
        assert_eq!(json, serde_json::json!({"value": 21.5}));

        let json = serde_json::to_value(IndicatorOutcome::Scalar(None)).unwrap();
        assert_eq!(json, serde_json::json!({"value": null}));
    }

    #[test]
    fn test_flat_group_serializes_keys_in_order() {
        let outcome = IndicatorOutcome::group(vec![
            ("baa_yield", Some(6.5)),
            ("treasury_10y", Some(4.2)),
            ("baa_spread", Some(2.3)),
        ]);
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"baa_yield":6.5,"treasury_10y":4.2,"baa_spread":2.3}"#
        );
    }

    #[test]
    fn test_nested_group_serializes_inner_map() {
        let outcome = IndicatorOutcome::NestedGroup(vec![(
            "credit".into(),
            GroupValue::Group(vec![("baa".into(), Some(6.5)), ("t10".into(), Some(4.2))]),
        )]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"credit": {"baa": 6.5, "t10": 4.2}}));
    }

    #[test]
    fn test_null_group_builder() {
        let outcome = IndicatorOutcome::null_group(&["gdp", "gdp_growth"]);
        match outcome {
            IndicatorOutcome::FlatGroup(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(entries.iter().all(|(_, v)| v.is_none()));
            }
            _ => panic!("expected flat group"),
        }
    }

    #[test]
    fn test_value_entry_lookup() {
        let outcome = IndicatorOutcome::group(vec![
            ("value", Some(4.1)),
            ("earnings_yield", Some(7.3)),
        ]);
        assert_eq!(outcome.value_entry(), Some(Some(4.1)));
        assert_eq!(IndicatorOutcome::Scalar(Some(1.0)).value_entry(), None);
    }
}
