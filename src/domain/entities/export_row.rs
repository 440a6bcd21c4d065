//! Flattening a canonical record into flat tabular rows.
//!
//! One scalar outcome yields one row with `sub_metric = "value"`; group
//! outcomes yield one row per sub-key; nested entries flatten as
//! `outer_inner`. Rows are append-only.

use crate::domain::entities::record::CanonicalRecord;
use crate::domain::values::outcome::{GroupValue, IndicatorOutcome};
use serde::Serialize;

/// Column order of the export schema:
/// `metric,sub_metric,value,timestamp,source,retrieval_time`.
pub const EXPORT_HEADER: [&str; 6] = [
    "metric",
    "sub_metric",
    "value",
    "timestamp",
    "source",
    "retrieval_time",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub metric: String,
    pub sub_metric: String,
    /// None serializes as an empty cell, never as a zero.
    pub value: Option<f64>,
    /// The indicator's own as-of date (`YYYY-MM-DD`).
    pub timestamp: String,
    pub source: String,
    /// Wall clock at export time (`YYYY-MM-DD HH:MM:SS`).
    pub retrieval_time: String,
}

/// Flatten a record into one or more rows.
pub fn flatten_record(
    metric: &str,
    record: &CanonicalRecord,
    retrieval_time: &str,
) -> Vec<ExportRow> {
    let row = |sub_metric: String, value: Option<f64>| ExportRow {
        metric: metric.to_string(),
        sub_metric,
        value,
        timestamp: record.as_of.clone(),
        source: record.source.clone(),
        retrieval_time: retrieval_time.to_string(),
    };

    match &record.outcome {
        IndicatorOutcome::Scalar(v) => vec![row("value".into(), *v)],
        IndicatorOutcome::FlatGroup(entries) => entries
            .iter()
            .map(|(k, v)| row(k.clone(), *v))
            .collect(),
        IndicatorOutcome::NestedGroup(entries) => {
            let mut rows = Vec::new();
            for (outer, value) in entries {
                match value {
                    GroupValue::Leaf(v) => rows.push(row(outer.clone(), *v)),
                    GroupValue::Group(inner) => {
                        for (ik, iv) in inner {
                            rows.push(row(format!("{outer}_{ik}"), *iv));
                        }
                    }
                }
            }
            rows
        }
    }
}
