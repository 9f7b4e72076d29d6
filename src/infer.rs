//! Cell type detection and per-column type unification.
//!
//! Detection is pure and total: unparseable text is evidence of `String`,
//! never an error. Unification folds per-row detections through the
//! widening lattice on [`PrimitiveType`].

use crate::schema::PrimitiveType;

/// Classifies one trimmed raw value into a primitive type.
///
/// First match wins: boolean, then long, then float, then string. Boolean
/// matching is case-sensitive (`true`/`false` only); float matching
/// tolerates a single trailing literal suffix (`3.14f`).
pub fn detect(value: &str) -> PrimitiveType {
    if value == "true" || value == "false" {
        return PrimitiveType::Boolean;
    }
    if value.parse::<i64>().is_ok() {
        return PrimitiveType::Long;
    }
    if parses_as_float(value) {
        return PrimitiveType::Float;
    }
    PrimitiveType::String
}

fn parses_as_float(value: &str) -> bool {
    if value.parse::<f64>().is_ok() {
        return true;
    }
    match value.strip_suffix(['f', 'F', 'd', 'D']) {
        Some(body) => !body.is_empty() && body.parse::<f64>().is_ok(),
        None => false,
    }
}

/// Folds per-row detections into a single column type.
///
/// An empty detection sequence (no sampled rows) defaults to `String`.
pub fn unify<I>(detections: I) -> PrimitiveType
where
    I: IntoIterator<Item = PrimitiveType>,
{
    detections
        .into_iter()
        .reduce(PrimitiveType::widen)
        .unwrap_or(PrimitiveType::String)
}

/// Everything the reconciler needs about one column: its name, the raw
/// values observed in the sample, and the unified inferred type.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub values: Vec<String>,
    pub inferred: PrimitiveType,
}

/// Builds one profile per header column from the sampled rows.
///
/// Rows are positionally aligned with the header; the sample reader
/// enforces strict field counts before this point.
pub fn profile_columns(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnProfile> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<String> = rows.iter().map(|row| row[idx].clone()).collect();
            let inferred = unify(values.iter().map(|value| detect(value)));
            ColumnProfile {
                name: name.clone(),
                values,
                inferred,
            }
        })
        .collect()
}
