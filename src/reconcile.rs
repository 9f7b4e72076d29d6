//! Override reconciliation: merging caller-declared types and required
//! fields with the inferred column profiles.

use std::collections::{BTreeMap, HashSet};

use crate::{
    error::SchemaError,
    infer::{self, ColumnProfile},
    schema::{FieldDescriptor, PrimitiveType},
};

/// Caller-declared adjustments to the inferred schema.
#[derive(Debug, Clone, Default)]
pub struct OverrideSpec {
    /// Requested types by column name. Keys matching no column are ignored.
    pub field_types: BTreeMap<String, PrimitiveType>,
    /// Columns that must come out non-nullable.
    pub required: HashSet<String>,
}

/// Applies overrides to the inferred profiles, producing the final field
/// descriptors in header order.
///
/// All-or-nothing: the first incompatible override aborts the run before
/// any schema is assembled. Nullability is caller-declared, never inferred
/// from the data.
pub fn reconcile(
    profiles: &[ColumnProfile],
    overrides: &OverrideSpec,
) -> Result<Vec<FieldDescriptor>, SchemaError> {
    profiles
        .iter()
        .map(|profile| {
            let ty = match overrides.field_types.get(&profile.name) {
                Some(&requested) => {
                    ensure_representable(profile, requested)?;
                    requested
                }
                None => profile.inferred,
            };
            Ok(FieldDescriptor {
                name: profile.name.clone(),
                ty,
                nullable: !overrides.required.contains(&profile.name),
            })
        })
        .collect()
}

/// Re-classifies every observed value and demands it sit at or below the
/// requested type in the widening order.
fn ensure_representable(
    profile: &ColumnProfile,
    requested: PrimitiveType,
) -> Result<(), SchemaError> {
    for value in &profile.values {
        if !requested.can_hold(infer::detect(value)) {
            return Err(SchemaError::IncompatibleType {
                column: profile.name.clone(),
                requested,
                value: value.clone(),
            });
        }
    }
    Ok(())
}
