//! Typed error taxonomy for the inference pipeline.
//!
//! Every variant is fatal to the run: no schema is emitted after any of
//! these, and nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::PrimitiveType;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Invocation shape problems, detected before any file I/O.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A header token violates the field-name rule.
    #[error("header token '{token}' is not a legal field name")]
    InvalidHeader { token: String },

    /// A header token appears more than once.
    #[error("header token '{token}' appears more than once")]
    DuplicateHeader { token: String },

    /// A requested type override cannot represent an observed value.
    #[error("column '{column}' cannot be declared {requested}: value '{value}' does not fit")]
    IncompatibleType {
        column: String,
        requested: PrimitiveType,
        value: String,
    },

    /// The sample could not be opened, decoded, or parsed.
    #[error("failed to read sample {path:?}")]
    SampleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema destination could not be written.
    #[error("failed to write schema to {path:?}")]
    SchemaWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
