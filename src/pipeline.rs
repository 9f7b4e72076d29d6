//! Run orchestration: the stage machine driving one inference run.
//!
//! A run advances through the stages strictly in order; any error is
//! terminal for the run and nothing is retried. The output sink sees
//! exactly one interaction on success and none on failure.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
    path::PathBuf,
    str::FromStr,
};

use encoding_rs::Encoding;
use log::debug;

use crate::{
    error::SchemaError,
    header, infer, io_utils,
    reconcile::{self, OverrideSpec},
    sample::SampleReader,
    schema::{PrimitiveType, Schema},
    sink::SchemaSink,
};

pub const DEFAULT_SAMPLE_ROWS: usize = 1000;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ValidatingConfig,
    ReadingSample,
    ValidatingHeader,
    InferringTypes,
    Reconciling,
    BuildingSchema,
    Emitting,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::ValidatingConfig => "validating-config",
            Stage::ReadingSample => "reading-sample",
            Stage::ValidatingHeader => "validating-header",
            Stage::InferringTypes => "inferring-types",
            Stage::Reconciling => "reconciling",
            Stage::BuildingSchema => "building-schema",
            Stage::Emitting => "emitting",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied configuration for one run, mirroring the CLI surface.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Sample sources; exactly one is required per run.
    pub sample_paths: Vec<PathBuf>,
    pub record_name: String,
    pub required_fields: Vec<String>,
    /// `(column, type token)` pairs, validated during `ValidatingConfig`.
    pub field_types: Vec<(String, String)>,
    pub minimize: bool,
    /// Schema destination; the console sink is notified when unset.
    pub output: Option<PathBuf>,
    /// Row scan bound; 0 means full scan.
    pub sample_rows: usize,
    pub delimiter: Option<u8>,
    pub input_encoding: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sample_paths: Vec::new(),
            record_name: "Record".to_string(),
            required_fields: Vec::new(),
            field_types: Vec::new(),
            minimize: false,
            output: None,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            delimiter: None,
            input_encoding: None,
        }
    }
}

/// Runs the full pipeline against `sink`, returning the built schema.
pub fn execute(config: &RunConfig, sink: &mut dyn SchemaSink) -> Result<Schema, SchemaError> {
    enter(Stage::ValidatingConfig);
    let (path, overrides, encoding) = validate_config(config)?;
    let delimiter = io_utils::resolve_input_delimiter(&path, config.delimiter);

    enter(Stage::ReadingSample);
    let mut reader = SampleReader::open(&path, delimiter, encoding)?;
    let headers = reader.headers()?;

    enter(Stage::ValidatingHeader);
    header::validate_headers(&headers)?;

    enter(Stage::InferringTypes);
    let rows = reader.read_rows(config.sample_rows)?;
    let profiles = infer::profile_columns(&headers, &rows);

    enter(Stage::Reconciling);
    let fields = reconcile::reconcile(&profiles, &overrides)?;

    enter(Stage::BuildingSchema);
    let schema = Schema {
        record_name: config.record_name.clone(),
        fields,
    };
    let rendered = schema.render(config.minimize);

    enter(Stage::Emitting);
    match &config.output {
        Some(destination) => {
            sink.write(&rendered, destination)
                .map_err(|source| SchemaError::SchemaWrite {
                    path: destination.clone(),
                    source,
                })?;
        }
        None => sink.notify(&rendered),
    }
    Ok(schema)
}

fn enter(stage: Stage) {
    debug!("entering stage {stage}");
}

fn validate_config(
    config: &RunConfig,
) -> Result<(PathBuf, OverrideSpec, &'static Encoding), SchemaError> {
    let path = match config.sample_paths.as_slice() {
        [single] => single.clone(),
        [] => {
            return Err(SchemaError::Configuration(
                "exactly one sample source is required, none given".to_string(),
            ));
        }
        many => {
            return Err(SchemaError::Configuration(format!(
                "exactly one sample source is required, {} given",
                many.len()
            )));
        }
    };

    let mut field_types = BTreeMap::new();
    for (column, token) in &config.field_types {
        let requested = PrimitiveType::from_str(token)
            .map_err(|err| SchemaError::Configuration(err.to_string()))?;
        field_types.insert(column.clone(), requested);
    }
    let required: HashSet<String> = config.required_fields.iter().cloned().collect();

    let encoding = io_utils::resolve_encoding(config.input_encoding.as_deref())
        .map_err(|err| SchemaError::Configuration(err.to_string()))?;

    Ok((
        path,
        OverrideSpec {
            field_types,
            required,
        },
        encoding,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_requires_exactly_one_source() {
        let none = RunConfig::default();
        match validate_config(&none) {
            Err(SchemaError::Configuration(message)) => {
                assert!(message.contains("none given"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }

        let many = RunConfig {
            sample_paths: vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")],
            ..RunConfig::default()
        };
        match validate_config(&many) {
            Err(SchemaError::Configuration(message)) => {
                assert!(message.contains("2 given"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn config_rejects_unknown_type_tokens() {
        let config = RunConfig {
            sample_paths: vec![PathBuf::from("a.csv")],
            field_types: vec![("id".to_string(), "decimal".to_string())],
            ..RunConfig::default()
        };
        match validate_config(&config) {
            Err(SchemaError::Configuration(message)) => {
                assert!(message.contains("Unknown field type"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn config_maps_int_alias_to_long() {
        let config = RunConfig {
            sample_paths: vec![PathBuf::from("a.csv")],
            field_types: vec![("average".to_string(), "int".to_string())],
            ..RunConfig::default()
        };
        let (_, overrides, _) = validate_config(&config).expect("valid config");
        assert_eq!(
            overrides.field_types.get("average"),
            Some(&PrimitiveType::Long)
        );
    }
}
