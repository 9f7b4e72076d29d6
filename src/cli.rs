//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::{DEFAULT_SAMPLE_ROWS, RunConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Infer a record schema from delimited sample data", long_about = None)]
pub struct Cli {
    /// Sample file to read ('-' for stdin); exactly one is required
    #[arg(short = 'i', long = "input", action = clap::ArgAction::Append)]
    pub inputs: Vec<PathBuf>,
    /// Name of the emitted record
    #[arg(long = "record-name", default_value = "Record")]
    pub record_name: String,
    /// Column names that must come out non-nullable
    #[arg(long = "require", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub required_fields: Vec<String>,
    /// Per-column type override of the form `column=type`
    #[arg(long = "field-type", value_parser = parse_field_type, action = clap::ArgAction::Append)]
    pub field_types: Vec<(String, String)>,
    /// Emit the schema in its most compact textual form
    #[arg(long)]
    pub minimize: bool,
    /// Destination file for the schema (notified to the console if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Number of rows to sample when inferring types (0 means full scan)
    #[arg(long = "sample-rows", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            sample_paths: cli.inputs,
            record_name: cli.record_name,
            required_fields: cli.required_fields,
            field_types: cli.field_types,
            minimize: cli.minimize,
            output: cli.output,
            sample_rows: cli.sample_rows,
            delimiter: cli.delimiter,
            input_encoding: cli.input_encoding,
        }
    }
}

pub fn parse_field_type(value: &str) -> Result<(String, String), String> {
    let (column, ty) = value
        .split_once('=')
        .ok_or_else(|| format!("Field type override '{value}' must use the form column=type"))?;
    let column = column.trim();
    let ty = ty.trim();
    if column.is_empty() {
        return Err(format!("Column name cannot be empty in override '{value}'"));
    }
    if ty.is_empty() {
        return Err(format!("Type cannot be empty in override '{value}'"));
    }
    Ok((column.to_string(), ty.to_string()))
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
