pub mod cli;
pub mod error;
pub mod header;
pub mod infer;
pub mod io_utils;
pub mod pipeline;
pub mod reconcile;
pub mod sample;
pub mod schema;
pub mod sink;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::{cli::Cli, pipeline::RunConfig, sink::ConsoleSink};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv_infer", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = RunConfig::from(cli);
    let mut sink = ConsoleSink;
    pipeline::execute(&config, &mut sink)?;
    Ok(())
}
