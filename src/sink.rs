//! Output capability: where a finished schema goes.

use std::{fs, io, path::Path};

use log::info;

/// Destination capability for a rendered schema.
///
/// Exactly one method is invoked per successful run: `notify` when no
/// destination was configured, `write` when one was.
pub trait SchemaSink {
    /// Announces the rendered schema on the structured console channel.
    fn notify(&mut self, schema: &str);

    /// Writes the rendered schema text verbatim to `destination`.
    fn write(&mut self, schema: &str, destination: &Path) -> io::Result<()>;
}

/// Production sink: notifications go to the log, writes go to the
/// filesystem.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SchemaSink for ConsoleSink {
    fn notify(&mut self, schema: &str) {
        info!("{schema}");
    }

    fn write(&mut self, schema: &str, destination: &Path) -> io::Result<()> {
        fs::write(destination, schema)?;
        info!("Schema written to {destination:?}");
        Ok(())
    }
}
