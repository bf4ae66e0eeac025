//! Reading and writing the JSON symbol catalog.
//!
//! The catalog is a pretty-printed JSON array of symbols; see
//! [`sfsym_core::types::Symbol`] for the wire names.

use crate::error::PipelineError;
use sfsym_core::Symbol;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Writes `symbols` as a pretty-printed JSON array.
pub fn write_catalog<W: Write>(symbols: &[Symbol], writer: W) -> Result<(), PipelineError> {
    serde_json::to_writer_pretty(writer, symbols)?;
    Ok(())
}

pub fn write_catalog_file<P: AsRef<Path>>(symbols: &[Symbol], path: P) -> Result<(), PipelineError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_catalog(symbols, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<Symbol>, PipelineError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<Symbol>, PipelineError> {
    read_catalog(BufReader::new(File::open(path)?))
}
