//! Code-blocks side-output writer
//!
//! Write-only, one line per `TokenSequence`, index-aligned to `id`
//! (`spec.md` §6). The detector never reads this file back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CloneError;
use crate::shared::models::CodeBlockRecord;

pub struct CodeBlocksWriter {
    out: BufWriter<File>,
}

impl CodeBlocksWriter {
    pub fn create(path: &Path) -> Result<Self, CloneError> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Append one record. Caller is responsible for calling this in
    /// `id` order — the file has no embedded id column, only position.
    pub fn write_record(&mut self, record: &CodeBlockRecord) -> Result<(), CloneError> {
        writeln!(self.out, "{}", record.to_csv_line())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), CloneError> {
        self.out.flush()?;
        Ok(())
    }
}
