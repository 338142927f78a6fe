// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::csv::write_row;

/// Ensure parent dir exists; create/truncate the file; optionally write a
/// header row.
pub fn write_rows_start(path: &Path, headers: Option<&[String]>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        write_row(&mut out, h)?;
    }
    out.flush()?;
    Ok(())
}

/// Append rows to an existing CSV file (must be created already).
pub fn append_rows(path: &Path, rows: &[Vec<String>]) -> io::Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for row in rows {
        write_row(&mut out, row)?;
    }
    out.flush()?;
    Ok(())
}
