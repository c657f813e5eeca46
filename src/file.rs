// src/file.rs
//
// CSV table I/O for cleaned rows. Every table, combined or partitioned, has the
// same header line, even when it has no rows.

use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use crate::data::{CleanedRow, EXPORT_COLUMNS};
use crate::error::ExportError;

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(io_err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    Ok(())
}

/// Create/truncate `path` and write the header plus `rows`. Returns the row count.
pub fn write_rows<'a, I>(path: &Path, rows: I) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a CleanedRow>,
{
    let csv_err = |source| ExportError::Csv { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)
        .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    wtr.write_record(EXPORT_COLUMNS).map_err(csv_err)?;

    let mut n = 0;
    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
        n += 1;
    }
    wtr.flush()
        .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(n)
}

/// Read a table written by [`write_rows`].
pub fn read_rows(path: &Path) -> Result<Vec<CleanedRow>, ExportError> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|source| ExportError::Csv { path: path.to_path_buf(), source })?;
    rdr.deserialize()
        .collect::<Result<Vec<CleanedRow>, _>>()
        .map_err(|source| ExportError::Csv { path: path.to_path_buf(), source })
}
