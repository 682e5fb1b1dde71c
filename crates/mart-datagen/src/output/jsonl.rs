use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DatagenError, DatagenResult, IoContext};

/// Write records as JSONL (one compact JSON object per line).
///
/// Parent directories are created as needed and an existing file is
/// truncated. Returns the number of lines written.
pub fn write_jsonl<T: Serialize>(records: &[T], output_path: &Path) -> DatagenResult<usize> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).at_path(parent)?;
        }
    }

    let file = File::create(output_path).at_path(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}").at_path(output_path)?;
    }

    writer.flush().at_path(output_path)?;
    mg_debug!(io, path = %output_path.display(), lines = records.len(), "jsonl written");
    Ok(records.len())
}

/// Read records back from a JSONL file. Blank lines are skipped.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> DatagenResult<Vec<T>> {
    let file = File::open(path).at_path(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.at_path(path)?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| DatagenError::Decode {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}
