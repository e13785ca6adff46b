//! Plain-text edge lists.
//!
//! One connection per line, written `from,to`. Blank lines and lines starting
//! with `#` are skipped. Surrounding whitespace around each field is ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{GraphError, Result};

/// Read connections from an edge list.
///
/// Fails with [`GraphError::InvalidInput`] on the first line that is not a
/// pair of non-empty node names. Line numbers start at 1.
pub fn read_connections<R: BufRead>(reader: R) -> Result<Vec<(String, String)>, String> {
    let mut connections: Vec<(String, String)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [from, to] if !from.is_empty() && !to.is_empty() => {
                connections.push((from.to_string(), to.to_string()));
            }
            [_, _] => {
                return Err(GraphError::InvalidInput {
                    line: line_number,
                    reason: "empty node name".to_string(),
                });
            }
            _ => {
                return Err(GraphError::InvalidInput {
                    line: line_number,
                    reason: format!("expected `from,to`, found {} fields", fields.len()),
                });
            }
        }
    }

    tracing::debug!(connections = connections.len(), "read edge list");
    Ok(connections)
}

/// Read connections from an edge-list file.
pub fn read_connections_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(String, String)>, String> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading edge list");

    let file = File::open(path)?;
    read_connections(BufReader::new(file))
}
