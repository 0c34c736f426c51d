//! Line-oriented catalog format, one task per line:
//!
//! ```text
//! A / 1 /
//! B / 2 / A
//! C / 3.5 / A B
//! ```
//!
//! Blank lines are skipped; the prerequisite field may be empty or left out.

use super::{ImportError, ImportResult};
use crate::catalog::Catalog;
use crate::instant::Instant;
use crate::task::Task;

pub fn parse_catalog(input: &str) -> ImportResult<Catalog> {
    let mut tasks = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        tasks.push(parse_line(idx + 1, line)?);
    }
    Ok(Catalog::new(tasks)?)
}

fn parse_line(line_no: usize, line: &str) -> ImportResult<Task> {
    let error = |message: String| ImportError::Parse {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line.split('/').map(str::trim).collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(error(format!(
            "expected 'name / duration / prerequisites', got {line:?}"
        )));
    }

    let name = fields[0];
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(error(format!("invalid task name {name:?}")));
    }
    let duration = fields[1]
        .parse::<Instant>()
        .map_err(|err| error(format!("invalid duration for task {name}: {err}")))?;
    let prerequisites = fields
        .get(2)
        .map(|field| field.split_whitespace().collect::<Vec<_>>())
        .unwrap_or_default();

    Task::new(name, duration, prerequisites).map_err(|err| error(err.to_string()))
}
