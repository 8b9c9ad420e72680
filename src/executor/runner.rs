use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::input::{read_sources, SourceLine};
use crate::merger::merge_runs;
use crate::parser::{parse_line, MergedRecord};
use crate::report::render_report;

/// Parse and merge a batch of lines; the result is most recent first.
///
/// The first bad line aborts the whole batch.
pub fn run_batch(lines: &[SourceLine]) -> Result<Vec<MergedRecord>> {
    let parsed = lines
        .iter()
        .map(|l| {
            parse_line(&l.text).map_err(|error| Error::Line {
                source_name: l.source.clone(),
                line: l.line,
                error,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut merged = merge_runs(parsed)?;
    debug!("{} lines merged into {} rows", lines.len(), merged.len());
    merged.reverse();
    Ok(merged)
}

/// Read the sources, process them and render the report.
pub fn run(paths: &[PathBuf]) -> Result<String> {
    let lines = read_sources(paths)?;
    info!("processing {} lines", lines.len());
    let rows = run_batch(&lines)?;
    Ok(render_report(&rows))
}
