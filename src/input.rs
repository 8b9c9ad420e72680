//! Line source: reads files or standard input in order and drops blank lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Name reported for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// One non-blank input line with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Raw text; leading whitespace is kept because it selects the layout
    pub text: String,
    pub source: String,
    /// 1-based physical line number within `source`
    pub line: usize,
}

/// Read non-blank lines from one reader.
pub fn read_lines<R: BufRead>(reader: R, source: &str) -> Result<Vec<SourceLine>> {
    let mut out = Vec::new();
    for (i, text) in reader.lines().enumerate() {
        let text = text.map_err(|error| Error::Io {
            source_name: source.to_string(),
            error,
        })?;
        if text.trim().is_empty() {
            continue;
        }
        out.push(SourceLine {
            text,
            source: source.to_string(),
            line: i + 1,
        });
    }
    debug!("read {} lines from {}", out.len(), source);
    Ok(out)
}

/// Read every source in order. No paths, or `-`, means standard input.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceLine>> {
    if paths.is_empty() {
        return read_stdin();
    }

    let mut lines = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            lines.extend(read_stdin()?);
        } else {
            lines.extend(read_file(path)?);
        }
    }
    Ok(lines)
}

fn read_stdin() -> Result<Vec<SourceLine>> {
    read_lines(io::stdin().lock(), STDIN_NAME)
}

fn read_file(path: &Path) -> Result<Vec<SourceLine>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|error| Error::Io {
        source_name: name.clone(),
        error,
    })?;
    read_lines(BufReader::new(file), &name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_blank_lines_and_keeps_numbering() {
        let input = "0, 0, 1, 1\n\n   \n   0, 0, a = 1, 1\r\n";
        let lines = read_lines(Cursor::new(input), "mem").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 1);
        assert_eq!(lines[1].line, 4);
        assert_eq!(lines[1].text, "   0, 0, a = 1, 1");
        assert_eq!(lines[1].source, "mem");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_sources(&[PathBuf::from("/nonexistent/levels.csv")]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
