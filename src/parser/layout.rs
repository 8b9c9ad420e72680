use tracing::debug;

use super::annotation::join_annotation;
use super::number::short_form;
use super::types::ParsedRecord;
use crate::error::FormatError;

/// Record layout of an input line, told apart by leading spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Four bare numerals
    Plain,
    /// Three leading spaces; third field is `annotation = numeral`
    RmsAnnotated,
    /// Four or more leading spaces; fourth field is `annotation = numeral`
    VppAnnotated,
}

/// Prefix predicates, longest first: a 4-space line also starts with 3 spaces.
const PREFIXES: [(&str, Layout); 2] = [
    ("    ", Layout::VppAnnotated),
    ("   ", Layout::RmsAnnotated),
];

impl Layout {
    /// Classify a raw (untrimmed) line.
    pub fn detect(line: &str) -> Layout {
        PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(*prefix))
            .map(|&(_, layout)| layout)
            .unwrap_or(Layout::Plain)
    }
}

/// Trim the line, split on commas and trim each field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split(',').map(str::trim).collect()
}

/// Parse one raw line into a record with short-form numerals.
pub fn parse_line(line: &str) -> Result<ParsedRecord, FormatError> {
    let layout = Layout::detect(line);
    let fields = split_fields(line);
    let [dbv, dbu, rms, vpp] = fields.as_slice() else {
        return Err(FormatError::FieldCount {
            found: fields.len(),
        });
    };
    debug!(?layout, "parsing line: {}", line.trim());

    let record = match layout {
        Layout::Plain => ParsedRecord::new(
            short_form(dbv)?,
            short_form(dbu)?,
            short_form(rms)?,
            short_form(vpp)?,
        ),
        Layout::RmsAnnotated => ParsedRecord::new(
            short_form(dbv)?,
            short_form(dbu)?,
            composite(rms)?,
            short_form(vpp)?,
        ),
        Layout::VppAnnotated => ParsedRecord::new(
            short_form(dbv)?,
            short_form(dbu)?,
            short_form(rms)?,
            composite(vpp)?,
        ),
    };
    Ok(record)
}

/// Normalize an `annotation = numeral` field; a field without `=` is a bare numeral.
fn composite(field: &str) -> Result<String, FormatError> {
    let parts: Vec<&str> = field.split('=').map(str::trim).collect();
    match parts.as_slice() {
        [value] => Ok(short_form(value)?),
        [info, value] => Ok(join_annotation(Some(*info), &short_form(value)?)),
        _ => Err(FormatError::AmbiguousAnnotation {
            field: field.to_string(),
            parts: parts.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn detects_layouts_longest_prefix_first() {
        assert_eq!(Layout::detect("0, 1, 2, 3"), Layout::Plain);
        assert_eq!(Layout::detect("  0, 1, 2, 3"), Layout::Plain);
        assert_eq!(Layout::detect("   0, 1, a = 2, 3"), Layout::RmsAnnotated);
        assert_eq!(Layout::detect("    0, 1, 2, a = 3"), Layout::VppAnnotated);
        assert_eq!(Layout::detect("        0, 1, 2, a = 3"), Layout::VppAnnotated);
        assert_eq!(Layout::detect("\t0, 1, 2, 3"), Layout::Plain);
    }

    #[test]
    fn parses_plain_line() {
        let record = parse_line("0, -0.22, 1.0, 1.414").unwrap();
        assert_eq!(record, ParsedRecord::new("0", "-0.22000", "1", "1.41400"));
    }

    #[test]
    fn parses_rms_annotated_line() {
        let record = parse_line("   0, -0.22, ref=1.0, 1.414").unwrap();
        assert_eq!(record.rms, "ref = 1");
        assert_eq!(record.vpp, "1.41400");
    }

    #[test]
    fn parses_vpp_annotated_line() {
        let record = parse_line("    6,  8.21, 2.0, line out =  5.657").unwrap();
        assert_eq!(record, ParsedRecord::new("6", "8.21000", "2", "line out = 5.65700"));
    }

    #[test]
    fn composite_without_annotation_is_bare() {
        let record = parse_line("   0, -0.22, 1.0, 1.414").unwrap();
        assert_eq!(record.rms, "1");
    }

    #[test]
    fn rejects_double_annotation() {
        let err = parse_line("   0, 0, a = b = 1, 1").unwrap_err();
        assert!(matches!(err, FormatError::AmbiguousAnnotation { parts: 3, .. }));
    }

    #[test]
    fn rejects_bad_numeral() {
        let err = parse_line("0, x, 1, 1").unwrap_err();
        assert_eq!(err, FormatError::Number(ParseError::Invalid("x".to_string())));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_line("0, 1, 2").unwrap_err();
        assert_eq!(err, FormatError::FieldCount { found: 3 });
    }
}
