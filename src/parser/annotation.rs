use crate::error::FormatError;

/// Separator between an annotation and its numeral in a composite field.
pub const SEPARATOR: &str = " = ";

/// Split a composite field into (annotation, numeral).
///
/// A field without the separator has no annotation. More than one separator
/// is ambiguous and rejected.
pub fn split_annotation(field: &str) -> Result<(Option<String>, String), FormatError> {
    let parts: Vec<&str> = field.split(SEPARATOR).collect();
    match parts.as_slice() {
        [value] => Ok((None, value.to_string())),
        [info, value] => Ok((Some(info.to_string()), value.to_string())),
        _ => Err(FormatError::AmbiguousAnnotation {
            field: field.to_string(),
            parts: parts.len(),
        }),
    }
}

/// Reassemble a composite field.
pub fn join_annotation(annotation: Option<&str>, value: &str) -> String {
    match annotation {
        Some(info) => format!("{}{}{}", info, SEPARATOR, value),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_without_annotation() {
        assert_eq!(split_annotation("1.41400").unwrap(), (None, "1.41400".to_string()));
    }

    #[test]
    fn split_with_annotation() {
        let (info, value) = split_annotation("ref = 1").unwrap();
        assert_eq!(info.as_deref(), Some("ref"));
        assert_eq!(value, "1");
    }

    #[test]
    fn two_separators_are_ambiguous() {
        let err = split_annotation("a = b = 1").unwrap_err();
        assert_eq!(
            err,
            FormatError::AmbiguousAnnotation {
                field: "a = b = 1".to_string(),
                parts: 3
            }
        );
    }

    #[test]
    fn join_inverts_split() {
        for field in ["1", "ref = 1", "line out = -0.22000", "=x", ""] {
            let (info, value) = split_annotation(field).unwrap();
            assert_eq!(join_annotation(info.as_deref(), &value), field);
        }
    }
}
