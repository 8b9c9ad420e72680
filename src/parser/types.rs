use super::annotation::{join_annotation, split_annotation};
use crate::error::FormatError;

/// One parsed input line, numerals already in short form.
///
/// At most one of `rms`/`vpp` carries an `"<annotation> = <numeral>"` composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub dbv: String,
    pub dbu: String,
    pub rms: String,
    pub vpp: String,
}

/// A record after merging; same shape as a parsed one.
pub type MergedRecord = ParsedRecord;

impl ParsedRecord {
    pub fn new(
        dbv: impl Into<String>,
        dbu: impl Into<String>,
        rms: impl Into<String>,
        vpp: impl Into<String>,
    ) -> Self {
        Self {
            dbv: dbv.into(),
            dbu: dbu.into(),
            rms: rms.into(),
            vpp: vpp.into(),
        }
    }
}

/// A record with both composite fields split into annotation and numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedRecord {
    pub dbv: String,
    pub dbu: String,
    pub rms_annotation: Option<String>,
    pub rms: String,
    pub vpp_annotation: Option<String>,
    pub vpp: String,
}

impl DecomposedRecord {
    pub fn decompose(record: ParsedRecord) -> Result<Self, FormatError> {
        let (rms_annotation, rms) = split_annotation(&record.rms)?;
        let (vpp_annotation, vpp) = split_annotation(&record.vpp)?;
        Ok(Self {
            dbv: record.dbv,
            dbu: record.dbu,
            rms_annotation,
            rms,
            vpp_annotation,
            vpp,
        })
    }

    /// Equality key for merging; annotations are not part of it.
    pub fn discriminant(&self) -> (&str, &str, &str, &str) {
        (&self.dbv, &self.dbu, &self.rms, &self.vpp)
    }

    pub fn recompose(self) -> MergedRecord {
        MergedRecord {
            rms: join_annotation(self.rms_annotation.as_deref(), &self.rms),
            vpp: join_annotation(self.vpp_annotation.as_deref(), &self.vpp),
            dbv: self.dbv,
            dbu: self.dbu,
        }
    }
}
