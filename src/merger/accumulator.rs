use tracing::trace;

use crate::parser::{DecomposedRecord, MergedRecord};

/// Streaming state of a run-length merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Accumulator {
    #[default]
    Empty,
    Holding(DecomposedRecord),
}

impl Accumulator {
    /// Feed the next record. Returns the new state and the finished run, if
    /// `next` starts a new one.
    pub fn push(self, next: DecomposedRecord) -> (Accumulator, Option<MergedRecord>) {
        match self {
            Accumulator::Empty => (Accumulator::Holding(next), None),
            Accumulator::Holding(current) if current.discriminant() == next.discriminant() => {
                trace!(dbv = %current.dbv, dbu = %current.dbu, "merging duplicate record");
                (Accumulator::Holding(absorb(current, next)), None)
            }
            Accumulator::Holding(current) => {
                (Accumulator::Holding(next), Some(current.recompose()))
            }
        }
    }

    /// End of input: the run in progress, if any.
    pub fn finish(self) -> Option<MergedRecord> {
        match self {
            Accumulator::Empty => None,
            Accumulator::Holding(current) => Some(current.recompose()),
        }
    }
}

/// Keep `current` and fill only its missing annotations from `next`.
fn absorb(current: DecomposedRecord, next: DecomposedRecord) -> DecomposedRecord {
    DecomposedRecord {
        rms_annotation: fill(current.rms_annotation, next.rms_annotation),
        vpp_annotation: fill(current.vpp_annotation, next.vpp_annotation),
        ..current
    }
}

/// An empty annotation counts as missing.
fn fill(current: Option<String>, next: Option<String>) -> Option<String> {
    current.filter(|a| !a.is_empty()).or(next)
}
