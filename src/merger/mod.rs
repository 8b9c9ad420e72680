//! Run-length merge of consecutive duplicate records.
//!
//! Only neighbouring records are merged: keys `[A, A, B, A]` give three runs.
//! Within a run the first record's values are kept and each annotation slot
//! holds the earliest annotation seen for it.

mod accumulator;

pub use accumulator::Accumulator;

use crate::error::FormatError;
use crate::parser::{DecomposedRecord, MergedRecord, ParsedRecord};

/// Merge a finite sequence of records eagerly. Empty input gives empty output.
pub fn merge_runs<I>(records: I) -> Result<Vec<MergedRecord>, FormatError>
where
    I: IntoIterator<Item = ParsedRecord>,
{
    Merger::new(records.into_iter()).collect()
}

/// Streaming merge over parsed records.
///
/// Yields merged records as soon as a run ends. After the first error the
/// iterator is exhausted.
pub struct Merger<I> {
    records: I,
    state: Accumulator,
    done: bool,
}

impl<I: Iterator<Item = ParsedRecord>> Merger<I> {
    pub fn new(records: I) -> Self {
        Self {
            records,
            state: Accumulator::Empty,
            done: false,
        }
    }
}

impl<I: Iterator<Item = ParsedRecord>> Iterator for Merger<I> {
    type Item = Result<MergedRecord, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let Some(record) = self.records.next() else {
                self.done = true;
                return std::mem::take(&mut self.state).finish().map(Ok);
            };
            let next = match DecomposedRecord::decompose(record) {
                Ok(next) => next,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            let (state, emitted) = std::mem::take(&mut self.state).push(next);
            self.state = state;
            if let Some(merged) = emitted {
                return Some(Ok(merged));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(dbv: &str, rms: &str) -> ParsedRecord {
        ParsedRecord::new(dbv, "0", rms, "1")
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(merge_runs(Vec::<ParsedRecord>::new()).unwrap().is_empty());
        assert_eq!(Merger::new(std::iter::empty::<ParsedRecord>()).count(), 0);
    }

    #[test]
    fn only_consecutive_records_merge() {
        let input = vec![rec("1", "2"), rec("1", "2"), rec("3", "2"), rec("1", "2")];
        let merged = merge_runs(input).unwrap();
        let keys: Vec<&str> = merged.iter().map(|r| r.dbv.as_str()).collect();
        assert_eq!(keys, ["1", "3", "1"]);
    }

    #[test]
    fn annotations_are_not_part_of_the_key() {
        let input = vec![rec("1", "2"), rec("1", "ref = 2")];
        assert_eq!(merge_runs(input).unwrap(), vec![rec("1", "ref = 2")]);
    }

    #[test]
    fn merging_is_idempotent() {
        let input = vec![
            rec("1", "a = 2"),
            rec("1", "2"),
            rec("2", "2"),
            rec("1", "b = 2"),
        ];
        let once = merge_runs(input).unwrap();
        let twice = merge_runs(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn merger_emits_run_before_reading_further() {
        let input = vec![rec("1", "2"), rec("1", "x = 2"), rec("2", "2")];
        let records = input
            .into_iter()
            .chain(std::iter::from_fn(|| panic!("read past the second run")));
        let mut merger = Merger::new(records);
        assert_eq!(merger.next().unwrap().unwrap(), rec("1", "x = 2"));
    }

    #[test]
    fn ambiguous_annotation_aborts() {
        let input = vec![rec("1", "2"), rec("2", "a = b = 2")];
        assert!(matches!(
            merge_runs(input),
            Err(FormatError::AmbiguousAnnotation { .. })
        ));

        let mut lazy = Merger::new(vec![rec("1", "a = b = 2"), rec("2", "2")].into_iter());
        assert!(lazy.next().unwrap().is_err());
        assert!(lazy.next().is_none());
    }
}
