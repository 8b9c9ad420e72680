mod annotation;
mod layout;
mod number;
mod types;

pub use annotation::{join_annotation, split_annotation, SEPARATOR};
pub use layout::{parse_line, split_fields, Layout};
pub use number::short_form;
pub use types::{DecomposedRecord, MergedRecord, ParsedRecord};
