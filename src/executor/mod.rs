mod runner;

pub use runner::{run, run_batch};
