//! Command implementations

pub mod benchmark;
pub mod find;
pub mod simple;
pub mod trace;

pub use benchmark::{BenchmarkResult, BenchmarkSetup, run_benchmark};
pub use find::{FindResult, find_words};
pub use simple::run_simple;
pub use trace::{TraceResult, trace_word};
