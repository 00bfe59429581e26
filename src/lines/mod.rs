//! Line registry: every row, column and diagonal that can hold a run of five.

pub mod registry;

pub use registry::{Line, LineRegistry, MAX_LINE_LEN, MIN_LINE_LEN};
