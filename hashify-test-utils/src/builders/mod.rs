//! Builders for test inputs

mod batch_input;

pub use batch_input::{BatchInput, BatchInputBuilder, LineEnding};
