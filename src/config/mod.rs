//! Configuration for branch-sweep.
//!
//! The optional `.branch-sweep.yaml` at the repository root supplies defaults
//! that command-line flags can override. Unknown fields are ignored so older
//! binaries keep working with newer files.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config, FailurePolicy};
