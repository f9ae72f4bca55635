//! Command-line front end for *cellpath*.
//!
//! Reads a weight matrix and a start/end pair from text, validates it against
//! a [`ValidationPolicy`], runs the search and renders the resulting path.

pub mod app;
pub mod error;
pub mod input;
pub mod output;
pub mod validate;

pub use app::{RunConfig, run};
pub use error::{CliError, Coordinate, InputError};
pub use input::{Problem, parse_input};
pub use output::{END_MARKER, OutputFormat, write_path};
pub use validate::{DEFAULT_MAX_WEIGHT, ValidationPolicy};
