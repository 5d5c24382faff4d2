//! Demonstration front end for the `tagmark` parser.
//!
//! Provides the example catalog, terminal listings, and logger setup used by
//! the `tagmark` binary.

pub mod catalog;
pub mod error;
pub mod log_init;
pub mod report;

pub use catalog::{Case, CaseReport, Category};
pub use error::{CliError, Result};
pub use tagmark;
