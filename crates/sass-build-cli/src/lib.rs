//! Library side of the `sass-build` action binary.

pub mod cli;
pub mod logging;
pub mod run;
pub mod summary;
