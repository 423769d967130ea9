//! Core of the `sass-build` action: turns action inputs into compiler options,
//! decides where compiled CSS is written, and wraps the compiler backend.

pub mod compiler;
pub mod config;
pub mod destination;
pub mod error;
pub mod format;
pub mod fs;
pub mod inputs;
pub mod options;

pub use compiler::{CompileOutput, GrassCompiler, StylesheetCompiler};
pub use config::{ActionConfig, ConfigBuilder, InputKind, InputSpec, OPTIONAL_INPUTS};
pub use destination::{DestinationPlan, DestinationResolver, PathKind};
pub use error::{Result, SassBuildError};
pub use fs::{LocalFs, OutputFs};
pub use inputs::{DEFAULT_INPUT_PREFIX, RawInputs};
pub use options::{CompilerOptions, SourceMap};
