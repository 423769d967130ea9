//! One action run: compile, resolve the destination, write.
//!
//! The stages run in a fixed order and the first failure aborts the run:
//! 1. **Compile**: hand the options to the stylesheet compiler
//! 2. **Resolve**: classify the requested destination and pick the final path
//! 3. **Write**: store the CSS at the final path

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use sass_build_core::{
    ActionConfig, ConfigBuilder, DestinationResolver, OutputFs, RawInputs, StylesheetCompiler,
};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub final_path: PathBuf,
    pub warning: Option<String>,
    pub bytes_written: usize,
}

/// Validate inputs into the run configuration.
pub fn prepare(inputs: &RawInputs) -> Result<ActionConfig> {
    ConfigBuilder::build_action(inputs).context("read action inputs")
}

/// Compile and write according to an already validated configuration.
pub fn execute<C, F>(config: &ActionConfig, compiler: &C, fs: &F) -> Result<RunOutcome>
where
    C: StylesheetCompiler + ?Sized,
    F: OutputFs + ?Sized,
{
    let source = Path::new(&config.options.source_file);
    let span = info_span!("run", source = %source.display());
    let _guard = span.enter();
    let started = Instant::now();

    let output = compiler
        .compile(&config.options)
        .with_context(|| format!("compile {}", source.display()))?;
    info!(bytes = output.css.len(), "compiled stylesheet");

    let requested = Path::new(&config.destination);
    let kind = fs.stat(requested).context("inspect destination")?;
    let plan = DestinationResolver::resolve(requested, source, kind);
    if let Some(warning) = &plan.warning {
        warn!("{warning}");
    }

    fs.write(&plan.final_path, &output.css)
        .context("write compiled css")?;
    info!(
        path = %plan.final_path.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "wrote css"
    );

    Ok(RunOutcome {
        final_path: plan.final_path,
        warning: plan.warning,
        bytes_written: output.css.len(),
    })
}
