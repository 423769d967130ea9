//! The stylesheet compiler seam and its `grass` backend.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Result, SassBuildError};
use crate::format::{IndentType, Layout, Linefeed, OutputStyle};
use crate::options::CompilerOptions;

/// Result of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    pub css: String,
    pub source_map: Option<String>,
}

/// Anything able to turn [`CompilerOptions`] into CSS.
pub trait StylesheetCompiler {
    /// # Errors
    ///
    /// Returns an error when the options are unusable or compilation fails.
    fn compile(&self, options: &CompilerOptions) -> Result<CompileOutput>;
}

/// Compiles with the `grass` Sass implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassCompiler {
    quiet: bool,
}

impl GrassCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silence `@warn` and `@debug` output from stylesheets.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl StylesheetCompiler for GrassCompiler {
    fn compile(&self, options: &CompilerOptions) -> Result<CompileOutput> {
        let style = OutputStyle::parse(options.output_style.as_deref())?;
        let layout = Layout {
            indent_type: IndentType::parse(options.indent_type.as_deref())?,
            indent_width: Layout::indent_width(options.effective_indent_width())?,
            linefeed: Linefeed::parse(options.linefeed.as_deref())?,
        };
        report_unsupported(options);

        let (grass_style, expanded) = match style {
            OutputStyle::Compressed => (grass::OutputStyle::Compressed, false),
            OutputStyle::Expanded => (grass::OutputStyle::Expanded, true),
            OutputStyle::Nested | OutputStyle::Compact => {
                warn!(?style, "output style not supported by grass, using expanded");
                (grass::OutputStyle::Expanded, true)
            }
        };
        let mut grass_options = grass::Options::default()
            .style(grass_style)
            .quiet(self.quiet);
        for path in options.include_paths.iter().flatten() {
            grass_options = grass_options.load_path(path);
        }

        debug!(file = %options.source_file, ?style, "compiling stylesheet");
        let css = grass::from_path(&options.source_file, &grass_options).map_err(|error| {
            SassBuildError::Compile {
                path: PathBuf::from(&options.source_file),
                message: error.to_string(),
            }
        })?;
        let css = if expanded { layout.apply(&css) } else { css };

        Ok(CompileOutput {
            css,
            source_map: None,
        })
    }
}

fn report_unsupported(options: &CompilerOptions) {
    if options.source_map.is_some()
        || options.source_map_embed == Some(true)
        || options.source_map_contents == Some(true)
    {
        warn!("source maps are not supported by grass; no map will be emitted");
    }
    if let Some(root) = &options.source_map_root {
        debug!(%root, "ignoring sourceMapRoot");
    }
    if let Some(omit) = options.omit_source_map_url {
        debug!(omit, "ignoring omitSourceMapUrl");
    }
    if let Some(out_file) = &options.out_file {
        debug!(%out_file, "ignoring outFile");
    }
    if let Some(precision) = options.precision {
        debug!(precision, "ignoring precision");
    }
    if let Some(comments) = options.source_comments {
        debug!(comments, "ignoring sourceComments");
    }
}
