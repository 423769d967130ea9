//! Translation of raw action inputs into [`CompilerOptions`].
//!
//! Every optional input is described once in [`OPTIONAL_INPUTS`]: its name,
//! the parser for its kind, and an optional fallback value. Building walks the
//! table and applies each entry independently, so the order of entries never
//! changes the result.

use tracing::debug;

use crate::error::{Result, SassBuildError};
use crate::inputs::RawInputs;
use crate::options::{CompilerOptions, SourceMap};

/// Input naming the entry stylesheet.
pub const SOURCE_INPUT: &str = "source";
/// Input naming the output file or directory.
pub const DESTINATION_INPUT: &str = "destination";
/// Input enabling the diagnostic dump of the built options.
pub const DEBUG_INPUT: &str = "debug";

/// Delimiter between entries of `includePaths`.
pub const INCLUDE_PATH_DELIMITER: char = ':';

/// How a raw input string is coerced, paired with the setter for its field.
#[derive(Clone, Copy)]
pub enum InputKind {
    Boolean(fn(&mut CompilerOptions, bool)),
    Integer(fn(&mut CompilerOptions, i64)),
    Text(fn(&mut CompilerOptions, String)),
    List(fn(&mut CompilerOptions, Vec<String>)),
    BoolOrPath(fn(&mut CompilerOptions, SourceMap)),
}

/// One declared optional input.
#[derive(Clone, Copy)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: InputKind,
    /// Raw value parsed in place of the input when the input yields nothing.
    pub fallback: Option<&'static str>,
}

impl InputSpec {
    const fn new(name: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            kind,
            fallback: None,
        }
    }

    const fn with_fallback(mut self, raw: &'static str) -> Self {
        self.fallback = Some(raw);
        self
    }

    /// Coerce `raw` and store it in `options`. Returns whether a value was set.
    pub fn apply(&self, raw: Option<&str>, options: &mut CompilerOptions) -> bool {
        let Some(raw) = raw else {
            return false;
        };
        let applied = match self.kind {
            InputKind::Boolean(set) => parse_boolean(raw).map(|value| set(options, value)),
            InputKind::Integer(set) => parse_integer(raw).map(|value| set(options, value)),
            InputKind::Text(set) => parse_text(raw).map(|value| set(options, value)),
            InputKind::List(set) => parse_list(raw).map(|value| set(options, value)),
            InputKind::BoolOrPath(set) => {
                parse_bool_or_path(raw).map(|value| set(options, value))
            }
        };
        applied.is_some()
    }
}

/// Optional inputs understood by the action.
pub const OPTIONAL_INPUTS: &[InputSpec] = &[
    InputSpec::new(
        "sourceComments",
        InputKind::Boolean(|o, v| o.source_comments = Some(v)),
    ),
    InputSpec::new(
        "omitSourceMapUrl",
        InputKind::Boolean(|o, v| o.omit_source_map_url = Some(v)),
    ),
    InputSpec::new(
        "sourceMapContents",
        InputKind::Boolean(|o, v| o.source_map_contents = Some(v)),
    ),
    InputSpec::new(
        "sourceMapEmbed",
        InputKind::Boolean(|o, v| o.source_map_embed = Some(v)),
    ),
    InputSpec::new("precision", InputKind::Integer(|o, v| o.precision = Some(v))),
    // The compiler cannot work with a missing or garbage indent width.
    InputSpec::new(
        "indentWidth",
        InputKind::Integer(|o, v| o.indent_width = Some(v)),
    )
    .with_fallback("2"),
    InputSpec::new("outputStyle", InputKind::Text(|o, v| o.output_style = Some(v))),
    InputSpec::new("indentType", InputKind::Text(|o, v| o.indent_type = Some(v))),
    InputSpec::new("linefeed", InputKind::Text(|o, v| o.linefeed = Some(v))),
    InputSpec::new("outFile", InputKind::Text(|o, v| o.out_file = Some(v))),
    InputSpec::new(
        "sourceMapRoot",
        InputKind::Text(|o, v| o.source_map_root = Some(v)),
    ),
    InputSpec::new(
        "includePaths",
        InputKind::List(|o, v| o.include_paths = Some(v)),
    ),
    InputSpec::new(
        "sourceMap",
        InputKind::BoolOrPath(|o, v| o.source_map = Some(v)),
    ),
];

/// Only the exact literals `"true"` and `"false"` are booleans.
pub fn parse_boolean(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Leading integer of `raw`; whatever follows the digits is ignored, so
/// `"4px"` is 4 and `"10.5"` is 10. Values that overflow `i64` are rejected.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits].parse().ok()
}

pub fn parse_text(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

pub fn parse_list(raw: &str) -> Option<Vec<String>> {
    (!raw.is_empty()).then(|| {
        raw.split(INCLUDE_PATH_DELIMITER)
            .map(str::to_string)
            .collect()
    })
}

pub fn parse_bool_or_path(raw: &str) -> Option<SourceMap> {
    match parse_boolean(raw) {
        Some(enabled) => Some(SourceMap::Enabled(enabled)),
        None => parse_text(raw).map(SourceMap::Path),
    }
}

/// Everything the run needs from the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    pub options: CompilerOptions,
    pub destination: String,
    pub debug: bool,
}

/// Builds [`CompilerOptions`] from [`RawInputs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder;

impl ConfigBuilder {
    /// Build the compiler options.
    ///
    /// # Errors
    ///
    /// Returns [`SassBuildError::MissingRequiredInput`] when `source` or
    /// `destination` is absent, naming every missing input.
    pub fn build(inputs: &RawInputs) -> Result<CompilerOptions> {
        Self::build_action(inputs).map(|config| config.options)
    }

    /// Build the compiler options along with the destination and debug flag.
    ///
    /// # Errors
    ///
    /// See [`ConfigBuilder::build`].
    pub fn build_action(inputs: &RawInputs) -> Result<ActionConfig> {
        let source = inputs.get(SOURCE_INPUT);
        let destination = inputs.get(DESTINATION_INPUT);
        let (Some(source), Some(destination)) = (source, destination) else {
            let missing = [(SOURCE_INPUT, source), (DESTINATION_INPUT, destination)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name)
                .collect();
            return Err(SassBuildError::MissingRequiredInput { missing });
        };
        if source.is_empty() {
            return Err(SassBuildError::MissingRequiredInput {
                missing: vec![SOURCE_INPUT],
            });
        }

        let mut options = CompilerOptions::new(source);
        for spec in OPTIONAL_INPUTS {
            let raw = inputs.get(spec.name);
            if spec.apply(raw, &mut options) {
                debug!(input = spec.name, "applied input");
                continue;
            }
            if let Some(fallback) = spec.fallback {
                spec.apply(Some(fallback), &mut options);
                debug!(input = spec.name, raw = ?raw, fallback, "applied fallback");
            } else if raw.is_some() {
                debug!(input = spec.name, raw = ?raw, "ignored input");
            }
        }

        Ok(ActionConfig {
            options,
            destination: destination.to_string(),
            debug: inputs.get(DEBUG_INPUT).is_some_and(|value| !value.is_empty()),
        })
    }
}
