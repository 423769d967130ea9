//! Output formatting options the compiler backend does not support natively.
//!
//! The backend always indents expanded CSS with two spaces per level and ends
//! lines with `\n`. These helpers re-render that text according to
//! `indentType`, `indentWidth` and `linefeed`.

use crate::error::{Result, SassBuildError};

/// Indentation per nesting level emitted by the backend.
const BACKEND_INDENT: usize = 2;

/// Widest indentation the legacy Sass render options accept.
pub const MAX_INDENT_WIDTH: usize = 10;

const INDENT_WIDTHS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    Expanded,
    #[default]
    Compressed,
    Nested,
    Compact,
}

impl OutputStyle {
    pub const NAMES: &'static [&'static str] = &["expanded", "compressed", "nested", "compact"];

    /// Parse an `outputStyle` input; unset means compressed.
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Self::default()),
            Some("expanded") => Ok(Self::Expanded),
            Some("compressed") => Ok(Self::Compressed),
            Some("nested") => Ok(Self::Nested),
            Some("compact") => Ok(Self::Compact),
            Some(other) => Err(invalid("outputStyle", other, Self::NAMES)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentType {
    #[default]
    Space,
    Tab,
}

impl IndentType {
    pub const NAMES: &'static [&'static str] = &["space", "tab"];

    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None | Some("space") => Ok(Self::Space),
            Some("tab") => Ok(Self::Tab),
            Some(other) => Err(invalid("indentType", other, Self::NAMES)),
        }
    }

    fn unit(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Tab => '\t',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linefeed {
    #[default]
    Lf,
    LfCr,
    Cr,
    CrLf,
}

impl Linefeed {
    pub const NAMES: &'static [&'static str] = &["lf", "lfcr", "cr", "crlf"];

    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None | Some("lf") => Ok(Self::Lf),
            Some("lfcr") => Ok(Self::LfCr),
            Some("cr") => Ok(Self::Cr),
            Some("crlf") => Ok(Self::CrLf),
            Some(other) => Err(invalid("linefeed", other, Self::NAMES)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::LfCr => "\n\r",
            Self::Cr => "\r",
            Self::CrLf => "\r\n",
        }
    }
}

/// Layout applied to expanded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub indent_type: IndentType,
    pub indent_width: usize,
    pub linefeed: Linefeed,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent_type: IndentType::Space,
            indent_width: BACKEND_INDENT,
            linefeed: Linefeed::Lf,
        }
    }
}

impl Layout {
    pub fn is_backend_default(&self) -> bool {
        *self == Self::default()
    }

    /// Validate an `indentWidth` value.
    pub fn indent_width(width: i64) -> Result<usize> {
        usize::try_from(width)
            .ok()
            .filter(|width| *width <= MAX_INDENT_WIDTH)
            .ok_or_else(|| invalid("indentWidth", &width.to_string(), INDENT_WIDTHS))
    }

    /// Re-indent and re-terminate CSS produced with the backend layout.
    ///
    /// Continuation lines of `/* */` comments keep their text as written.
    pub fn apply(&self, css: &str) -> String {
        if self.is_backend_default() {
            return css.to_string();
        }
        let width = self.indent_width.min(MAX_INDENT_WIDTH);
        let unit = self.indent_type.unit().to_string().repeat(width);
        let mut in_comment = false;
        let mut lines = Vec::new();
        for line in css.split('\n') {
            if in_comment {
                lines.push(line.to_string());
            } else {
                let body = line.trim_start_matches(' ');
                let leading = line.len() - body.len();
                let mut out = unit.repeat(leading / BACKEND_INDENT);
                out.push_str(&" ".repeat(leading % BACKEND_INDENT));
                out.push_str(body);
                lines.push(out);
            }
            in_comment = ends_in_comment(line, in_comment);
        }
        lines.join(self.linefeed.as_str())
    }
}

/// Whether a `/* */` comment is still open after `line`.
fn ends_in_comment(line: &str, mut in_comment: bool) -> bool {
    let mut rest = line;
    loop {
        let marker = if in_comment { "*/" } else { "/*" };
        match rest.find(marker) {
            Some(index) => {
                in_comment = !in_comment;
                rest = &rest[index + marker.len()..];
            }
            None => return in_comment,
        }
    }
}

fn invalid(name: &'static str, value: &str, expected: &'static [&'static str]) -> SassBuildError {
    SassBuildError::InvalidOption {
        name,
        value: value.to_string(),
        expected,
    }
}
