//! Compiler options produced from action inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width used when `indentWidth` is absent or unparseable.
pub const DEFAULT_INDENT_WIDTH: i64 = 2;

/// `sourceMap` accepts either a flag or an explicit map path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceMap {
    Enabled(bool),
    Path(String),
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled(enabled) => write!(f, "{enabled}"),
            Self::Path(path) => f.write_str(path),
        }
    }
}

/// Render options handed to the stylesheet compiler.
///
/// Field names serialize as the action input names so the record reads the
/// same on both sides of the compiler seam. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(rename = "file")]
    pub source_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_comments: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omit_source_map_url: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map_contents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map_embed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linefeed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map_root: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_paths: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<SourceMap>,
}

impl CompilerOptions {
    /// Options for `source_file` with every optional field unset.
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            source_comments: None,
            omit_source_map_url: None,
            source_map_contents: None,
            source_map_embed: None,
            precision: None,
            indent_width: None,
            output_style: None,
            indent_type: None,
            linefeed: None,
            out_file: None,
            source_map_root: None,
            include_paths: None,
            source_map: None,
        }
    }

    /// Indent width the compiler should use.
    pub fn effective_indent_width(&self) -> i64 {
        self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH)
    }

    /// `(input name, rendered value)` for every field that is set, in
    /// declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("file", self.source_file.clone())];
        push(&mut entries, "sourceComments", self.source_comments);
        push(&mut entries, "omitSourceMapUrl", self.omit_source_map_url);
        push(&mut entries, "sourceMapContents", self.source_map_contents);
        push(&mut entries, "sourceMapEmbed", self.source_map_embed);
        push(&mut entries, "precision", self.precision);
        push(&mut entries, "indentWidth", self.indent_width);
        push(&mut entries, "outputStyle", self.output_style.as_ref());
        push(&mut entries, "indentType", self.indent_type.as_ref());
        push(&mut entries, "linefeed", self.linefeed.as_ref());
        push(&mut entries, "outFile", self.out_file.as_ref());
        push(&mut entries, "sourceMapRoot", self.source_map_root.as_ref());
        if let Some(paths) = &self.include_paths {
            entries.push(("includePaths", format!("{paths:?}")));
        }
        push(&mut entries, "sourceMap", self.source_map.as_ref());
        entries
    }
}

fn push<T: fmt::Display>(
    entries: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        entries.push((name, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let mut options = CompilerOptions::new("src/main.scss");
        options.indent_width = Some(2);
        let json = serde_json::to_value(&options).expect("serialize options");
        assert_eq!(
            json,
            serde_json::json!({ "file": "src/main.scss", "indentWidth": 2 })
        );
    }

    #[test]
    fn source_map_serializes_as_bool_or_string() {
        let mut options = CompilerOptions::new("a.scss");
        options.source_map = Some(SourceMap::Enabled(true));
        let json = serde_json::to_value(&options).expect("serialize options");
        assert_eq!(json["sourceMap"], serde_json::json!(true));

        options.source_map = Some(SourceMap::Path("out/a.css.map".to_string()));
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: CompilerOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }

    #[test]
    fn entries_list_only_set_fields() {
        let mut options = CompilerOptions::new("a.scss");
        options.include_paths = Some(vec!["lib".to_string(), "vendor".to_string()]);
        options.source_comments = Some(false);
        let names: Vec<_> = options.entries().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["file", "sourceComments", "includePaths"]);
    }

    #[test]
    fn effective_indent_width_defaults_to_two() {
        assert_eq!(CompilerOptions::new("a.scss").effective_indent_width(), 2);
    }
}
