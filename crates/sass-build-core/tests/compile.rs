//! Integration tests for the compiler seam and the local filesystem.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use sass_build_core::{
    CompileOutput, CompilerOptions, ConfigBuilder, GrassCompiler, LocalFs, OutputFs, PathKind,
    RawInputs, SassBuildError, SourceMap, StylesheetCompiler,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "sass-build-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Keeps the options it was called with and echoes them back as JSON.
#[derive(Default)]
struct RecordingCompiler {
    seen: RefCell<Vec<CompilerOptions>>,
}

impl StylesheetCompiler for RecordingCompiler {
    fn compile(&self, options: &CompilerOptions) -> sass_build_core::Result<CompileOutput> {
        self.seen.borrow_mut().push(options.clone());
        Ok(CompileOutput {
            css: serde_json::to_string(options).unwrap(),
            source_map: None,
        })
    }
}

#[test]
fn options_survive_the_compiler_seam() {
    let inputs = RawInputs::from_pairs([
        ("source", "src/main.scss"),
        ("destination", "out/main.css"),
        ("sourceComments", "true"),
        ("omitSourceMapUrl", "false"),
        ("sourceMapContents", "true"),
        ("sourceMapEmbed", "false"),
        ("precision", "8"),
        ("indentWidth", "4"),
        ("outputStyle", "expanded"),
        ("indentType", "tab"),
        ("linefeed", "crlf"),
        ("outFile", "out/main.css"),
        ("sourceMapRoot", "/maps"),
        ("includePaths", "lib:vendor"),
        ("sourceMap", "out/main.css.map"),
    ]);
    let options = ConfigBuilder::build(&inputs).unwrap();
    let compiler = RecordingCompiler::default();

    let output = compiler.compile(&options).unwrap();

    assert_eq!(compiler.seen.borrow().as_slice(), [options.clone()]);
    let echoed: CompilerOptions = serde_json::from_str(&output.css).unwrap();
    assert_eq!(echoed, options);
    assert_eq!(echoed.entries().len(), 14);
    assert_eq!(
        echoed.source_map,
        Some(SourceMap::Path("out/main.css.map".to_string()))
    );
}

#[test]
fn grass_compiles_expanded_with_layout() {
    let dir = unique_temp_dir("expanded");
    let source = dir.join("main.scss");
    write(&source, "$c: red;\na {\n  b {\n    color: $c;\n  }\n}\n");

    let mut options = CompilerOptions::new(source.to_string_lossy());
    options.output_style = Some("expanded".to_string());
    options.indent_type = Some("tab".to_string());
    options.indent_width = Some(1);

    let output = GrassCompiler::new().compile(&options).unwrap();

    assert!(output.css.contains("a b {\n\tcolor: red;\n}"), "{}", output.css);
    assert_eq!(output.source_map, None);
}

#[test]
fn grass_defaults_to_compressed_and_uses_include_paths() {
    let dir = unique_temp_dir("compressed");
    write(&dir.join("lib/_colors.scss"), "$brand: #00f;\n");
    let source = dir.join("src/main.scss");
    write(&source, "@import \"colors\";\n.brand {\n  color: $brand;\n}\n");

    let mut options = CompilerOptions::new(source.to_string_lossy());
    options.include_paths = Some(vec![dir.join("lib").to_string_lossy().into_owned()]);

    let output = GrassCompiler::new().quiet(true).compile(&options).unwrap();

    assert!(output.css.starts_with(".brand{color:"), "{}", output.css);
    assert!(!output.css.contains("\n  "));
}

#[test]
fn grass_failures_surface_as_compile_errors() {
    let dir = unique_temp_dir("broken");
    let source = dir.join("broken.scss");
    write(&source, "a { color: $undefined; }\n");

    let error = GrassCompiler::new()
        .compile(&CompilerOptions::new(source.to_string_lossy()))
        .unwrap_err();

    assert!(matches!(error, SassBuildError::Compile { .. }));
    assert!(error.is_external());
}

#[test]
fn invalid_output_style_is_rejected_before_compiling() {
    let mut options = CompilerOptions::new("does/not/exist.scss");
    options.output_style = Some("pretty".to_string());

    let error = GrassCompiler::new().compile(&options).unwrap_err();

    assert!(matches!(
        error,
        SassBuildError::InvalidOption { name: "outputStyle", .. }
    ));
}

#[test]
fn local_fs_classifies_paths_and_creates_parents() {
    let dir = unique_temp_dir("fs");
    let fs_ops = LocalFs;

    assert_eq!(fs_ops.stat(&dir).unwrap(), PathKind::IsDirectory);
    let target = dir.join("nested/out/main.css");
    assert_eq!(fs_ops.stat(&target).unwrap(), PathKind::NotFound);

    fs_ops.write(&target, "a{}").unwrap();

    assert_eq!(fs_ops.stat(&target).unwrap(), PathKind::IsFileOrOther);
    assert_eq!(fs::read_to_string(&target).unwrap(), "a{}");
}

#[test]
fn out_of_range_indent_width_is_rejected_before_compiling() {
    for width in [i64::MAX, 11, -1] {
        let mut options = CompilerOptions::new("does/not/exist.scss");
        options.output_style = Some("expanded".to_string());
        options.indent_width = Some(width);

        let error = GrassCompiler::new().compile(&options).unwrap_err();

        assert!(
            matches!(error, SassBuildError::InvalidOption { name: "indentWidth", .. }),
            "{width}: {error}"
        );
    }
}
