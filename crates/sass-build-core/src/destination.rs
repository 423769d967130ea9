//! Destination path resolution.
//!
//! The resolver decides where compiled CSS lands given what currently exists at
//! the requested path. It never touches the filesystem; callers pass the
//! classification in.

use std::path::{Path, PathBuf};

/// Action reference shown in the example workflow of the rewrite warning.
/// Release tags are chosen by the workflow author, so none is suggested.
pub const ACTION_REPOSITORY: &str = "gha-utilities/sass-build";

/// What currently exists at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    NotFound,
    IsDirectory,
    IsFileOrOther,
}

/// Where to write, and why it differs from the request if it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlan {
    pub final_path: PathBuf,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DestinationResolver;

impl DestinationResolver {
    pub fn resolve(requested: &Path, source: &Path, kind: PathKind) -> DestinationPlan {
        match kind {
            PathKind::NotFound => DestinationPlan {
                final_path: requested.to_path_buf(),
                warning: Some(format!(
                    "Warning: destination \"{}\" does not exist yet\n\
                     Attempting to write to file path -> {}",
                    requested.display(),
                    requested.display()
                )),
            },
            PathKind::IsDirectory => {
                let final_path = match source.file_name() {
                    Some(name) => requested.join(name),
                    None => requested.to_path_buf(),
                };
                let warning = rewrite_warning(source, &final_path);
                DestinationPlan {
                    final_path,
                    warning: Some(warning),
                }
            }
            PathKind::IsFileOrOther => DestinationPlan {
                final_path: requested.to_path_buf(),
                warning: None,
            },
        }
    }
}

fn rewrite_warning(source: &Path, final_path: &Path) -> String {
    [
        format!(
            "Warning: destination path was converted to -> \"{}\"",
            final_path.display()
        ),
        "To avoid this warning please assign `destination` to a file path, eg...".to_string(),
        "  - name: Compile CSS from SCSS files".to_string(),
        format!("    uses: {ACTION_REPOSITORY}"),
        "    with:".to_string(),
        format!("      source: {}", source.display()),
        format!("      destination: {}", final_path.display()),
    ]
    .join("\n")
}
