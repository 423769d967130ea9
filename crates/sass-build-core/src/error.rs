use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SassBuildError {
    #[error(
        "required input(s) missing: {}\n\
         Please assign missing environment variables via\n  \
         INPUT_SOURCE=\"path/to/main.scss\" \\\n  \
         INPUT_DESTINATION=\"assets/css/main.css\" \\\n  \
         sass-build",
        .missing.join(", ")
    )]
    MissingRequiredInput { missing: Vec<&'static str> },

    #[error("input {name} is not valid UTF-8")]
    InvalidInputEncoding { name: String },

    #[error("invalid {name} `{value}`, expected one of: {}", .expected.join(", "))]
    InvalidOption {
        name: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("failed to compile {}: {message}", path.display())]
    Compile { path: PathBuf, message: String },

    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SassBuildError {
    /// True for failures raised by the compiler or the filesystem rather than
    /// by input validation.
    pub fn is_external(&self) -> bool {
        !matches!(
            self,
            Self::MissingRequiredInput { .. } | Self::InvalidInputEncoding { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SassBuildError>;
