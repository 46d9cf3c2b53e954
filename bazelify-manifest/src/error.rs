use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid directory error.
    pub fn invalid_directory_error(
        &self,
        directory: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidDirectory {
            src: self.named_source(),
            span,
            directory: directory.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid label error.
    pub fn invalid_label_error(
        &self,
        label: impl Into<String>,
        module: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidLabel {
            src: self.named_source(),
            span,
            label: label.into(),
            module: module.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bazelify.toml")]
    #[diagnostic(code(bazelify::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(code(bazelify::invalid_name), help("{reason}"))]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid directory '{directory}'")]
    #[diagnostic(
        code(bazelify::invalid_directory),
        help("{reason}. Directories are relative to the workspace root, e.g. 'pkg/foo'")
    )]
    InvalidDirectory {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid directory")]
        span: Option<SourceSpan>,
        directory: String,
        reason: String,
    },

    #[error("invalid dependency label '{label}' in module '{module}'")]
    #[diagnostic(
        code(bazelify::invalid_label),
        help("labels start with '//' (e.g. '//pkg/foo:libfoo') or ':' for the same package")
    )]
    InvalidLabel {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid label")]
        span: Option<SourceSpan>,
        label: String,
        module: String,
    },
}

impl Error {
    /// Diagnostic code of this error, if any.
    pub fn code_str(&self) -> Option<String> {
        self.code().map(|c| c.to_string())
    }
}
