//! Error adapter for converting LimnerError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Configuration
//! parse errors carry the file content, so they render with a labeled snippet.

use std::{fmt, iter, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use limner::{LimnerError, config::ConfigError};

/// Adapter that renders a [`LimnerError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a LimnerError);

impl ErrorAdapter<'_> {
    /// Returns the parse span and source text, when both are available.
    fn parse_location(&self) -> Option<(&Range<usize>, &String)> {
        match self.0 {
            LimnerError::Config {
                err: ConfigError::Parse {
                    span: Some(span), ..
                },
                src,
            } if !src.is_empty() => Some((span, src)),
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LimnerError::Io(_) => "limner::io",
            LimnerError::Config { .. } => "limner::config",
            LimnerError::DiagramType(_) => "limner::diagram_type",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            LimnerError::Config {
                err: ConfigError::MissingFile(_),
                ..
            } => "pass an existing file to --config, or drop the flag to use the defaults",
            LimnerError::Config {
                err: ConfigError::Parse { .. },
                ..
            } => "check the TOML syntax and value types of the configuration file",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.parse_location()
            .map(|(_, src)| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (span, _) = self.parse_location()?;
        let label = LabeledSpan::new_primary_with_span(
            Some("invalid configuration".to_string()),
            span_to_miette(span),
        );
        Some(Box::new(iter::once(label)))
    }
}

/// Convert a TOML byte range to a miette [`SourceSpan`].
fn span_to_miette(span: &Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    #[test]
    fn test_parse_error_has_labeled_source() {
        let err = LimnerError::new_config_error(
            ConfigError::Parse {
                message: "invalid type".to_string(),
                span: Some(30..35),
            },
            "[extract]\nuntagged_fallback = \"yes\"\n",
        );
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "limner::config");
        assert!(adapter.source_code().is_some());
        assert!(adapter.help().is_some());

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 30);
        assert_eq!(labels[0].len(), 5);
    }

    #[test]
    fn test_config_error_without_source_has_no_labels() {
        let err = LimnerError::from(ConfigError::MissingFile(PathBuf::from("missing.toml")));
        let adapter = ErrorAdapter(&err);

        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
        assert!(adapter.help().unwrap().to_string().contains("--config"));
    }

    #[test]
    fn test_error_codes() {
        let io_err = LimnerError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(
            ErrorAdapter(&io_err).code().unwrap().to_string(),
            "limner::io"
        );

        let type_err = LimnerError::DiagramType("invalid diagram type `pie`".to_string());
        let adapter = ErrorAdapter(&type_err);
        assert_eq!(adapter.code().unwrap().to_string(), "limner::diagram_type");
        assert_eq!(adapter.to_string(), "invalid diagram type `pie`");
        assert!(adapter.help().is_none());
    }
}
