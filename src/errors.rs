//! Error types with rich diagnostics using miette
//!
//! CSV syntax errors carry source spans so a broken export points at the
//! offending line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

use crate::types::NumericError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Data Errors
// ============================================================================

/// Errors that occur while fetching or decoding tabular data
#[derive(Error, Diagnostic, Debug)]
pub enum DataError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(petalviz::data::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {message}")]
    #[diagnostic(code(petalviz::data::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("column `{column}` missing from {table}")]
    #[diagnostic(
        code(petalviz::data::missing_column),
        help("header names are matched exactly after trimming whitespace")
    )]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors that occur while validating layout configuration
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}")]
    #[diagnostic(code(petalviz::config::invalid_value))]
    InvalidValue {
        name: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("{name} = {value} is out of range, expected {expected}")]
    #[diagnostic(code(petalviz::config::out_of_range))]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("petal inner radius would be {inner}")]
    #[diagnostic(
        code(petalviz::config::degenerate_radius),
        help("reduce margin, ring width, gap or petal length, or enlarge the canvas")
    )]
    DegenerateRadius { inner: f64 },

    #[error("unknown color key: {0}")]
    #[diagnostic(code(petalviz::config::unknown_color))]
    UnknownColorKey(String),
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while producing or post-processing path data and markup
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("invalid path data: {message}")]
    #[diagnostic(code(petalviz::render::invalid_path))]
    InvalidPath { message: String },

    #[error("markup formatting failed")]
    #[diagnostic(code(petalviz::render::format))]
    Format(#[from] std::fmt::Error),
}

// ============================================================================
// Top-level
// ============================================================================

/// Any error surfaced by the public API
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}
