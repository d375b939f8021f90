//! Error types with rich diagnostics using miette
//!
//! Document-level failures are `ParseError`s, attribute-level failures are
//! `FormatError`s. File operations wrap both in `PersistError`.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Parse Errors
// ============================================================================

/// The document could not be read as an SVG polygon document
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("malformed SVG document: {message}")]
    #[diagnostic(code(polyedit::parse::malformed_xml))]
    MalformedXml { message: String },

    #[error("no <polygon> element found")]
    #[diagnostic(
        code(polyedit::parse::missing_polygon),
        help("the document must contain a <polygon> in the SVG namespace")
    )]
    MissingPolygon,
}

// ============================================================================
// Format Errors
// ============================================================================

/// An attribute value on the polygon or root element is not well formed
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    #[error("invalid point `{token}`")]
    #[diagnostic(
        code(polyedit::format::invalid_point),
        help("points are written as `x,y` pairs separated by whitespace")
    )]
    InvalidPoint {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `number,number`")]
        span: SourceSpan,
    },

    #[error("invalid stroke-width `{value}`: {reason}")]
    #[diagnostic(code(polyedit::format::invalid_stroke_width))]
    InvalidStrokeWidth { value: String, reason: String },

    #[error("invalid viewBox `{value}`")]
    #[diagnostic(
        code(polyedit::format::invalid_view_box),
        help("a viewBox is four numbers: min-x min-y width height")
    )]
    InvalidViewBox { value: String },
}

// ============================================================================
// Persistence Errors
// ============================================================================

/// Errors surfaced by load/save against the filesystem
#[derive(Error, Diagnostic, Debug)]
pub enum PersistError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),

    #[error("cannot access {}", path.display())]
    #[diagnostic(code(polyedit::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML serialization error: {message}")]
    #[diagnostic(code(polyedit::serialize))]
    Serialize { message: String },
}
