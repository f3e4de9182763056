//! Import modes and per-record diagnostics.

use std::fmt;

use crate::model::{ElementId, Shape};

/// How an import treats records it cannot interpret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Skip bad records, keep everything else.
    #[default]
    Lenient,
    /// Reject the whole import if any record is bad; the document is untouched.
    Strict,
}

/// A record the parser skipped or had to coerce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The offending text, trimmed.
    pub content: String,
    pub reason: String,
}

impl LineDiagnostic {
    pub fn new(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.reason, self.content)
    }
}

/// Output of a parser: the shapes it recovered plus what it had to skip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedScene {
    pub shapes: Vec<Shape>,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParsedScene {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Result of a successful import into a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Ids of the elements added, in document order.
    pub added: Vec<ElementId>,
    /// Records skipped or coerced in lenient mode. Always empty in strict mode.
    pub diagnostics: Vec<LineDiagnostic>,
}
