//! Parse outcomes with accumulated recoverable warnings.
//!
//! Instrument exports are frequently short or partially corrupt. Readers in
//! this crate therefore distinguish three tiers of trouble:
//!
//! 1. **Structural** failures (bad magic, missing main block, invalid
//!    signature) are returned as `Err` by the reader itself.
//! 2. **Truncation** stops decoding of one record stream but keeps every
//!    record decoded so far; the outcome is flagged as truncated.
//! 3. **Field-level** problems leave a single field empty and add a
//!    [`ParseWarning`].
//!
//! Callers that want strict behaviour use [`ParseOutcome::into_strict`].

use std::fmt;

use log::warn;

use crate::convert::ConvertError;

/// Category of a recoverable problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A record declared more bytes than were left in its stream
    Truncated,
    /// A member record carried a type code other than the expected one
    TypeMismatch,
    /// A member record id is not part of the known schema
    UnknownField,
    /// A field payload could not be decoded (bad length, bad number, ...)
    MalformedField,
    /// The embedded history record could not be segmented
    History,
    /// Two sources of the same information disagree
    Consistency,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningKind::Truncated => "truncated",
            WarningKind::TypeMismatch => "type mismatch",
            WarningKind::UnknownField => "unknown field",
            WarningKind::MalformedField => "malformed field",
            WarningKind::History => "history",
            WarningKind::Consistency => "consistency",
        };
        f.write_str(name)
    }
}

/// A single recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// Category of the problem
    pub kind: WarningKind,
    /// Human-readable description
    pub message: String,
}

impl ParseWarning {
    /// Create a new warning
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Ordered list of warnings, logged as they are recorded
#[derive(Debug, Clone, Default)]
pub struct Warnings {
    items: Vec<ParseWarning>,
}

impl Warnings {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and forward it to the `log` facade
    pub fn push(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = ParseWarning::new(kind, message);
        warn!("{}", warning);
        self.items.push(warning);
    }

    /// Move all warnings of `other` into this list
    pub fn extend(&mut self, other: Warnings) {
        self.items.extend(other.items);
    }

    /// Number of recorded warnings
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if any truncation warning was recorded
    pub fn has_truncation(&self) -> bool {
        self.items.iter().any(|w| w.kind == WarningKind::Truncated)
    }

    /// Iterate over the recorded warnings
    pub fn iter(&self) -> impl Iterator<Item = &ParseWarning> {
        self.items.iter()
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<ParseWarning> {
        self.items
    }
}

/// Result of a lenient parse: the value plus everything that went wrong
#[derive(Debug, Clone)]
pub struct ParseOutcome<T> {
    /// The (possibly partial) parsed value
    pub value: T,
    /// Recoverable problems, in the order they were found
    pub warnings: Vec<ParseWarning>,
    /// True if at least one record stream stopped early
    pub truncated: bool,
}

impl<T> ParseOutcome<T> {
    /// Wrap a value with the warnings gathered while producing it
    pub fn new(value: T, warnings: Warnings) -> Self {
        let truncated = warnings.has_truncation();
        Self {
            value,
            warnings: warnings.into_vec(),
            truncated,
        }
    }

    /// A value that was produced without any problems
    pub fn clean(value: T) -> Self {
        Self::new(value, Warnings::new())
    }

    /// True if no warnings were recorded
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// True if the value is known to be incomplete
    pub fn is_partial(&self) -> bool {
        self.truncated
    }

    /// Transform the value, keeping the warnings
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        ParseOutcome {
            value: f(self.value),
            warnings: self.warnings,
            truncated: self.truncated,
        }
    }

    /// Lenient access: drop the warnings
    pub fn into_value(self) -> T {
        self.value
    }

    /// Strict access: any warning becomes an error
    pub fn into_strict(self) -> Result<T, ConvertError> {
        match self.warnings.first() {
            None => Ok(self.value),
            Some(first) => Err(ConvertError::Strict {
                count: self.warnings.len(),
                first: first.to_string(),
            }),
        }
    }
}
