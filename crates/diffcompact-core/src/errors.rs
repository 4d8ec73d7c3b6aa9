use crate::assert::ComparisonFailure;
use thiserror::Error;

/// Result type alias using DiffCompactError
pub type Result<T> = std::result::Result<T, DiffCompactError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI exit
/// path) can match on without parsing messages. The compactor itself never
/// produces an error; every kind here belongs to an outer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Caller input
    InvalidInput,
    InvalidConfig,

    // Assertion outcome
    /// Two compared values were not equal
    ComparisonFailure,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::ComparisonFailure => "ERR_COMPARISON_FAILURE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus free-form
/// context for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(source) = &self.source {
            write!(f, " (caused by {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for diffcompact operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffCompactError {
    /// Configuration text could not be parsed or holds an out-of-range value
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A caller supplied contradictory or malformed input
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Reading a file failed
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Rendering a result for output failed
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },

    /// An equality assertion did not hold
    #[error(transparent)]
    ComparisonFailed(#[from] ComparisonFailure),
}

impl From<DiffCompactError> for ExError {
    fn from(err: DiffCompactError) -> Self {
        match err {
            DiffCompactError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }
            DiffCompactError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
            DiffCompactError::Io { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("read_file")
                .with_message(format!("{}: {}", path, reason)),
            DiffCompactError::Serialization { reason } => {
                ExError::new(ExErrorKind::Serialization).with_message(reason)
            }
            DiffCompactError::ComparisonFailed(failure) => failure.into(),
        }
    }
}

impl From<ComparisonFailure> for ExError {
    fn from(failure: ComparisonFailure) -> Self {
        ExError::new(ExErrorKind::ComparisonFailure)
            .with_op("assert_equals")
            .with_message(failure.to_string())
    }
}
