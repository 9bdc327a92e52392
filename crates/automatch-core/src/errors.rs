use thiserror::Error;

/// Result type alias using MatchError
pub type Result<T> = std::result::Result<T, MatchError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and for assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Build time
    NullExpected,
    NoProperties,
    InvalidSettings,

    // Evaluation time
    TypeMismatch,

    // Assertion adapter
    AssertionFailed,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NullExpected => "ERR_NULL_EXPECTED",
            ErrorKind::NoProperties => "ERR_NO_PROPERTIES",
            ErrorKind::InvalidSettings => "ERR_INVALID_SETTINGS",
            ErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ErrorKind::AssertionFailed => "ERR_ASSERTION_FAILED",
        }
    }

    /// Whether this kind is raised while building a matcher (as opposed to
    /// while applying it to an actual value)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::NullExpected | ErrorKind::NoProperties | ErrorKind::InvalidSettings
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification of a [`MatchError`] together with the
/// operation it happened in, for logging and programmatic handling.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add type name context
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for matcher synthesis and evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// The top-level expected value was null
    #[error("Expected value must not be null")]
    NullExpected,

    /// A complex type exposes no eligible accessor
    #[error("Failed to build MatcherConfig: type {type_name} has no properties.")]
    NoProperties { type_name: String },

    /// The actual value cannot be read through an accessor derived from the
    /// expected value's type
    #[error("Expected object of type {expected_type} but got {actual_type}: {actual}")]
    TypeMismatch {
        expected_type: String,
        actual_type: String,
        actual: String,
    },

    /// Matcher settings could not be parsed
    #[error("Invalid matcher settings: {reason}")]
    InvalidSettings { reason: String },

    /// An assertion did not hold
    #[error("{message}")]
    AssertionFailed { message: String },
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::NullExpected => ErrorKind::NullExpected,
            MatchError::NoProperties { .. } => ErrorKind::NoProperties,
            MatchError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            MatchError::InvalidSettings { .. } => ErrorKind::InvalidSettings,
            MatchError::AssertionFailed { .. } => ErrorKind::AssertionFailed,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<MatchError> for ExError {
    fn from(err: MatchError) -> Self {
        let message = err.to_string();
        match err {
            MatchError::NoProperties { type_name } => ExError::new(ErrorKind::NoProperties)
                .with_type_name(type_name)
                .with_message(message),
            MatchError::TypeMismatch { expected_type, .. } => {
                ExError::new(ErrorKind::TypeMismatch)
                    .with_type_name(expected_type)
                    .with_message(message)
            }
            other => ExError::new(other.kind()).with_message(message),
        }
    }
}

impl From<toml::de::Error> for MatchError {
    fn from(err: toml::de::Error) -> Self {
        MatchError::InvalidSettings {
            reason: err.to_string(),
        }
    }
}
