use thiserror::Error;

/// Result type alias using EcuDiffError
pub type Result<T> = std::result::Result<T, EcuDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    UnsupportedFormat,

    // Document parsing
    /// Document bytes are not valid JSON/XML for a backup
    InvalidDocument,
    /// A required document field (e.g. the ECU list, `ecu_id`) is absent
    MissingField,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for ecudiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcuDiffError {
    /// File extension is neither `.json` nor `.xml`
    #[error("Unsupported document format: {path} (expected .json or .xml)")]
    UnsupportedFormat { path: String },

    /// Document could not be read from disk
    #[error("Unable to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Document is not valid JSON/XML
    #[error("Unable to parse {format} document: {reason}")]
    InvalidDocument { format: String, reason: String },

    /// Document lacks a required field
    #[error("Missing field `{field}` in {context}")]
    MissingField { field: String, context: String },

    /// Options file is malformed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EcuDiffError {
    /// Attach the document path to errors raised while parsing bytes
    pub fn at_path(self, path: &str) -> Self {
        match self {
            EcuDiffError::InvalidDocument { format, reason } => EcuDiffError::InvalidDocument {
                format,
                reason: format!("{}: {}", path, reason),
            },
            EcuDiffError::MissingField { field, context } => EcuDiffError::MissingField {
                field,
                context: format!("{} ({})", context, path),
            },
            other => other,
        }
    }
}

/// Conversion from EcuDiffError to ExError
impl From<EcuDiffError> for ExError {
    fn from(err: EcuDiffError) -> Self {
        let message = err.to_string();
        match err {
            EcuDiffError::UnsupportedFormat { path } => ExError::new(ExErrorKind::UnsupportedFormat)
                .with_op("load_snapshot")
                .with_path(path)
                .with_message(message),
            EcuDiffError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),
            EcuDiffError::InvalidDocument { .. } => {
                ExError::new(ExErrorKind::InvalidDocument).with_message(message)
            }
            EcuDiffError::MissingField { .. } => {
                ExError::new(ExErrorKind::MissingField).with_message(message)
            }
            EcuDiffError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            EcuDiffError::Serialization(_) => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for EcuDiffError {
    fn from(err: serde_json::Error) -> Self {
        EcuDiffError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for EcuDiffError {
    fn from(err: toml::de::Error) -> Self {
        EcuDiffError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
