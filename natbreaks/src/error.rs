//! Error types for classification and table ingestion.

/// Errors from computing natural breaks.
///
/// Every variant is detected before the dynamic-programming tables are built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BreaksError {
    /// Fewer observations than requested classes.
    #[error("{classes} classes requested but only {observations} observations available")]
    InsufficientData {
        /// Number of observations supplied.
        observations: usize,
        /// Number of classes requested.
        classes: usize,
    },

    /// Class count below 2 or above the configured cap.
    #[error("class count must be in 2..={max}, got {classes}")]
    InvalidClassCount {
        /// The rejected class count.
        classes: usize,
        /// Largest accepted class count.
        max: usize,
    },

    /// A NaN or infinite observation.
    #[error("non-finite observation at index {index}")]
    NonFiniteInput {
        /// Position of the first offending value in the caller's slice.
        index: usize,
    },

    /// More observations than the quadratic algorithm is allowed to process.
    #[error("{observations} observations exceeds the cap of {max}")]
    TooManyObservations {
        /// Number of observations supplied.
        observations: usize,
        /// Largest accepted observation count.
        max: usize,
    },
}

impl BreaksError {
    /// Stable machine-readable code, used by the wasm result objects.
    pub fn code(&self) -> &'static str {
        match self {
            BreaksError::InsufficientData { .. } => "insufficient_data",
            BreaksError::InvalidClassCount { .. } => "invalid_class_count",
            BreaksError::NonFiniteInput { .. } => "non_finite",
            BreaksError::TooManyObservations { .. } => "too_many_observations",
        }
    }
}

/// Errors from parsing a price table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("input is empty or has no header row")]
    MissingHeader,

    #[error("header has no period columns")]
    NoPeriods,

    #[error("column {column}: empty period label")]
    EmptyPeriod { column: usize },

    #[error("period '{period}' appears more than once in the header")]
    DuplicatePeriod { period: String },

    #[error("line {line}: missing or invalid entity name")]
    EmptyEntity { line: usize },

    #[error("entity '{entity}' appears more than once")]
    DuplicateEntity { entity: String },

    #[error("line {line}: unterminated quoted cell")]
    UnterminatedQuote { line: usize },

    #[error("table exceeds {max} rows")]
    TooManyRows { max: usize },

    #[error("table exceeds {max} columns")]
    TooManyColumns { max: usize },

    #[error("input exceeds {max} bytes")]
    TooLarge { max: usize },

    #[error("row '{entity}' has {got} values, expected {expected}")]
    RowShape {
        entity: String,
        got: usize,
        expected: usize,
    },

    #[error("invalid table document: {0}")]
    Json(String),
}

impl TableError {
    pub fn code(&self) -> &'static str {
        match self {
            TableError::Json(_) => "json_parse",
            _ => "csv_parse",
        }
    }
}
