//! Event log errors.

/// Errors that can occur while reading or decoding an event log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A line did not match `DATE TIME TYPE CODE VALUE`.
    ///
    /// `line` is the 1-based line number, or 0 when the line was parsed
    /// without a position in a file.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Failed to read event log: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LogError::MalformedRecord {
            line: 0,
            reason: reason.into(),
        }
    }

    /// Attach a line number to a `MalformedRecord` that does not have one yet.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            LogError::MalformedRecord { line: 0, reason } => {
                LogError::MalformedRecord { line, reason }
            }
            other => other,
        }
    }
}
