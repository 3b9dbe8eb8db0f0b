use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write request {index}: {source}")]
    Write {
        index: u64,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to flush output: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize request {index}: {source}")]
    Serialize {
        index: u64,
        #[source]
        source: serde_json::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

impl OutputError {
    /// Whether the failure came from a downstream reader going away.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            OutputError::Write { source, .. } | OutputError::Flush { source } => {
                source.kind() == std::io::ErrorKind::BrokenPipe
            }
            OutputError::Serialize { .. } => false,
            #[cfg(test)]
            OutputError::TestExpectation { .. } | OutputError::TestExpectationValue { .. } => false,
        }
    }
}
