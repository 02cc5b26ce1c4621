// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for kashida placement.

use thiserror::Error;

/// Errors returned by the kashida API.
///
/// Words without Arabic letters, stray marks and empty input are never
/// errors; they simply produce no candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KashidaError {
    /// The requested algorithm has no rule table.
    #[error("unsupported kashida algorithm '{name}'")]
    UnsupportedAlgorithm { name: String },
}

impl KashidaError {
    pub(crate) fn unsupported(name: &str) -> Self {
        Self::UnsupportedAlgorithm {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = KashidaError::unsupported("naskh");
        assert_eq!(err.to_string(), "unsupported kashida algorithm 'naskh'");
    }
}
