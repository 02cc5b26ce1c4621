// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Kashida options, loadable from TOML.
//!
//! ```toml
//! algorithm = "simple"
//! remove_existing = true
//! insert_all = false
//! ```
//!
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Algorithm, Kashidas, find_kashida_points, make_kashida_string};
use crate::error::KashidaError;
use crate::settings;

/// Errors reading or writing `KashidaOptions`.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to parse kashida options: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize kashida options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How kashidas are found and inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KashidaOptions {
    pub algorithm: Algorithm,
    /// Strip user kashidas before looking for points
    pub remove_existing: bool,
    /// Insert every candidate instead of only the best one
    pub insert_all: bool,
}

impl Default for KashidaOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            remove_existing: settings::defaults::REMOVE_EXISTING,
            insert_all: settings::defaults::INSERT_ALL,
        }
    }
}

impl KashidaOptions {
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(source)?;
        tracing::debug!("Loaded kashida options: {:?}", options);
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String, OptionsError> {
        Ok(toml::to_string(self)?)
    }

    /// Run `find_kashida_points` on one word with these options.
    pub fn find_points(&self, word: &str) -> Result<(String, Kashidas), KashidaError> {
        find_kashida_points(word, self.algorithm, self.remove_existing)
    }

    /// Run `make_kashida_string` on `text` with these options.
    pub fn apply(&self, text: &str) -> Result<String, KashidaError> {
        make_kashida_string(text, self.algorithm, self.remove_existing, self.insert_all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = KashidaOptions::default();
        assert_eq!(options.algorithm, Algorithm::Simple);
        assert!(options.remove_existing);
        assert!(!options.insert_all);
    }

    #[test]
    fn test_from_toml_fills_missing_keys() {
        let options = KashidaOptions::from_toml_str("insert_all = true").unwrap();
        assert_eq!(
            options,
            KashidaOptions {
                insert_all: true,
                ..KashidaOptions::default()
            }
        );
        assert_eq!(KashidaOptions::from_toml_str("").unwrap(), KashidaOptions::default());
    }

    #[test]
    fn test_from_toml_full() {
        let options = KashidaOptions::from_toml_str(
            r#"
            algorithm = "naskh"
            remove_existing = false
            insert_all = true
            "#,
        )
        .unwrap();
        assert_eq!(options.algorithm, Algorithm::Naskh);
        assert!(!options.remove_existing);
        assert!(options.insert_all);
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(matches!(
            KashidaOptions::from_toml_str(r#"algorithm = "thuluth""#),
            Err(OptionsError::Parse(_))
        ));
        assert!(matches!(
            KashidaOptions::from_toml_str("justify = true"),
            Err(OptionsError::Parse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let options = KashidaOptions {
            algorithm: Algorithm::Simple,
            remove_existing: false,
            insert_all: true,
        };
        let text = options.to_toml_string().unwrap();
        assert_eq!(KashidaOptions::from_toml_str(&text).unwrap(), options);
    }

    #[test]
    fn test_apply() {
        let options = KashidaOptions {
            insert_all: true,
            ..KashidaOptions::default()
        };
        assert_eq!(options.apply("الضجيع").unwrap(), "الضـجيـع");
        assert_eq!(KashidaOptions::default().apply("الضجيع").unwrap(), "الضـجيع");

        let naskh = KashidaOptions {
            algorithm: Algorithm::Naskh,
            ..KashidaOptions::default()
        };
        assert!(naskh.apply("الضجيع").is_err());
        assert!(naskh.find_points("الضجيع").is_err());
    }
}
