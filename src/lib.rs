// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Kashida: find and insert Arabic justification points.
//!
//! The kashida (tatweel, U+0640) stretches the join between two Arabic
//! letters. This crate proposes where one may go inside a word, ranked by
//! calligraphic priority, and inserts it.
//!
//! ```
//! use kashida::{Algorithm, find_kashida_points, insert_kashidas, make_kashida_string};
//!
//! let (word, points) = find_kashida_points("قال", Algorithm::Simple, true)?;
//! assert_eq!(insert_kashidas(&word, &points, false), "قـال");
//!
//! let text = make_kashida_string("صف خلق", Algorithm::Simple, true, false)?;
//! assert_eq!(text, "صـف خلـق");
//! # Ok::<(), kashida::KashidaError>(())
//! ```
//!
//! Line breaking, shaping and bidi layout are left to the caller.

mod error;
pub mod kashida;
pub mod settings;
pub mod shaping;

pub use error::KashidaError;
pub use kashida::{
    Algorithm, Kashida, KashidaOptions, Kashidas, OptionsError, find_kashida_points,
    insert_kashidas, make_kashida_string, strip_kashidas,
};
pub use shaping::{PositionalForm, is_lam_alef, joins_left, joins_right};
