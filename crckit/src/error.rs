// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for CRC construction and arithmetic.

use thiserror::Error;

/// Errors reported by catalogue lookup, parameter validation, and the
/// range-checked engine operations.
///
/// Every check runs before any engine state is touched, so a failed
/// operation leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested template name is not in the catalogue.
    #[error("unknown CRC template: {0:?}")]
    UnknownTemplate(String),

    /// The requested computation method is not one of
    /// `bitwise`/`bytewise`/`wordwise`.
    #[error("unknown computation method: {0:?}")]
    UnknownMethod(String),

    /// CRC width outside `1..=64`.
    #[error("width must be within 1..=64, got {0}")]
    WidthOutOfRange(u32),

    /// An integer argument does not fit the current width.
    #[error("{what} must be at most {max:#x}, got {value:#x}")]
    ValueOutOfRange {
        /// Which argument was rejected.
        what: &'static str,
        /// The offending value.
        value: u64,
        /// The largest admissible value.
        max: u64,
    },

    /// A zero polynomial has no generator term and cannot divide.
    #[error("polynomial must not be zero")]
    ZeroPoly,

    /// Neither a template name nor a full `width` + `poly` pair was given.
    #[error("width and poly are required when no template name is given")]
    MissingParameters,
}

/// Result type for CRC operations.
pub type Result<T> = std::result::Result<T, Error>;
