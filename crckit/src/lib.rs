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

//! CRCKit computes any CRC from 1 to 64 bits wide under a single engine.
//!
//! The crate is structured in thin layers:
//! - [`catalog`] holds the named algorithm presets (112 templates, reachable
//!   through 186 aliases) and resolves names to parameters.
//! - [`Params`] and [`Method`] describe one parameterization and the
//!   strategy used to compute it (bit-serial, byte-table, or slicing-by-8).
//! - [`Crc`] is the incremental engine: feed it bytes, words, or zero-runs
//!   and read back integers, digests, or hex. It also implements the
//!   RustCrypto [`digest`] traits, so it drops into generic hashing code.
//! - [`Crc::combine`] merges two finalized checksums in logarithmic time.
//!
//! Top-level re-exports make the common types available from the crate root.
//!
//! # Examples
//!
//! ```
//! use crckit::Crc;
//!
//! // one-shot, by catalogue name
//! assert_eq!(crckit::checksum("crc-32", b"123456789")?, 0xCBF4_3926);
//!
//! // incremental, with a custom parameterization
//! let mut crc = Crc::builder().width(16).poly(0x1021).init(0xFFFF).build()?;
//! crc.update(b"12345");
//! crc.update(b"6789");
//! assert_eq!(crc.value(), 0x29B1);
//! # Ok::<(), crckit::Error>(())
//! ```

#![deny(unsafe_code)]

mod catalog;
mod combine;
mod engine;
mod error;
mod kernels;
mod params;

pub use crate::catalog::resolve;
pub use crate::catalog::templates_available;
pub use crate::catalog::Template;
pub use crate::catalog::DEFAULT_NAME;
pub use crate::engine::checksum;
pub use crate::engine::Builder;
pub use crate::engine::Crc;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::params::Method;
pub use crate::params::Params;

/// Bits per input byte.
pub const BYTE_WIDTH: u32 = 8;

/// The widest supported CRC, in bits.
pub const MAX_WIDTH: u32 = 64;

/// The largest representable register value, `2^MAX_WIDTH - 1`.
pub const MAX_VALUE: u64 = u64::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert_eq!(MAX_WIDTH % BYTE_WIDTH, 0);
        assert_eq!(MAX_VALUE, u64::MAX >> (64 - MAX_WIDTH));
        assert_eq!(Crc::DIGEST_SIZE, (MAX_WIDTH / BYTE_WIDTH) as usize);
        assert_eq!(Crc::BLOCK_SIZE, 1);
        assert_eq!(Crc::NAME, "crc");
    }
}
