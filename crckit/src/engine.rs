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

use std::fmt;
use std::sync::Arc;

use digest::core_api::OutputSizeUser;
use digest::typenum::U8;
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, Reset, Update};

use crate::catalog;
use crate::combine;
use crate::error::Error;
use crate::error::Result;
use crate::kernels;
use crate::kernels::ByteTable;
use crate::kernels::WordTables;
use crate::params::reflect;
use crate::params::Method;
use crate::params::Params;
use crate::MAX_WIDTH;

/// The active computation strategy with its precomputed tables.
///
/// Tables sit behind [`Arc`] so cloning an engine shares them instead of
/// rebuilding; they are immutable once built.
#[derive(Clone)]
enum Kernel {
    Bitwise,
    Bytewise(Arc<ByteTable>),
    Wordwise(Arc<WordTables>),
}

/// Incremental checksummer for any CRC of width 1 to 64.
///
/// An engine is configured once — from a catalogue [`Template`], explicit
/// [`Params`], or a [`Builder`] mix of both — then fed bytes, bits, or
/// zero-runs, and finally read out as an integer, a big-endian digest, or a
/// hex string.
///
/// The division register is stored reflected when `refin` is set, so input
/// bytes never need per-byte reflection. A fresh or cleared engine reports
/// its seed value (`init`, or the [`clear_to`](Crc::clear_to) argument)
/// verbatim; once input has been folded, [`value`](Crc::value) reports the
/// finalized checksum with output reflection and `xorout` applied.
///
/// # Examples
///
/// ```
/// use crckit::Crc;
///
/// let mut crc = Crc::new("crc-16-ccitt-false")?;
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0x29B1);
/// assert_eq!(crc.digest(), vec![0x29, 0xB1]);
/// assert_eq!(crc.hex_digest(), "29b1");
///
/// crc.update(b"abcdef");
/// assert_eq!(crc.value(), 0xC378);
/// # Ok::<(), crckit::Error>(())
/// ```
///
/// [`Template`]: crate::Template
#[derive(Clone)]
pub struct Crc {
    params: Params,
    method: Method,
    kernel: Kernel,
    reg: u64,
    primed: bool,
}

impl Crc {
    /// Digest size reported to the hashing protocol: the byte size of the
    /// widest supported CRC, independent of the configured width.
    /// [`digest`](Crc::digest) itself sizes its output to the actual width.
    pub const DIGEST_SIZE: usize = (MAX_WIDTH as usize + 7) / 8;
    /// The engine consumes input byte by byte.
    pub const BLOCK_SIZE: usize = 1;
    /// Protocol name, the same for every parameterization.
    pub const NAME: &'static str = "crc";

    /// Create an engine from a catalogue name or alias, with the default
    /// (byte-table) strategy.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::from_parts(catalog::resolve(name)?.params(), Method::default()))
    }

    /// Create an engine from explicit parameters and strategy.
    pub fn with_params(params: Params, method: Method) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_parts(params, method))
    }

    /// Start building an engine from a template name and/or field overrides.
    pub fn builder() -> Builder {
        Builder::default()
    }

    fn from_parts(params: Params, method: Method) -> Self {
        let kernel = match method {
            Method::Bitwise => Kernel::Bitwise,
            Method::Bytewise => Kernel::Bytewise(Arc::new(ByteTable::build(&params))),
            Method::Wordwise => Kernel::Wordwise(Arc::new(WordTables::build(&params))),
        };
        let mut crc = Self {
            params,
            method,
            kernel,
            reg: 0,
            primed: false,
        };
        crc.clear();
        crc
    }

    fn seed(&mut self, value: u64) {
        self.reg = if self.params.refin {
            reflect(value, self.params.width)
        } else {
            value
        };
        self.primed = false;
    }

    /// Reset the register to `init`, as if freshly constructed.
    pub fn clear(&mut self) {
        self.seed(self.params.init);
    }

    /// Reset the register, substituting `value` for `init`.
    ///
    /// For algorithms without output reflection quirks (`xorout == 0`,
    /// `refin == refout`) this resumes a previously reported checksum:
    ///
    /// ```
    /// let mut crc = crckit::Crc::new("crc-16-ccitt-false")?;
    /// crc.clear_to(0x29B1)?; // checksum of "123456789"
    /// crc.update(b"abcdef");
    /// assert_eq!(crc.value(), 0xC378); // checksum of "123456789abcdef"
    /// # Ok::<(), crckit::Error>(())
    /// ```
    pub fn clear_to(&mut self, value: u64) -> Result<()> {
        let max = self.params.mask();
        if value > max {
            return Err(Error::ValueOutOfRange {
                what: "value",
                value,
                max,
            });
        }
        self.seed(value);
        Ok(())
    }

    fn absorb(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.reg = match &self.kernel {
            Kernel::Bitwise => kernels::fold_bytes_bitwise(&self.params, self.reg, data),
            Kernel::Bytewise(table) => table.fold(&self.params, self.reg, data),
            Kernel::Wordwise(tables) => tables.fold(&self.params, self.reg, data),
        };
        self.primed = true;
    }

    /// Fold a byte stream into the register.
    ///
    /// `update(a)` followed by `update(b)` is byte-exactly `update(a ∥ b)`;
    /// empty input leaves the engine untouched.
    pub fn update(&mut self, data: &[u8]) {
        self.absorb(data);
    }

    /// Fold the low `bits` bits of `value`, MSB-first for non-reflected
    /// algorithms and LSB-first for reflected ones.
    ///
    /// `update_word(b, 8)` for each byte `b` is exactly `update(&bytes)`.
    /// `bits == 0` is a no-op that accepts any `value`; otherwise `value`
    /// must fit in `bits` bits and `bits` must not exceed 64.
    pub fn update_word(&mut self, value: u64, bits: u32) -> Result<()> {
        if bits > MAX_WIDTH {
            return Err(Error::ValueOutOfRange {
                what: "bits",
                value: bits as u64,
                max: MAX_WIDTH as u64,
            });
        }
        if bits == 0 {
            return Ok(());
        }
        let max = u64::MAX >> (64 - bits);
        if value > max {
            return Err(Error::ValueOutOfRange {
                what: "value",
                value,
                max,
            });
        }
        self.reg = kernels::fold_word(&self.params, self.reg, value, bits);
        self.primed = true;
        Ok(())
    }

    fn shift_zeros(&mut self, bits: u128) {
        if bits == 0 {
            return;
        }
        let p = &self.params;
        let canonical = if p.refin { reflect(self.reg, p.width) } else { self.reg };
        let shifted = combine::shift_zero_bits(canonical, bits, p.poly, p.width);
        self.reg = if p.refin { reflect(shifted, p.width) } else { shifted };
        self.primed = true;
    }

    /// Fold `count` zero bits in `O(width · log count)` time, equivalent to
    /// `update_word(0, count)` repeated bit by bit.
    pub fn zero_bits(&mut self, count: u64) {
        self.shift_zeros(count as u128);
    }

    /// Fold `count` zero bytes, equivalent to updating with `count` `0x00`
    /// bytes without scanning them.
    pub fn zero_bytes(&mut self, count: u64) {
        self.shift_zeros(count as u128 * 8);
    }

    /// The current checksum.
    ///
    /// A fresh or cleared engine reports its seed value unchanged; after any
    /// input, the register is reflected once if `refout` differs from
    /// `refin` and XORed with `xorout`.
    pub fn value(&self) -> u64 {
        let p = &self.params;
        if self.primed {
            let out = if p.refin != p.refout {
                reflect(self.reg, p.width)
            } else {
                self.reg
            };
            out ^ p.xorout
        } else if p.refin {
            reflect(self.reg, p.width)
        } else {
            self.reg
        }
    }

    /// The checksum as a big-endian byte string of `⌈width / 8⌉` bytes,
    /// right-justified: unused high bits of the first byte are zero.
    pub fn digest(&self) -> Vec<u8> {
        let size = (self.params.width as usize + 7) / 8;
        self.value().to_be_bytes()[Self::DIGEST_SIZE - size..].to_vec()
    }

    /// Lowercase hex rendition of [`digest`](Crc::digest).
    pub fn hex_digest(&self) -> String {
        self.digest().iter().map(|byte| format!("{byte:02x}")).collect()
    }

    /// The checksum of `A ∥ B`, given `crc1 = crc(A)`, `crc2 = crc(B)`, and
    /// `len2 = |B|`, without rescanning either stream.
    ///
    /// Runs in `O(width · log len2)`; `len2 == 0` returns `crc1` exactly.
    /// Both checksums must fit the configured width.
    ///
    /// ```
    /// let crc = crckit::Crc::new("crc-16-ccitt-false")?;
    /// let a = crckit::checksum("crc-16-ccitt-false", b"123456789")?;
    /// let b = crckit::checksum("crc-16-ccitt-false", b"abcdef")?;
    /// assert_eq!(crc.combine(a, b, 6)?, 0xC378);
    /// # Ok::<(), crckit::Error>(())
    /// ```
    pub fn combine(&self, crc1: u64, crc2: u64, len2: u64) -> Result<u64> {
        let max = self.params.mask();
        if crc1 > max {
            return Err(Error::ValueOutOfRange {
                what: "crc1",
                value: crc1,
                max,
            });
        }
        if crc2 > max {
            return Err(Error::ValueOutOfRange {
                what: "crc2",
                value: crc2,
                max,
            });
        }
        Ok(combine::combine(&self.params, crc1, crc2, len2))
    }

    /// The configured parameters.
    pub fn params(&self) -> Params {
        self.params
    }

    /// The active computation strategy.
    pub fn method(&self) -> Method {
        self.method
    }

    /// CRC width in bits.
    pub fn width(&self) -> u32 {
        self.params.width
    }

    /// Non-reflected generator polynomial.
    pub fn poly(&self) -> u64 {
        self.params.poly
    }

    /// Configured initial register value.
    pub fn init(&self) -> u64 {
        self.params.init
    }

    /// Input reflection flag.
    pub fn refin(&self) -> bool {
        self.params.refin
    }

    /// Output reflection flag.
    pub fn refout(&self) -> bool {
        self.params.refout
    }

    /// Final XOR mask.
    pub fn xorout(&self) -> u64 {
        self.params.xorout
    }
}

impl Default for Crc {
    /// The default template, `crc-32` (ISO-HDLC), with the byte-table
    /// strategy.
    fn default() -> Self {
        Self::from_parts(
            Params::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
            Method::default(),
        )
    }
}

impl fmt::Debug for Crc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc")
            .field("width", &self.params.width)
            .field("poly", &format_args!("{poly:#x}", poly = self.params.poly))
            .field("method", &self.method)
            .field("value", &format_args!("{value:#x}", value = self.value()))
            .finish()
    }
}

impl OutputSizeUser for Crc {
    type OutputSize = U8;
}

impl Update for Crc {
    fn update(&mut self, data: &[u8]) {
        self.absorb(data);
    }
}

impl Reset for Crc {
    fn reset(&mut self) {
        self.clear();
    }
}

impl FixedOutput for Crc {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.value().to_be_bytes());
    }
}

impl FixedOutputReset for Crc {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.value().to_be_bytes());
        self.clear();
    }
}

impl HashMarker for Crc {}

/// One-shot checksum of `data` under a catalogue template.
///
/// ```
/// assert_eq!(crckit::checksum("crc-32", b"123456789")?, 0xCBF4_3926);
/// assert_eq!(crckit::checksum("xmodem", b"123456789")?, 0x31C3);
/// # Ok::<(), crckit::Error>(())
/// ```
pub fn checksum(name: &str, data: &[u8]) -> Result<u64> {
    let mut crc = Crc::new(name)?;
    crc.update(data);
    Ok(crc.value())
}

/// Configures and validates a [`Crc`] engine.
///
/// A template `name` supplies base parameters; each explicit setter then
/// overrides one field. Without a name, `width` and `poly` are required
/// together (the remaining fields default to zero/false), and with nothing
/// at all the default `crc-32` template applies.
///
/// ```
/// use crckit::Crc;
///
/// // xmodem by hand: template-free width/poly construction
/// let mut crc = Crc::builder().width(16).poly(0x1021).build()?;
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0x31C3);
///
/// // a catalogue entry with one field overridden
/// let crc = Crc::builder().name("crc-16-ccitt-false").init(0x1D0F).build()?;
/// assert_eq!(crc.init(), 0x1D0F);
/// # Ok::<(), crckit::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    name: Option<String>,
    width: Option<u32>,
    poly: Option<u64>,
    init: Option<u64>,
    refin: Option<bool>,
    refout: Option<bool>,
    xorout: Option<u64>,
    method: Option<Method>,
}

impl Builder {
    /// Base template name or alias, resolved case-insensitively.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the CRC width in bits.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the generator polynomial (non-reflected, top bit omitted).
    pub fn poly(mut self, poly: u64) -> Self {
        self.poly = Some(poly);
        self
    }

    /// Override the initial register value.
    pub fn init(mut self, init: u64) -> Self {
        self.init = Some(init);
        self
    }

    /// Override input reflection.
    pub fn refin(mut self, refin: bool) -> Self {
        self.refin = Some(refin);
        self
    }

    /// Override output reflection.
    pub fn refout(mut self, refout: bool) -> Self {
        self.refout = Some(refout);
        self
    }

    /// Override the final XOR mask.
    pub fn xorout(mut self, xorout: u64) -> Self {
        self.xorout = Some(xorout);
        self
    }

    /// Select the computation strategy (byte-table if unset).
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Accepted for hashing-protocol compatibility and ignored: a CRC is
    /// never a security primitive.
    pub fn used_for_security(self, _used: bool) -> Self {
        self
    }

    /// Resolve, merge, validate, and construct the engine.
    pub fn build(self) -> Result<Crc> {
        let base = match &self.name {
            Some(name) => Some(catalog::resolve(name)?.params()),
            None if self.width.is_none() && self.poly.is_none() => {
                Some(catalog::resolve(catalog::DEFAULT_NAME)?.params())
            }
            None => None,
        };
        let params = match base {
            Some(base) => Params::new(
                self.width.unwrap_or(base.width),
                self.poly.unwrap_or(base.poly),
                self.init.unwrap_or(base.init),
                self.refin.unwrap_or(base.refin),
                self.refout.unwrap_or(base.refout),
                self.xorout.unwrap_or(base.xorout),
            ),
            None => {
                let (Some(width), Some(poly)) = (self.width, self.poly) else {
                    return Err(Error::MissingParameters);
                };
                Params::new(
                    width,
                    poly,
                    self.init.unwrap_or(0),
                    self.refin.unwrap_or(false),
                    self.refout.unwrap_or(false),
                    self.xorout.unwrap_or(0),
                )
            }
        };
        params.validate()?;
        Ok(Crc::from_parts(params, self.method.unwrap_or_default()))
    }
}
