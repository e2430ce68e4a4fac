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

//! GF(2) polynomial arithmetic modulo the generator, and checksum
//! combination built on it.
//!
//! Values are polynomials of degree below `width` in the canonical MSB-first
//! bit order. Appending `n` zero bits to a message multiplies its register by
//! `x^n` modulo the generator, so both the zero-shift primitives and
//! [`combine`] reduce to modular exponentiation of `x`, evaluated by square
//! and multiply in `O(width · log n)` register operations.

use crate::params::reflect;
use crate::params::Params;

/// Multiply a polynomial by `x` modulo the generator.
fn xtime(value: u64, poly: u64, width: u32) -> u64 {
    let carry = (value >> (width - 1)) & 1 != 0;
    let shifted = (value << 1) & (u64::MAX >> (64 - width));
    if carry {
        shifted ^ poly
    } else {
        shifted
    }
}

/// Product of two polynomials modulo the generator.
pub(crate) fn mul_mod(a: u64, b: u64, poly: u64, width: u32) -> u64 {
    let mut product = 0;
    for i in (0..width).rev() {
        product = xtime(product, poly, width);
        if (b >> i) & 1 != 0 {
            product ^= a;
        }
    }
    product
}

/// `x^n` modulo the generator.
pub(crate) fn x_pow(n: u128, poly: u64, width: u32) -> u64 {
    let mut result = 1;
    let mut base = xtime(1, poly, width);
    let mut n = n;
    while n != 0 {
        if n & 1 != 0 {
            result = mul_mod(result, base, poly, width);
        }
        base = mul_mod(base, base, poly, width);
        n >>= 1;
    }
    result
}

/// Canonical register after appending `bits` zero bits to the stream.
pub(crate) fn shift_zero_bits(canonical: u64, bits: u128, poly: u64, width: u32) -> u64 {
    mul_mod(x_pow(bits, poly, width), canonical, poly, width)
}

/// The checksum of `A ∥ B` given the finalized checksums of `A` and `B` and
/// the byte length of `B`.
///
/// Both inputs are de-finalized into canonical registers; the identity
/// `C(A∥B) = x^{8·len2} · (C(A) ⊕ init) ⊕ C(B)` then cancels the second
/// stream's redundant `init` contribution, and the result is re-finalized.
/// `len2 == 0` returns `crc1` unchanged, whatever `crc2` is.
pub(crate) fn combine(params: &Params, crc1: u64, crc2: u64, len2: u64) -> u64 {
    if len2 == 0 {
        return crc1;
    }
    let canonical = |value: u64| {
        let value = value ^ params.xorout;
        if params.refout {
            reflect(value, params.width)
        } else {
            value
        }
    };
    let c1 = canonical(crc1);
    let c2 = canonical(crc2);
    let shifted = shift_zero_bits(c1 ^ params.init, len2 as u128 * 8, params.poly, params.width);
    let out = shifted ^ c2;
    let out = if params.refout {
        reflect(out, params.width)
    } else {
        out
    };
    out ^ params.xorout
}
