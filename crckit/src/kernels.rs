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

//! The three computation strategies: bit-serial, byte-table, and
//! slicing-by-8 word-table.
//!
//! All strategies operate on the engine register, which is stored reflected
//! (LSB-first, bottom-aligned) when `refin` and non-reflected otherwise.
//! Non-reflected kernels shift the register to the top of a `u64`
//! (`reg << (64 - width)`) for the duration of a call, which makes one set
//! of formulas cover every width from 1 to 64 — including widths below 8,
//! where the register occupies fewer bits than a single input byte.
//!
//! Lookup tables depend only on `(width, poly, refin)`, never on
//! `init`/`refout`/`xorout`, so table-backed engines that differ only in
//! finalization parameters carry identical tables.

use crate::params::reflect;
use crate::params::Params;

/// Slice count of the word-table strategy: one table per byte of a 64-bit
/// chunk.
const SLICES: usize = 8;

/// Fold a byte slice through the bit-serial register rule.
pub(crate) fn fold_bytes_bitwise(params: &Params, reg: u64, data: &[u8]) -> u64 {
    if params.refin {
        let poly = reflect(params.poly, params.width);
        let mut reg = reg;
        for &byte in data {
            reg ^= byte as u64;
            for _ in 0..8 {
                reg = (reg >> 1) ^ if reg & 1 != 0 { poly } else { 0 };
            }
        }
        reg
    } else {
        let shift = 64 - params.width;
        let poly = params.poly << shift;
        let mut top = reg << shift;
        for &byte in data {
            top ^= (byte as u64) << 56;
            for _ in 0..8 {
                top = (top << 1) ^ if top >> 63 != 0 { poly } else { 0 };
            }
        }
        top >> shift
    }
}

/// Fold the low `bits` bits of `value` one bit at a time.
///
/// Bit order follows the register domain: LSB-first when `refin`, MSB-first
/// otherwise. `bits` must be `1..=64` and `value` must fit in `bits` bits.
pub(crate) fn fold_word(params: &Params, reg: u64, value: u64, bits: u32) -> u64 {
    if params.refin {
        let poly = reflect(params.poly, params.width);
        let mut reg = reg;
        for k in 0..bits {
            reg ^= (value >> k) & 1;
            reg = (reg >> 1) ^ if reg & 1 != 0 { poly } else { 0 };
        }
        reg
    } else {
        let shift = 64 - params.width;
        let poly = params.poly << shift;
        let mut top = reg << shift;
        for k in (0..bits).rev() {
            top ^= ((value >> k) & 1) << 63;
            top = (top << 1) ^ if top >> 63 != 0 { poly } else { 0 };
        }
        top >> shift
    }
}

/// 256-entry lookup table for the byte-at-a-time strategy.
///
/// Entry `b` is the register after feeding byte `b` into a zero register.
/// Reflected entries are stored in the natural bottom-aligned domain;
/// non-reflected entries are stored top-aligned.
#[derive(Clone)]
pub(crate) struct ByteTable {
    entries: [u64; 256],
}

impl ByteTable {
    pub(crate) fn build(params: &Params) -> Self {
        let mut entries = [0u64; 256];
        if params.refin {
            let poly = reflect(params.poly, params.width);
            for (byte, slot) in entries.iter_mut().enumerate() {
                let mut reg = byte as u64;
                for _ in 0..8 {
                    reg = (reg >> 1) ^ if reg & 1 != 0 { poly } else { 0 };
                }
                *slot = reg;
            }
        } else {
            let poly = params.poly << (64 - params.width);
            for (byte, slot) in entries.iter_mut().enumerate() {
                let mut top = (byte as u64) << 56;
                for _ in 0..8 {
                    top = (top << 1) ^ if top >> 63 != 0 { poly } else { 0 };
                }
                *slot = top;
            }
        }
        Self { entries }
    }

    pub(crate) fn fold(&self, params: &Params, reg: u64, data: &[u8]) -> u64 {
        if params.refin {
            let mut reg = reg;
            for &byte in data {
                let index = (reg as u8) ^ byte;
                reg = (reg >> 8) ^ self.entries[index as usize];
            }
            reg
        } else {
            let shift = 64 - params.width;
            let mut top = reg << shift;
            for &byte in data {
                let index = ((top >> 56) as u8) ^ byte;
                top = (top << 8) ^ self.entries[index as usize];
            }
            top >> shift
        }
    }
}

/// Slicing-by-8 tables: table `k` holds the register after a byte followed
/// by `k` zero bytes, so eight independent lookups cover a 64-bit chunk.
#[derive(Clone)]
pub(crate) struct WordTables {
    slice: [[u64; 256]; SLICES],
}

impl WordTables {
    pub(crate) fn build(params: &Params) -> Self {
        let mut slice = [[0u64; 256]; SLICES];
        slice[0] = ByteTable::build(params).entries;
        for k in 1..SLICES {
            for i in 0..256 {
                let prev = slice[k - 1][i];
                slice[k][i] = if params.refin {
                    (prev >> 8) ^ slice[0][(prev & 0xFF) as usize]
                } else {
                    (prev << 8) ^ slice[0][(prev >> 56) as usize]
                };
            }
        }
        Self { slice }
    }

    pub(crate) fn fold(&self, params: &Params, reg: u64, data: &[u8]) -> u64 {
        let chunks = data.chunks_exact(SLICES);
        let tail = chunks.remainder();
        let t = &self.slice;
        if params.refin {
            let mut reg = reg;
            for c in chunks {
                let x = u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]) ^ reg;
                reg = t[7][(x & 0xFF) as usize]
                    ^ t[6][((x >> 8) & 0xFF) as usize]
                    ^ t[5][((x >> 16) & 0xFF) as usize]
                    ^ t[4][((x >> 24) & 0xFF) as usize]
                    ^ t[3][((x >> 32) & 0xFF) as usize]
                    ^ t[2][((x >> 40) & 0xFF) as usize]
                    ^ t[1][((x >> 48) & 0xFF) as usize]
                    ^ t[0][(x >> 56) as usize];
            }
            for &byte in tail {
                let index = (reg as u8) ^ byte;
                reg = (reg >> 8) ^ t[0][index as usize];
            }
            reg
        } else {
            let shift = 64 - params.width;
            let mut top = reg << shift;
            for c in chunks {
                let x = u64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]) ^ top;
                top = t[7][(x >> 56) as usize]
                    ^ t[6][((x >> 48) & 0xFF) as usize]
                    ^ t[5][((x >> 40) & 0xFF) as usize]
                    ^ t[4][((x >> 32) & 0xFF) as usize]
                    ^ t[3][((x >> 24) & 0xFF) as usize]
                    ^ t[2][((x >> 16) & 0xFF) as usize]
                    ^ t[1][((x >> 8) & 0xFF) as usize]
                    ^ t[0][(x & 0xFF) as usize];
            }
            for &byte in tail {
                let index = ((top >> 56) as u8) ^ byte;
                top = (top << 8) ^ t[0][index as usize];
            }
            top >> shift
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC32: Params = Params::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
    const XMODEM: Params = Params::new(16, 0x1021, 0x0000, false, false, 0x0000);

    // Map a stored table entry back to the bottom-aligned register domain.
    fn bottom(params: &Params, entry: u64) -> u64 {
        if params.refin {
            entry
        } else {
            entry >> (64 - params.width)
        }
    }

    fn top_aligned(params: &Params, reg: u64) -> u64 {
        if params.refin {
            reg
        } else {
            reg << (64 - params.width)
        }
    }

    #[test]
    fn reflected_table_matches_known_entries() {
        let table = ByteTable::build(&CRC32);
        assert_eq!(table.entries[0], 0x0000_0000);
        assert_eq!(table.entries[1], 0x7707_3096);
        assert_eq!(table.entries[255], 0x2D02_EF8D);
    }

    #[test]
    fn standard_table_matches_known_entries() {
        // CCITT table entries, shifted down from the top-aligned storage.
        let table = ByteTable::build(&XMODEM);
        assert_eq!(table.entries[0] >> 48, 0x0000);
        assert_eq!(table.entries[1] >> 48, 0x1021);
        assert_eq!(table.entries[16] >> 48, 0x1231);
    }

    #[test]
    fn slice_tables_extend_the_byte_table() {
        for params in [CRC32, XMODEM, Params::new(5, 0x05, 0x1F, true, true, 0x1F)] {
            let byte = ByteTable::build(&params);
            let word = WordTables::build(&params);
            assert_eq!(word.slice[0], byte.entries);
            for k in 1..SLICES {
                for i in 0..256 {
                    // one more zero byte per slice level
                    let expected = byte.fold(&params, bottom(&params, word.slice[k - 1][i]), &[0]);
                    assert_eq!(
                        bottom(&params, word.slice[k][i]),
                        expected,
                        "slice {k} entry {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn strategies_agree_on_every_single_byte() {
        for params in [
            CRC32,
            XMODEM,
            Params::new(1, 0x1, 0x0, false, false, 0x0),
            Params::new(3, 0x3, 0x7, true, true, 0x0),
            Params::new(12, 0x80F, 0x000, false, true, 0x000),
            Params::new(64, u64::MAX, u64::MAX, false, false, u64::MAX),
        ] {
            let byte = ByteTable::build(&params);
            let word = WordTables::build(&params);
            let seed = if params.refin {
                reflect(params.init, params.width)
            } else {
                params.init
            };
            for b in 0..=255u8 {
                let bits = fold_bytes_bitwise(&params, seed, &[b]);
                assert_eq!(byte.fold(&params, seed, &[b]), bits, "byte table, input {b:#x}");
                assert_eq!(word.fold(&params, seed, &[b]), bits, "word table, input {b:#x}");
                assert_eq!(fold_word(&params, seed, b as u64, 8), bits, "word fold, input {b:#x}");
            }
        }
    }

    #[test]
    fn word_fold_composes_bitwise() {
        let seed = 0xFFFF;
        let folded = fold_bytes_bitwise(&XMODEM, seed, &[0xA5]);
        let mut reg = seed;
        for k in (0..8u32).rev() {
            reg = fold_word(&XMODEM, reg, (0xA5 >> k) & 1, 1);
        }
        assert_eq!(reg, folded);
    }

    #[test]
    fn table_entries_stay_in_register_range() {
        for params in [
            Params::new(1, 0x1, 0x0, true, true, 0x0),
            Params::new(7, 0x45, 0x00, false, false, 0x00),
            Params::new(40, 0x0004_820009, 0, false, false, 0xFF_FFFF_FFFF),
        ] {
            let table = ByteTable::build(&params);
            for (i, &entry) in table.entries.iter().enumerate() {
                let value = bottom(&params, entry);
                assert!(value <= params.mask(), "entry {i} out of range");
                // storage round-trips through the alignment convention
                assert_eq!(top_aligned(&params, value), entry);
            }
        }
    }
}
