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

//! Catalogue of named CRC algorithms.
//!
//! Parameters and test vectors follow the RevEng CRC Catalogue
//! (<https://reveng.sourceforge.io/crc-catalogue/all.htm>). Canonical names
//! use the `crc-<width>-<label>` convention; [`ALIASES`] additionally maps
//! the traditional short names (`kermit`, `xmodem`, `pkzip`, ...) and every
//! canonical name to itself. Both tables are sorted so lookup is a binary
//! search over static data; no registration happens at runtime.

use crate::error::Error;
use crate::error::Result;
use crate::params::Params;

/// A named CRC algorithm preset: the six computational parameters plus the
/// two published validation values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    /// Number of significant bits in the CRC.
    pub width: u32,
    /// Non-reflected generator polynomial, top bit omitted.
    pub poly: u64,
    /// Initial register value.
    pub init: u64,
    /// Input reflection.
    pub refin: bool,
    /// Output reflection.
    pub refout: bool,
    /// Final XOR mask.
    pub xorout: u64,
    /// Checksum of the ASCII bytes `"123456789"`.
    pub check: u64,
    /// Register value, with `xorout` removed, after a valid codeword.
    pub residue: u64,
}

impl Template {
    const fn new(
        width: u32,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
        check: u64,
        residue: u64,
    ) -> Self {
        Self {
            width,
            poly,
            init,
            refin,
            refout,
            xorout,
            check,
            residue,
        }
    }

    /// The computational parameters, without the validation values.
    pub fn params(&self) -> Params {
        Params::new(self.width, self.poly, self.init, self.refin, self.refout, self.xorout)
    }
}

/// The template resolved when neither a name nor explicit parameters are
/// given.
pub const DEFAULT_NAME: &str = "crc-32";

/// Canonical templates, sorted by name.
#[rustfmt::skip]
pub(crate) const TEMPLATES: &[(&str, Template)] = &[
    ("crc-10-atm", Template::new(10, 0x233, 0x000, false, false, 0x000, 0x199, 0x000)),
    ("crc-10-cdma2000", Template::new(10, 0x3D9, 0x3FF, false, false, 0x000, 0x233, 0x000)),
    ("crc-10-gsm", Template::new(10, 0x175, 0x000, false, false, 0x3FF, 0x12A, 0x0C6)),
    ("crc-11-flexray", Template::new(11, 0x385, 0x01A, false, false, 0x000, 0x5A3, 0x000)),
    ("crc-11-umts", Template::new(11, 0x307, 0x000, false, false, 0x000, 0x061, 0x000)),
    ("crc-12-cdma2000", Template::new(12, 0xF13, 0xFFF, false, false, 0x000, 0xD4D, 0x000)),
    ("crc-12-dect", Template::new(12, 0x80F, 0x000, false, false, 0x000, 0xF5B, 0x000)),
    ("crc-12-gsm", Template::new(12, 0xD31, 0x000, false, false, 0xFFF, 0xB34, 0x178)),
    ("crc-12-umts", Template::new(12, 0x80F, 0x000, false, true, 0x000, 0xDAF, 0x000)),
    ("crc-13-bbc", Template::new(13, 0x1CF5, 0x0000, false, false, 0x0000, 0x04FA, 0x0000)),
    ("crc-14-darc", Template::new(14, 0x0805, 0x0000, true, true, 0x0000, 0x082D, 0x0000)),
    ("crc-14-gsm", Template::new(14, 0x202D, 0x0000, false, false, 0x3FFF, 0x30AE, 0x031E)),
    ("crc-15-can", Template::new(15, 0x4599, 0x0000, false, false, 0x0000, 0x059E, 0x0000)),
    ("crc-15-mpt1327", Template::new(15, 0x6815, 0x0000, false, false, 0x0001, 0x2566, 0x6815)),
    ("crc-16-arc", Template::new(16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D, 0x0000)),
    ("crc-16-cdma2000", Template::new(16, 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06, 0x0000)),
    ("crc-16-cms", Template::new(16, 0x8005, 0xFFFF, false, false, 0x0000, 0xAEE7, 0x0000)),
    ("crc-16-dds-110", Template::new(16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF, 0x0000)),
    ("crc-16-dect-r", Template::new(16, 0x0589, 0x0000, false, false, 0x0001, 0x007E, 0x0589)),
    ("crc-16-dect-x", Template::new(16, 0x0589, 0x0000, false, false, 0x0000, 0x007F, 0x0000)),
    ("crc-16-dnp", Template::new(16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82, 0x66C5)),
    ("crc-16-en-13757", Template::new(16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7, 0xA366)),
    ("crc-16-genibus", Template::new(16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E, 0x1D0F)),
    ("crc-16-gsm", Template::new(16, 0x1021, 0x0000, false, false, 0xFFFF, 0xCE3C, 0x1D0F)),
    ("crc-16-ibm-3740", Template::new(16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1, 0x0000)),
    ("crc-16-ibm-sdlc", Template::new(16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E, 0xF0B8)),
    ("crc-16-iso-iec-14443-3-a", Template::new(16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05, 0x0000)),
    ("crc-16-kermit", Template::new(16, 0x1021, 0x0000, true, true, 0x0000, 0x2189, 0x0000)),
    ("crc-16-lj1200", Template::new(16, 0x6F63, 0x0000, false, false, 0x0000, 0xBDF4, 0x0000)),
    ("crc-16-m17", Template::new(16, 0x5935, 0xFFFF, false, false, 0x0000, 0x772B, 0x0000)),
    ("crc-16-maxim-dow", Template::new(16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2, 0xB001)),
    ("crc-16-mcrf4xx", Template::new(16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91, 0x0000)),
    ("crc-16-modbus", Template::new(16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37, 0x0000)),
    ("crc-16-nrsc-5", Template::new(16, 0x080B, 0xFFFF, true, true, 0x0000, 0xA066, 0x0000)),
    ("crc-16-opensafety-a", Template::new(16, 0x5935, 0x0000, false, false, 0x0000, 0x5D38, 0x0000)),
    ("crc-16-opensafety-b", Template::new(16, 0x755B, 0x0000, false, false, 0x0000, 0x20FE, 0x0000)),
    ("crc-16-profibus", Template::new(16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819, 0xE394)),
    ("crc-16-riello", Template::new(16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0, 0x0000)),
    ("crc-16-spi-fujitsu", Template::new(16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC, 0x0000)),
    ("crc-16-t10-dif", Template::new(16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB, 0x0000)),
    ("crc-16-teledisk", Template::new(16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3, 0x0000)),
    ("crc-16-tms37157", Template::new(16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1, 0x0000)),
    ("crc-16-umts", Template::new(16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8, 0x0000)),
    ("crc-16-usb", Template::new(16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8, 0xB001)),
    ("crc-16-xmodem", Template::new(16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3, 0x0000)),
    ("crc-17-can-fd", Template::new(17, 0x0001_685B, 0x0000_0000, false, false, 0x0000_0000, 0x0000_4F03, 0x0000_0000)),
    ("crc-21-can-fd", Template::new(21, 0x0010_2899, 0x0000_0000, false, false, 0x0000_0000, 0x000E_D841, 0x0000_0000)),
    ("crc-24-ble", Template::new(24, 0x0000_065B, 0x0055_5555, true, true, 0x0000_0000, 0x00C2_5A56, 0x0000_0000)),
    ("crc-24-flexray-a", Template::new(24, 0x005D_6DCB, 0x00FE_DCBA, false, false, 0x0000_0000, 0x0079_79BD, 0x0000_0000)),
    ("crc-24-flexray-b", Template::new(24, 0x005D_6DCB, 0x00AB_CDEF, false, false, 0x0000_0000, 0x001F_23B8, 0x0000_0000)),
    ("crc-24-interlaken", Template::new(24, 0x0032_8B63, 0x00FF_FFFF, false, false, 0x00FF_FFFF, 0x00B4_F3E6, 0x0014_4E63)),
    ("crc-24-lte-a", Template::new(24, 0x0086_4CFB, 0x0000_0000, false, false, 0x0000_0000, 0x00CD_E703, 0x0000_0000)),
    ("crc-24-lte-b", Template::new(24, 0x0080_0063, 0x0000_0000, false, false, 0x0000_0000, 0x0023_EF52, 0x0000_0000)),
    ("crc-24-openpgp", Template::new(24, 0x0086_4CFB, 0x00B7_04CE, false, false, 0x0000_0000, 0x0021_CF02, 0x0000_0000)),
    ("crc-24-os-9", Template::new(24, 0x0080_0063, 0x00FF_FFFF, false, false, 0x00FF_FFFF, 0x0020_0FA5, 0x0080_0FE3)),
    ("crc-3-gsm", Template::new(3, 0x3, 0x0, false, false, 0x7, 0x4, 0x2)),
    ("crc-3-rohc", Template::new(3, 0x3, 0x7, true, true, 0x0, 0x6, 0x0)),
    ("crc-30-cdma", Template::new(30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF, 0x04C3_4ABF, 0x34EF_A55A)),
    ("crc-31-philips", Template::new(31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF, 0x0CE9_E46C, 0x4EAF_26F1)),
    ("crc-32-aixm", Template::new(32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000, 0x3010_BF7F, 0x0000_0000)),
    ("crc-32-autosar", Template::new(32, 0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x1697_D06A, 0x904C_DDBF)),
    ("crc-32-base91-d", Template::new(32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x8731_5576, 0x4527_0551)),
    ("crc-32-bzip2", Template::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918, 0xC704_DD7B)),
    ("crc-32-cd-rom-edc", Template::new(32, 0x8001_801B, 0x0000_0000, true, true, 0x0000_0000, 0x6EC2_EDC4, 0x0000_0000)),
    ("crc-32-cksum", Template::new(32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF, 0x765E_7680, 0xC704_DD7B)),
    ("crc-32-iscsi", Template::new(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283, 0xB798_B438)),
    ("crc-32-iso-hdlc", Template::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926, 0xDEBB_20E3)),
    ("crc-32-jamcrc", Template::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000, 0x340B_C6D9, 0x0000_0000)),
    ("crc-32-mef", Template::new(32, 0x741B_8CD7, 0xFFFF_FFFF, true, true, 0x0000_0000, 0xD2C2_2F51, 0x0000_0000)),
    ("crc-32-mpeg-2", Template::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, 0x0376_E6E7, 0x0000_0000)),
    ("crc-32-xfer", Template::new(32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000, 0xBD0B_E338, 0x0000_0000)),
    ("crc-4-g-704", Template::new(4, 0x3, 0x0, true, true, 0x0, 0x7, 0x0)),
    ("crc-4-interlaken", Template::new(4, 0x3, 0xF, false, false, 0xF, 0xB, 0x2)),
    ("crc-40-gsm", Template::new(40, 0x0000_0000_0482_0009, 0x0000_0000_0000_0000, false, false, 0x0000_00FF_FFFF_FFFF, 0x0000_00D4_164F_C646, 0x0000_00C4_FF80_71FF)),
    ("crc-5-epc-c1g2", Template::new(5, 0x09, 0x09, false, false, 0x00, 0x00, 0x00)),
    ("crc-5-g-704", Template::new(5, 0x15, 0x00, true, true, 0x00, 0x07, 0x00)),
    ("crc-5-usb", Template::new(5, 0x05, 0x1F, true, true, 0x1F, 0x19, 0x06)),
    ("crc-6-cdma2000-a", Template::new(6, 0x27, 0x3F, false, false, 0x00, 0x0D, 0x00)),
    ("crc-6-cdma2000-b", Template::new(6, 0x07, 0x3F, false, false, 0x00, 0x3B, 0x00)),
    ("crc-6-darc", Template::new(6, 0x19, 0x00, true, true, 0x00, 0x26, 0x00)),
    ("crc-6-g-704", Template::new(6, 0x03, 0x00, true, true, 0x00, 0x06, 0x00)),
    ("crc-6-gsm", Template::new(6, 0x2F, 0x00, false, false, 0x3F, 0x13, 0x3A)),
    ("crc-64-ecma-182", Template::new(64, 0x42F0_E1EB_A9EA_3693, 0x0000_0000_0000_0000, false, false, 0x0000_0000_0000_0000, 0x6C40_DF5F_0B49_7347, 0x0000_0000_0000_0000)),
    ("crc-64-go-iso", Template::new(64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0xB909_56C7_75A4_1001, 0x5300_0000_0000_0000)),
    ("crc-64-ms", Template::new(64, 0x259C_84CB_A642_6349, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0x0000_0000_0000_0000, 0x75D4_B74F_024E_CEEA, 0x0000_0000_0000_0000)),
    ("crc-64-nvme", Template::new(64, 0xAD93_D235_94C9_3659, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0xAE8B_1486_0A79_9888, 0xF310_303B_2B6F_6E42)),
    ("crc-64-redis", Template::new(64, 0xAD93_D235_94C9_35A9, 0x0000_0000_0000_0000, true, true, 0x0000_0000_0000_0000, 0xE9C6_D914_C4B8_D9CA, 0x0000_0000_0000_0000)),
    ("crc-64-we", Template::new(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, false, false, 0xFFFF_FFFF_FFFF_FFFF, 0x62EC_59E3_F1A4_F00A, 0xFCAC_BEBD_5931_A992)),
    ("crc-64-xz", Template::new(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0x995D_C9BB_DF19_39FA, 0x4995_8C9A_BD7D_353F)),
    ("crc-7-mmc", Template::new(7, 0x09, 0x00, false, false, 0x00, 0x75, 0x00)),
    ("crc-7-rohc", Template::new(7, 0x4F, 0x7F, true, true, 0x00, 0x53, 0x00)),
    ("crc-7-umts", Template::new(7, 0x45, 0x00, false, false, 0x00, 0x61, 0x00)),
    ("crc-8-autosar", Template::new(8, 0x2F, 0xFF, false, false, 0xFF, 0xDF, 0x42)),
    ("crc-8-bluetooth", Template::new(8, 0xA7, 0x00, true, true, 0x00, 0x26, 0x00)),
    ("crc-8-cdma2000", Template::new(8, 0x9B, 0xFF, false, false, 0x00, 0xDA, 0x00)),
    ("crc-8-darc", Template::new(8, 0x39, 0x00, true, true, 0x00, 0x15, 0x00)),
    ("crc-8-dvb-s2", Template::new(8, 0xD5, 0x00, false, false, 0x00, 0xBC, 0x00)),
    ("crc-8-gsm-a", Template::new(8, 0x1D, 0x00, false, false, 0x00, 0x37, 0x00)),
    ("crc-8-gsm-b", Template::new(8, 0x49, 0x00, false, false, 0xFF, 0x94, 0x53)),
    ("crc-8-hitag", Template::new(8, 0x1D, 0xFF, false, false, 0x00, 0xB4, 0x00)),
    ("crc-8-i-432-1", Template::new(8, 0x07, 0x00, false, false, 0x55, 0xA1, 0xAC)),
    ("crc-8-i-code", Template::new(8, 0x1D, 0xFD, false, false, 0x00, 0x7E, 0x00)),
    ("crc-8-lte", Template::new(8, 0x9B, 0x00, false, false, 0x00, 0xEA, 0x00)),
    ("crc-8-maxim-dow", Template::new(8, 0x31, 0x00, true, true, 0x00, 0xA1, 0x00)),
    ("crc-8-mifare-mad", Template::new(8, 0x1D, 0xC7, false, false, 0x00, 0x99, 0x00)),
    ("crc-8-nrsc-5", Template::new(8, 0x31, 0xFF, false, false, 0x00, 0xF7, 0x00)),
    ("crc-8-opensafety", Template::new(8, 0x2F, 0x00, false, false, 0x00, 0x3E, 0x00)),
    ("crc-8-rohc", Template::new(8, 0x07, 0xFF, true, true, 0x00, 0xD0, 0x00)),
    ("crc-8-sae-j1850", Template::new(8, 0x1D, 0xFF, false, false, 0xFF, 0x4B, 0xC4)),
    ("crc-8-smbus", Template::new(8, 0x07, 0x00, false, false, 0x00, 0xF4, 0x00)),
    ("crc-8-tech-3250", Template::new(8, 0x1D, 0xFF, true, true, 0x00, 0x97, 0x00)),
    ("crc-8-wcdma", Template::new(8, 0x9B, 0x00, true, true, 0x00, 0x25, 0x00)),
];

/// Alias map, sorted by alias; every canonical name aliases itself.
#[rustfmt::skip]
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("arc", "crc-16-arc"),
    ("b-crc-32", "crc-32-bzip2"),
    ("cksum", "crc-32-cksum"),
    ("crc-10", "crc-10-atm"),
    ("crc-10-atm", "crc-10-atm"),
    ("crc-10-cdma2000", "crc-10-cdma2000"),
    ("crc-10-gsm", "crc-10-gsm"),
    ("crc-10-i-610", "crc-10-atm"),
    ("crc-11", "crc-11-flexray"),
    ("crc-11-flexray", "crc-11-flexray"),
    ("crc-11-umts", "crc-11-umts"),
    ("crc-12-3gpp", "crc-12-umts"),
    ("crc-12-cdma2000", "crc-12-cdma2000"),
    ("crc-12-dect", "crc-12-dect"),
    ("crc-12-gsm", "crc-12-gsm"),
    ("crc-12-umts", "crc-12-umts"),
    ("crc-13-bbc", "crc-13-bbc"),
    ("crc-14-darc", "crc-14-darc"),
    ("crc-14-gsm", "crc-14-gsm"),
    ("crc-15", "crc-15-can"),
    ("crc-15-can", "crc-15-can"),
    ("crc-15-mpt1327", "crc-15-mpt1327"),
    ("crc-16", "crc-16-arc"),
    ("crc-16-acorn", "crc-16-xmodem"),
    ("crc-16-arc", "crc-16-arc"),
    ("crc-16-aug-ccitt", "crc-16-spi-fujitsu"),
    ("crc-16-autosar", "crc-16-ibm-3740"),
    ("crc-16-bluetooth", "crc-16-kermit"),
    ("crc-16-buypass", "crc-16-umts"),
    ("crc-16-ccitt", "crc-16-kermit"),
    ("crc-16-ccitt-false", "crc-16-ibm-3740"),
    ("crc-16-ccitt-true", "crc-16-kermit"),
    ("crc-16-cdma2000", "crc-16-cdma2000"),
    ("crc-16-cms", "crc-16-cms"),
    ("crc-16-darc", "crc-16-genibus"),
    ("crc-16-dds-110", "crc-16-dds-110"),
    ("crc-16-dect-r", "crc-16-dect-r"),
    ("crc-16-dect-x", "crc-16-dect-x"),
    ("crc-16-dnp", "crc-16-dnp"),
    ("crc-16-en-13757", "crc-16-en-13757"),
    ("crc-16-epc", "crc-16-genibus"),
    ("crc-16-epc-c1g2", "crc-16-genibus"),
    ("crc-16-genibus", "crc-16-genibus"),
    ("crc-16-gsm", "crc-16-gsm"),
    ("crc-16-i-code", "crc-16-genibus"),
    ("crc-16-ibm-3740", "crc-16-ibm-3740"),
    ("crc-16-ibm-sdlc", "crc-16-ibm-sdlc"),
    ("crc-16-iec-61158-2", "crc-16-profibus"),
    ("crc-16-iso-hdlc", "crc-16-ibm-sdlc"),
    ("crc-16-iso-iec-14443-3-a", "crc-16-iso-iec-14443-3-a"),
    ("crc-16-iso-iec-14443-3-b", "crc-16-ibm-sdlc"),
    ("crc-16-kermit", "crc-16-kermit"),
    ("crc-16-lha", "crc-16-arc"),
    ("crc-16-lj1200", "crc-16-lj1200"),
    ("crc-16-lte", "crc-16-xmodem"),
    ("crc-16-m17", "crc-16-m17"),
    ("crc-16-maxim", "crc-16-maxim-dow"),
    ("crc-16-maxim-dow", "crc-16-maxim-dow"),
    ("crc-16-mcrf4xx", "crc-16-mcrf4xx"),
    ("crc-16-modbus", "crc-16-modbus"),
    ("crc-16-nrsc-5", "crc-16-nrsc-5"),
    ("crc-16-opensafety-a", "crc-16-opensafety-a"),
    ("crc-16-opensafety-b", "crc-16-opensafety-b"),
    ("crc-16-profibus", "crc-16-profibus"),
    ("crc-16-riello", "crc-16-riello"),
    ("crc-16-spi-fujitsu", "crc-16-spi-fujitsu"),
    ("crc-16-t10-dif", "crc-16-t10-dif"),
    ("crc-16-teledisk", "crc-16-teledisk"),
    ("crc-16-tms37157", "crc-16-tms37157"),
    ("crc-16-umts", "crc-16-umts"),
    ("crc-16-usb", "crc-16-usb"),
    ("crc-16-v-41-lsb", "crc-16-kermit"),
    ("crc-16-v-41-msb", "crc-16-xmodem"),
    ("crc-16-verifone", "crc-16-umts"),
    ("crc-16-x-25", "crc-16-ibm-sdlc"),
    ("crc-16-xmodem", "crc-16-xmodem"),
    ("crc-17-can-fd", "crc-17-can-fd"),
    ("crc-21-can-fd", "crc-21-can-fd"),
    ("crc-24", "crc-24-openpgp"),
    ("crc-24-ble", "crc-24-ble"),
    ("crc-24-flexray-a", "crc-24-flexray-a"),
    ("crc-24-flexray-b", "crc-24-flexray-b"),
    ("crc-24-interlaken", "crc-24-interlaken"),
    ("crc-24-lte-a", "crc-24-lte-a"),
    ("crc-24-lte-b", "crc-24-lte-b"),
    ("crc-24-openpgp", "crc-24-openpgp"),
    ("crc-24-os-9", "crc-24-os-9"),
    ("crc-3-gsm", "crc-3-gsm"),
    ("crc-3-rohc", "crc-3-rohc"),
    ("crc-30-cdma", "crc-30-cdma"),
    ("crc-31-philips", "crc-31-philips"),
    ("crc-32", "crc-32-iso-hdlc"),
    ("crc-32-aal5", "crc-32-bzip2"),
    ("crc-32-adccp", "crc-32-iso-hdlc"),
    ("crc-32-aixm", "crc-32-aixm"),
    ("crc-32-autosar", "crc-32-autosar"),
    ("crc-32-base91-c", "crc-32-iscsi"),
    ("crc-32-base91-d", "crc-32-base91-d"),
    ("crc-32-bzip2", "crc-32-bzip2"),
    ("crc-32-castagnoli", "crc-32-iscsi"),
    ("crc-32-cd-rom-edc", "crc-32-cd-rom-edc"),
    ("crc-32-cksum", "crc-32-cksum"),
    ("crc-32-dect-b", "crc-32-bzip2"),
    ("crc-32-interlaken", "crc-32-iscsi"),
    ("crc-32-iscsi", "crc-32-iscsi"),
    ("crc-32-iso-hdlc", "crc-32-iso-hdlc"),
    ("crc-32-jamcrc", "crc-32-jamcrc"),
    ("crc-32-mef", "crc-32-mef"),
    ("crc-32-mpeg-2", "crc-32-mpeg-2"),
    ("crc-32-nvme", "crc-32-iscsi"),
    ("crc-32-posix", "crc-32-cksum"),
    ("crc-32-v-42", "crc-32-iso-hdlc"),
    ("crc-32-xfer", "crc-32-xfer"),
    ("crc-32-xz", "crc-32-iso-hdlc"),
    ("crc-32c", "crc-32-iscsi"),
    ("crc-32d", "crc-32-base91-d"),
    ("crc-32q", "crc-32-aixm"),
    ("crc-4-g-704", "crc-4-g-704"),
    ("crc-4-interlaken", "crc-4-interlaken"),
    ("crc-4-itu", "crc-4-g-704"),
    ("crc-40-gsm", "crc-40-gsm"),
    ("crc-5-epc", "crc-5-epc-c1g2"),
    ("crc-5-epc-c1g2", "crc-5-epc-c1g2"),
    ("crc-5-g-704", "crc-5-g-704"),
    ("crc-5-itu", "crc-5-g-704"),
    ("crc-5-usb", "crc-5-usb"),
    ("crc-6-cdma2000-a", "crc-6-cdma2000-a"),
    ("crc-6-cdma2000-b", "crc-6-cdma2000-b"),
    ("crc-6-darc", "crc-6-darc"),
    ("crc-6-g-704", "crc-6-g-704"),
    ("crc-6-gsm", "crc-6-gsm"),
    ("crc-6-itu", "crc-6-g-704"),
    ("crc-64", "crc-64-ecma-182"),
    ("crc-64-ecma-182", "crc-64-ecma-182"),
    ("crc-64-go-ecma", "crc-64-xz"),
    ("crc-64-go-iso", "crc-64-go-iso"),
    ("crc-64-ms", "crc-64-ms"),
    ("crc-64-nvme", "crc-64-nvme"),
    ("crc-64-redis", "crc-64-redis"),
    ("crc-64-we", "crc-64-we"),
    ("crc-64-xz", "crc-64-xz"),
    ("crc-7", "crc-7-mmc"),
    ("crc-7-mmc", "crc-7-mmc"),
    ("crc-7-rohc", "crc-7-rohc"),
    ("crc-7-umts", "crc-7-umts"),
    ("crc-8", "crc-8-smbus"),
    ("crc-8-aes", "crc-8-tech-3250"),
    ("crc-8-autosar", "crc-8-autosar"),
    ("crc-8-bluetooth", "crc-8-bluetooth"),
    ("crc-8-cdma2000", "crc-8-cdma2000"),
    ("crc-8-darc", "crc-8-darc"),
    ("crc-8-dvb-s2", "crc-8-dvb-s2"),
    ("crc-8-ebu", "crc-8-tech-3250"),
    ("crc-8-gsm-a", "crc-8-gsm-a"),
    ("crc-8-gsm-b", "crc-8-gsm-b"),
    ("crc-8-hitag", "crc-8-hitag"),
    ("crc-8-i-432-1", "crc-8-i-432-1"),
    ("crc-8-i-code", "crc-8-i-code"),
    ("crc-8-itu", "crc-8-i-432-1"),
    ("crc-8-lte", "crc-8-lte"),
    ("crc-8-maxim", "crc-8-maxim-dow"),
    ("crc-8-maxim-dow", "crc-8-maxim-dow"),
    ("crc-8-mifare-mad", "crc-8-mifare-mad"),
    ("crc-8-nrsc-5", "crc-8-nrsc-5"),
    ("crc-8-opensafety", "crc-8-opensafety"),
    ("crc-8-rohc", "crc-8-rohc"),
    ("crc-8-sae-j1850", "crc-8-sae-j1850"),
    ("crc-8-smbus", "crc-8-smbus"),
    ("crc-8-tech-3250", "crc-8-tech-3250"),
    ("crc-8-wcdma", "crc-8-wcdma"),
    ("crc-a", "crc-16-iso-iec-14443-3-a"),
    ("crc-b", "crc-16-ibm-sdlc"),
    ("crc-ccitt", "crc-16-kermit"),
    ("crc-ibm", "crc-16-arc"),
    ("dow-crc", "crc-8-maxim-dow"),
    ("jamcrc", "crc-32-jamcrc"),
    ("kermit", "crc-16-kermit"),
    ("modbus", "crc-16-modbus"),
    ("pkzip", "crc-32-iso-hdlc"),
    ("r-crc-16", "crc-16-dect-r"),
    ("x-25", "crc-16-ibm-sdlc"),
    ("x-crc-12", "crc-12-dect"),
    ("x-crc-16", "crc-16-dect-x"),
    ("xfer", "crc-32-xfer"),
    ("xmodem", "crc-16-xmodem"),
    ("zmodem", "crc-16-xmodem"),
];

fn lookup(canonical: &str) -> Option<&'static Template> {
    TEMPLATES
        .binary_search_by(|(name, _)| (*name).cmp(canonical))
        .ok()
        .map(|index| &TEMPLATES[index].1)
}

/// Resolve a template name or alias, case-insensitively.
///
/// # Examples
///
/// ```
/// let template = crckit::resolve("KERMIT")?;
/// assert_eq!(template.poly, 0x1021);
/// assert!(template.refin);
/// # Ok::<(), crckit::Error>(())
/// ```
pub fn resolve(name: &str) -> Result<&'static Template> {
    let key = name.to_ascii_lowercase();
    ALIASES
        .binary_search_by(|(alias, _)| (*alias).cmp(key.as_str()))
        .ok()
        .and_then(|index| lookup(ALIASES[index].1))
        .ok_or_else(|| Error::UnknownTemplate(name.to_owned()))
}

/// Every known alias with the computational parameters it resolves to.
///
/// Yields in alias order; multiple aliases may carry identical parameters.
pub fn templates_available() -> impl Iterator<Item = (&'static str, Params)> {
    ALIASES
        .iter()
        .filter_map(|(alias, canonical)| lookup(canonical).map(|template| (*alias, template.params())))
}
