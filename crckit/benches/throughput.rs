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
use std::sync::OnceLock;

use crckit::Crc;
use crckit::Method;
use divan::counter::BytesCount;
use divan::{black_box, Bencher};

fn main() {
    divan::main();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DatasetSpec {
    label: &'static str,
    size: usize,
}

impl DatasetSpec {
    const fn new(label: &'static str, size: usize) -> Self {
        Self { label, size }
    }
}

impl fmt::Display for DatasetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const DATASET_SPEC_LIST: [DatasetSpec; 3] = [
    DatasetSpec::new(" 64B", 64),
    DatasetSpec::new("4KiB", 4 * 1024),
    DatasetSpec::new("4MiB", 4 * 1024 * 1024),
];

const DATASET_SPECS: &[DatasetSpec] = &DATASET_SPEC_LIST;

struct DatasetStorage {
    spec: DatasetSpec,
    data: OnceLock<Box<[u8]>>,
}

impl DatasetStorage {
    const fn new(spec: DatasetSpec) -> Self {
        Self {
            spec,
            data: OnceLock::new(),
        }
    }

    fn payload(&'static self) -> &'static [u8] {
        self.data
            .get_or_init(|| generate_payload(self.spec.size).into_boxed_slice())
            .as_ref()
    }
}

static DATASET_STORAGE: [DatasetStorage; 3] = [
    DatasetStorage::new(DATASET_SPEC_LIST[0]),
    DatasetStorage::new(DATASET_SPEC_LIST[1]),
    DatasetStorage::new(DATASET_SPEC_LIST[2]),
];

macro_rules! register_engine_bench {
    ($fn_name:ident, $template:literal, $method:expr, $name:literal) => {
        #[divan::bench(name = $name, args = DATASET_SPECS)]
        fn $fn_name(bencher: Bencher, dataset: DatasetSpec) {
            bench_engine(bencher, dataset, $template, $method);
        }
    };
}

register_engine_bench!(bench_crc32_bytewise, "crc-32", Method::Bytewise, "crc32/bytewise");
register_engine_bench!(bench_crc32_wordwise, "crc-32", Method::Wordwise, "crc32/wordwise");
register_engine_bench!(bench_crc64_bytewise, "crc-64-xz", Method::Bytewise, "crc64-xz/bytewise");
register_engine_bench!(bench_crc64_wordwise, "crc-64-xz", Method::Wordwise, "crc64-xz/wordwise");
register_engine_bench!(bench_xmodem_bytewise, "xmodem", Method::Bytewise, "xmodem/bytewise");
register_engine_bench!(bench_xmodem_wordwise, "xmodem", Method::Wordwise, "xmodem/wordwise");

fn bench_engine(bencher: Bencher, dataset: DatasetSpec, template: &str, method: Method) {
    let payload = dataset_payload(dataset);
    let engine = Crc::builder()
        .name(template)
        .method(method)
        .build()
        .unwrap_or_else(|e| panic!("unknown template {template}: {e}"));
    bencher
        .counter(BytesCount::from(payload.len() as u64))
        .bench(|| {
            let mut crc = engine.clone();
            crc.update(payload);
            black_box(crc.value());
        });
}

fn dataset_payload(spec: DatasetSpec) -> &'static [u8] {
    DATASET_STORAGE
        .iter()
        .find(|storage| storage.spec == spec)
        .unwrap_or_else(|| panic!("unknown dataset: {}", spec.label))
        .payload()
}

fn generate_payload(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = 0x1234_5678u64;
    for _ in 0..size {
        state ^= state << 7;
        state ^= state >> 9;
        state ^= state << 8;
        data.push((state & 0xFF) as u8);
    }
    data
}
