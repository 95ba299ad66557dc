//! Fuzz target for combine.
//!
//! Folding the CRCs of arbitrary chunks with `combine` must give the CRC of the whole.

#![no_main]

use arbitrary::Arbitrary;
use crc32itu::{ChecksumCombine, Crc32Itu};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.push(data.len());

  let mut combined = 0u32;
  let mut prev = 0;
  for split in splits {
    let chunk = &data[prev..split];
    combined = Crc32Itu::combine(combined, crc32itu::checksum(chunk), chunk.len());
    prev = split;
  }

  assert_eq!(combined, crc32itu::checksum(data), "combine chain mismatch, len={}", data.len());
});
