//! Differential fuzzing of every kernel against the bitwise reference.

#![no_main]

use arbitrary::Arbitrary;
use crc32itu::__internal::{crc32_itu_bitwise, crc32_itu_bytewise, crc32_itu_reference, crc32_itu_slice8};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  prior: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Input { prior, data } = input;
  let reference = crc32_itu_reference(prior, &data);

  let ours = crc32itu::update(prior, &data);
  assert_eq!(
    ours,
    reference,
    "dispatch mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  for (name, kernel) in [
    ("bitwise", crc32_itu_bitwise as fn(u32, &[u8]) -> u32),
    ("bytewise", crc32_itu_bytewise),
    ("slice8", crc32_itu_slice8),
  ] {
    assert_eq!(kernel(!prior, &data), !reference, "{name} kernel mismatch, len={}", data.len());
  }
});
