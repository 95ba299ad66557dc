//! Fuzz target for the streaming accumulator.
//!
//! Arbitrary sequences of appends, reads and resets must agree with one-shot results.

#![no_main]

use arbitrary::Arbitrary;
use crc32itu::{Checksum, Crc32Itu, Hash32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
  Append(Vec<u8>),
  Sum(Vec<u8>),
  Reset,
  Resume,
}

fuzz_target!(|ops: Vec<Op>| {
  let mut hasher = crc32itu::new();
  // Everything appended since the last reset.
  let mut seen = Vec::new();

  for op in ops {
    match op {
      Op::Append(data) => {
        assert_eq!(hasher.append(&data), data.len());
        seen.extend_from_slice(&data);
      }
      Op::Sum(prefix) => {
        let out = hasher.sum(&prefix);
        assert_eq!(out.len(), prefix.len() + 4);
        assert_eq!(&out[..prefix.len()], &prefix[..]);
        assert_eq!(&out[prefix.len()..], &hasher.sum32().to_be_bytes()[..]);
      }
      Op::Reset => {
        hasher.reset();
        seen.clear();
        assert_eq!(hasher.sum32(), 0);
      }
      Op::Resume => {
        hasher = Crc32Itu::resume(hasher.sum32());
      }
    }

    assert_eq!(hasher.sum32(), crc32itu::checksum(&seen), "streaming mismatch");
  }
});
