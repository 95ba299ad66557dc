extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;

// CRC-32/ITU shares every parameter with CRC-32/BZIP2.
const ORACLE: CrcAlgorithm = CrcAlgorithm::Crc32Bzip2;

proptest! {
  #[test]
  fn crc32_itu_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc32Itu::checksum(&data);
    let reference = crate::common::reference::crc32_itu_reference(0, &data);
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn portable_kernels_agree(data in proptest::collection::vec(any::<u8>(), 0..=1024), init in any::<u32>()) {
    let bytewise = portable::crc32_itu_bytewise(init, &data);
    prop_assert_eq!(portable::crc32_itu_slice8(init, &data), bytewise);
    prop_assert_eq!(portable::crc32_itu_reference(init, &data), bytewise);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_itu_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc32Itu::checksum(&data);
    let reference = crc_fast::checksum(ORACLE, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc32_itu_streaming_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc32Itu::new();
    let mut reference = crc_fast::Digest::new(ORACLE);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u32);
  }

  #[test]
  fn crc32_itu_combine_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let crc_a = Crc32Itu::checksum(a);
    let crc_b = Crc32Itu::checksum(b);
    let combined = Crc32Itu::combine(crc_a, crc_b, b.len());

    let ref_crc_a = crc_fast::checksum(ORACLE, a);
    let ref_crc_b = crc_fast::checksum(ORACLE, b);
    let ref_combined = crc_fast::checksum_combine(ORACLE, ref_crc_a, ref_crc_b, b.len() as u64) as u32;

    prop_assert_eq!(combined, ref_combined);
    prop_assert_eq!(combined, Crc32Itu::checksum(&data));
  }

  #[test]
  fn crc32_itu_trailer_leaves_residue(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let mut frame: Vec<u8> = data.clone();
    frame.extend_from_slice(&Crc32Itu::checksum(&data).to_be_bytes());
    prop_assert_eq!(Crc32Itu::checksum(&frame), crate::constants::RESIDUE);
  }
}
