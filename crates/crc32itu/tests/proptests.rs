//! Streaming accumulator properties.

// Proptest uses getcwd() which fails under Miri isolation.
#![cfg(not(miri))]

use crc32itu::{Checksum, ChecksumCombine, Crc32Itu, Hash32};
use proptest::prelude::*;

proptest! {
  #[test]
  fn chunking_is_irrelevant(data in proptest::collection::vec(any::<u8>(), 0..=2048), cuts in proptest::collection::vec(any::<usize>(), 0..8)) {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
    points.sort_unstable();

    let mut h = crc32itu::new();
    let mut start = 0;
    for end in points {
      prop_assert_eq!(h.append(&data[start..end]), end - start);
      start = end;
    }
    h.append(&data[start..]);

    prop_assert_eq!(h.sum32(), crc32itu::checksum(&data));
  }

  #[test]
  fn update_chains(a in proptest::collection::vec(any::<u8>(), 0..=512), b in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let joined: Vec<u8> = a.iter().chain(&b).copied().collect();
    prop_assert_eq!(crc32itu::update(crc32itu::checksum(&a), &b), crc32itu::checksum(&joined));
    prop_assert_eq!(crc32itu::update(0, &a), crc32itu::checksum(&a));
  }

  #[test]
  fn reset_forgets_history(junk in proptest::collection::vec(any::<u8>(), 0..=256), data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let mut h = crc32itu::new();
    h.append(&junk);
    h.reset();
    prop_assert_eq!(h.sum32(), 0);
    h.append(&data);
    prop_assert_eq!(h.sum32(), crc32itu::checksum(&data));
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn sum_is_pure(data in proptest::collection::vec(any::<u8>(), 0..=256), prefix in proptest::collection::vec(any::<u8>(), 0..=16)) {
    let mut h = crc32itu::new();
    h.append(&data);

    let first = h.sum(&prefix);
    let second = h.sum(&prefix);
    prop_assert_eq!(&first, &second);
    prop_assert_eq!(first.len(), prefix.len() + 4);
    prop_assert_eq!(&first[..prefix.len()], &prefix[..]);
    prop_assert_eq!(&first[prefix.len()..], &h.sum32().to_be_bytes()[..]);
    prop_assert_eq!(h.sum32(), h.sum32());

    // Reading does not disturb further appends.
    h.append(b"tail");
    let joined: Vec<u8> = data.iter().chain(b"tail").copied().collect();
    prop_assert_eq!(h.sum32(), crc32itu::checksum(&joined));
  }

  #[test]
  fn resume_continues(a in proptest::collection::vec(any::<u8>(), 0..=512), b in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let mut h = Crc32Itu::resume(crc32itu::checksum(&a));
    h.update(&b);
    prop_assert_eq!(h.finalize(), crc32itu::update(crc32itu::checksum(&a), &b));
  }

  #[test]
  fn combine_matches_concat(a in proptest::collection::vec(any::<u8>(), 0..=1024), b in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let joined: Vec<u8> = a.iter().chain(&b).copied().collect();
    let combined = Crc32Itu::combine(crc32itu::checksum(&a), crc32itu::checksum(&b), b.len());
    prop_assert_eq!(combined, crc32itu::checksum(&joined));
  }

  #[test]
  fn vectored_matches_contiguous(parts in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..=64), 0..8)) {
    let bufs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
    let joined = parts.concat();
    prop_assert_eq!(Crc32Itu::checksum_vectored(&bufs), crc32itu::checksum(&joined));
  }

  #[test]
  fn verify_accepts_only_the_right_value(data in proptest::collection::vec(any::<u8>(), 0..=256), flip in any::<u32>()) {
    let crc = crc32itu::checksum(&data);
    prop_assert!(Crc32Itu::verify(&data, crc).is_ok());
    prop_assume!(flip != 0);
    let err = Crc32Itu::verify(&data, crc ^ flip).unwrap_err();
    prop_assert_eq!(err.expected(), crc ^ flip);
    prop_assert_eq!(err.actual(), crc);
  }
}
