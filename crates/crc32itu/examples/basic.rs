//! Checksum stdin (or a built-in sample) and print the result.
//!
//! ```text
//! cargo run -p crc32itu --example basic < frame.bin
//! CRC32ITU_FORCE=bitwise cargo run -p crc32itu --example basic
//! ```

use std::io::{self, IsTerminal, Read};

use crc32itu::{Checksum, ChecksumCombine, Crc32Itu, Hash32};

fn main() -> io::Result<()> {
  let stdin = io::stdin();
  let data = if stdin.is_terminal() {
    b"123456789".to_vec()
  } else {
    let mut buf = Vec::new();
    stdin.lock().read_to_end(&mut buf)?;
    buf
  };

  let mut h = crc32itu::new();
  h.append(&data);
  let crc = h.sum32();

  eprintln!("kernel: {} ({:?})", Crc32Itu::backend_name(), Crc32Itu::config().effective_force);
  println!("{crc:08x}  ({} bytes)", data.len());

  // Split in halves and recombine.
  let (a, b) = data.split_at(data.len() / 2);
  let combined = Crc32Itu::combine(Crc32Itu::checksum(a), Crc32Itu::checksum(b), b.len());
  assert_eq!(combined, crc);

  // Frame with a big-endian trailer checks to the residue.
  let frame = h.sum(&data);
  println!("frame residue: {:08x}", crc32itu::checksum(&frame));
  Ok(())
}
