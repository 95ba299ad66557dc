//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and checksum exactly the bytes that pass
//! through them, so short reads and short writes are accounted for.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use crc32itu::{Checksum, Crc32Itu};
//!
//! let mut reader = Crc32Itu::reader(Cursor::new(b"123456789".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.crc(), 0xFC89_1918);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Writing frames with a trailer:
//!
//! ```rust
//! use std::io::Write;
//!
//! use crc32itu::{Checksum, Crc32Itu, constants::RESIDUE};
//!
//! let mut writer = Crc32Itu::writer(Vec::new());
//! writer.write_all(b"payload")?;
//! let (mut frame, crc) = writer.into_parts();
//! frame.extend_from_slice(&crc.to_be_bytes());
//! assert_eq!(crc32itu::checksum(&frame), RESIDUE);
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
