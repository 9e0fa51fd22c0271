//! scribe32 - checksummed base32 lines for transcribing binary data by hand
//!
//! Input bytes are cut into 16-byte chunks. Each chunk is prefixed with its
//! CRC-32, encoded as padded base32 and written as one line, split into
//! groups of four characters so it can be read aloud or typed from paper.
//! Decoding strips the spaces, checks every line's CRC and stops at the
//! first line that doesn't verify.
//!
//! # Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let mut text = Vec::new();
//! scribe32::encode(&mut Cursor::new(b"Hello, paper!"), &mut text)?;
//!
//! let mut bytes = Vec::new();
//! scribe32::decode(&mut Cursor::new(text), &mut bytes)?;
//! assert_eq!(bytes, b"Hello, paper!");
//! # Ok::<(), scribe32::Error>(())
//! ```
//!
//! # Line Format
//!
//! ```text
//! [CRC-32 LE (4)] [chunk (1..=16)] -> base32 with '=' padding -> "XXXX XXXX ... XXXX\n"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod io;
pub mod protocol;
pub mod stream;

pub use protocol::{
    CHECKSUM_SIZE, CHUNK_SIZE, Error, Frame, FrameError, GROUP_SIZE, IoOp, Result, decode_line,
    encode_line,
};
pub use stream::{Decoder, Encoder, Summary, decode, encode, fill};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
