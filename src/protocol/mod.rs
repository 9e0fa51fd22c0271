//! scribe32 wire format
//!
//! This module provides the frame layout, the text alphabet, visual grouping,
//! and the per-line codec shared by the encoder and the decoder.

mod checksum;
mod codec;
mod error;
mod frame;
mod grouping;
mod text;

pub use checksum::checksum;
pub use codec::{decode_line, encode_line};
pub use error::{Error, FrameError, IoOp, Result};
pub use frame::Frame;
pub use grouping::{group, strip_separators};
pub use text::{decode_text, encode_text};

/// Raw bytes carried by one line (the last line may carry fewer)
pub const CHUNK_SIZE: usize = 16;

/// Checksum size in bytes (little-endian CRC-32)
pub const CHECKSUM_SIZE: usize = 4;

/// Encoded characters per visual group
pub const GROUP_SIZE: usize = 4;

/// Character inserted between visual groups
pub const GROUP_SEPARATOR: u8 = b' ';

/// Smallest valid frame (checksum + one payload byte)
pub const MIN_FRAME_SIZE: usize = CHECKSUM_SIZE + 1;

/// Largest frame the encoder produces (checksum + full chunk)
pub const MAX_FRAME_SIZE: usize = CHECKSUM_SIZE + CHUNK_SIZE;

/// Base32 characters of a full frame, padding included
pub const MAX_LINE_CHARS: usize = MAX_FRAME_SIZE.div_ceil(5) * 8;

/// Characters of a full grouped line, separators included
pub const MAX_GROUPED_LINE_CHARS: usize = MAX_LINE_CHARS + MAX_LINE_CHARS / GROUP_SIZE - 1;
