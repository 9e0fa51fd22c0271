//! scribe32 error types

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or opening a single frame
///
/// These carry no line number; the decoder lifts them into [`Error`] with
/// [`FrameError::at_line`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Chunk length outside `1..=CHUNK_SIZE`
    #[error("invalid chunk length: {len} bytes")]
    InvalidChunk {
        /// Offending length
        len: usize,
    },

    /// Text is not valid base32 (bad symbol, length or padding)
    #[error("malformed text: {0}")]
    MalformedText(#[from] data_encoding::DecodeError),

    /// Decoded frame too short to hold a checksum and a payload byte
    #[error("frame too short: {len} bytes")]
    TooShort {
        /// Decoded length
        len: usize,
    },

    /// Stored checksum differs from the payload's CRC-32
    #[error("checksum mismatch: expected {expected:#010x}, got {found:#010x}")]
    ChecksumMismatch {
        /// CRC-32 recomputed over the payload
        expected: u32,
        /// Checksum stored in the frame
        found: u32,
    },
}

impl FrameError {
    /// Tag this error with the 1-based line it occurred on
    #[must_use]
    pub fn at_line(self, line: usize) -> Error {
        match self {
            Self::InvalidChunk { len } => Error::InvalidChunk { len },
            Self::MalformedText(source) => Error::MalformedText { line, source },
            Self::TooShort { len } => Error::ShortFrame { line, len },
            Self::ChecksumMismatch { expected, found } => Error::ChecksumMismatch {
                line,
                expected,
                found,
            },
        }
    }
}

/// Stream operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    /// Reading from the byte source
    Read,
    /// Writing to the byte sink
    Write,
    /// Flushing the byte sink
    Flush,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
            Self::Flush => f.write_str("flush"),
        }
    }
}

/// scribe32 errors
///
/// Every variant is fatal: the pipelines stop at the first one.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened
    #[error("can't open input file {path:?}: {source}")]
    Open {
        /// Requested path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Output file could not be created
    #[error("can't open output file {path:?}: {source}")]
    Create {
        /// Requested path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Read, write or flush failure on an open stream
    #[error("{op} error: {source}")]
    Io {
        /// Failing operation
        op: IoOp,
        /// Underlying error
        source: io::Error,
    },

    /// Line is not valid base32 once separators are stripped
    #[error("decode error: line {line}: {source}")]
    MalformedText {
        /// 1-based line number
        line: usize,
        /// Underlying decode error
        source: data_encoding::DecodeError,
    },

    /// Line decodes to fewer bytes than a minimal frame
    #[error("line {line} is too short: {len} bytes")]
    ShortFrame {
        /// 1-based line number
        line: usize,
        /// Decoded length
        len: usize,
    },

    /// Line failed its checksum
    #[error("input error at line {line}: checksum expected {expected:#010x}, got {found:#010x}")]
    ChecksumMismatch {
        /// 1-based line number
        line: usize,
        /// CRC-32 recomputed over the payload
        expected: u32,
        /// Checksum stored in the line
        found: u32,
    },

    /// Chunk handed to the encoder has an invalid length
    #[error("invalid chunk length: {len} bytes")]
    InvalidChunk {
        /// Offending length
        len: usize,
    },
}

impl Error {
    pub(crate) fn io(op: IoOp) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Io { op, source }
    }

    /// Line number the error is tagged with, if any
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedText { line, .. }
            | Self::ShortFrame { line, .. }
            | Self::ChecksumMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
