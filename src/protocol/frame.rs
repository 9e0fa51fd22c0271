//! scribe32 frame
//!
//! A frame is the unit carried by one text line.

use bytes::{BufMut, Bytes, BytesMut};

use super::{CHECKSUM_SIZE, CHUNK_SIZE, FrameError, MIN_FRAME_SIZE, checksum};

/// Checksummed chunk of input bytes
///
/// # Wire Format
///
/// ```text
/// +-------------------------+---------------------------+
/// | CRC-32 of payload (4 LE) | payload (1..=16 bytes)   |
/// +-------------------------+---------------------------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    checksum: u32,
    payload: Bytes,
}

impl Frame {
    /// Build a frame around a chunk, computing its checksum
    pub fn seal(chunk: &[u8]) -> Result<Self, FrameError> {
        if chunk.is_empty() || chunk.len() > CHUNK_SIZE {
            return Err(FrameError::InvalidChunk { len: chunk.len() });
        }

        Ok(Self {
            checksum: checksum(chunk),
            payload: Bytes::copy_from_slice(chunk),
        })
    }

    /// Split decoded line bytes into checksum and payload, verifying the checksum
    pub fn open(bytes: Bytes) -> Result<Self, FrameError> {
        if bytes.len() < MIN_FRAME_SIZE {
            return Err(FrameError::TooShort { len: bytes.len() });
        }

        let mut stored = [0u8; CHECKSUM_SIZE];
        stored.copy_from_slice(&bytes[..CHECKSUM_SIZE]);
        let found = u32::from_le_bytes(stored);

        let payload = bytes.slice(CHECKSUM_SIZE..);
        let expected = checksum(&payload);
        if found != expected {
            return Err(FrameError::ChecksumMismatch { expected, found });
        }

        Ok(Self {
            checksum: found,
            payload,
        })
    }

    /// Serialize as `checksum (LE) ++ payload`
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(self.len());
        buf.put_u32_le(self.checksum);
        buf.put_slice(&self.payload);
        buf.to_vec()
    }

    /// Stored checksum
    #[must_use]
    pub const fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Payload bytes
    #[must_use]
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Take the payload out of the frame
    #[must_use]
    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// Frame length in bytes, checksum included
    #[must_use]
    pub fn len(&self) -> usize {
        CHECKSUM_SIZE + self.payload.len()
    }

    /// Always false: a frame carries at least one payload byte
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::MAX_FRAME_SIZE;

    #[test]
    fn test_seal_layout() {
        let frame = Frame::seal(b"123456789").unwrap();
        let bytes = frame.to_bytes();

        assert_eq!(bytes.len(), 13);
        assert_eq!(&bytes[..4], &0xCBF4_3926_u32.to_le_bytes());
        assert_eq!(&bytes[4..], b"123456789");
    }

    #[test]
    fn test_seal_rejects_empty_and_oversized() {
        assert_eq!(Frame::seal(&[]), Err(FrameError::InvalidChunk { len: 0 }));
        assert_eq!(
            Frame::seal(&[0u8; CHUNK_SIZE + 1]),
            Err(FrameError::InvalidChunk { len: 17 })
        );
        assert_eq!(Frame::seal(&[0u8; CHUNK_SIZE]).unwrap().len(), MAX_FRAME_SIZE);
    }

    #[test]
    fn test_open_roundtrip() {
        let frame = Frame::seal(&[0xAB]).unwrap();
        let opened = Frame::open(Bytes::from(frame.to_bytes())).unwrap();

        assert_eq!(opened, frame);
        assert_eq!(opened.len(), MIN_FRAME_SIZE);
        assert!(!opened.is_empty());
    }

    #[test]
    fn test_open_too_short() {
        for len in 0..MIN_FRAME_SIZE {
            let result = Frame::open(Bytes::from(vec![0u8; len]));
            assert_eq!(result, Err(FrameError::TooShort { len }));
        }
    }

    #[test]
    fn test_open_checksum_mismatch() {
        let mut bytes = Frame::seal(b"hello").unwrap().to_bytes();
        bytes[0] ^= 0x01;

        let result = Frame::open(Bytes::from(bytes));
        assert!(matches!(result, Err(FrameError::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_open_accepts_oversized_frame() {
        let payload = [7u8; 40];
        let mut bytes = checksum(&payload).to_le_bytes().to_vec();
        bytes.extend_from_slice(&payload);

        let frame = Frame::open(Bytes::from(bytes)).unwrap();
        assert_eq!(frame.payload().len(), 40);
    }
}
