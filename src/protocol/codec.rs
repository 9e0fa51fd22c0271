//! scribe32 line codec (encode/decode)
//!
//! This module turns one chunk into one grouped text line and back.

use bytes::Bytes;

use super::{Frame, FrameError, decode_text, encode_text, group, strip_separators};

/// Encode a chunk to one grouped text line
///
/// # Format
///
/// ```text
/// chunk -> [CRC-32 LE (4)] [chunk (1..=16)] -> base32 -> "XXXX XXXX ... XXXX"
/// ```
///
/// The returned line has no terminator.
///
/// # Errors
///
/// Returns [`FrameError::InvalidChunk`] if the chunk is empty or longer than
/// `CHUNK_SIZE`.
pub fn encode_line(chunk: &[u8]) -> Result<String, FrameError> {
    let frame = Frame::seal(chunk)?;
    let encoded = encode_text(&frame.to_bytes());
    Ok(group(&encoded))
}

/// Decode one text line (terminator already removed) into a verified frame
///
/// # Errors
///
/// Returns an error if:
/// - The text, once separators are stripped, is not valid base32
/// - The decoded frame is shorter than `MIN_FRAME_SIZE`
/// - The checksum doesn't match the payload
pub fn decode_line(line: &[u8]) -> Result<Frame, FrameError> {
    let text = strip_separators(line);
    let bytes = decode_text(&text)?;
    Frame::open(Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{CHUNK_SIZE, GROUP_SIZE, MAX_GROUPED_LINE_CHARS, checksum};

    #[test]
    fn test_encode_decode_roundtrip() {
        let line = encode_line(b"test payload").unwrap();
        let frame = decode_line(line.as_bytes()).unwrap();

        assert_eq!(frame.payload().as_ref(), b"test payload");
        assert_eq!(frame.checksum(), checksum(b"test payload"));
    }

    #[test]
    fn test_full_chunk_line_shape() {
        let line = encode_line(&[0u8; CHUNK_SIZE]).unwrap();

        assert_eq!(line.len(), MAX_GROUPED_LINE_CHARS);
        let groups: Vec<&str> = line.split(' ').collect();
        assert_eq!(groups.len(), 8);
        assert!(groups.iter().all(|g| g.len() == GROUP_SIZE));
        assert!(!line.contains('='));
    }

    #[test]
    fn test_single_byte_line_shape() {
        // 5-byte frame encodes to exactly 8 characters, no padding
        let line = encode_line(&[0x42]).unwrap();
        assert_eq!(line.len(), 9);
        assert_eq!(line.as_bytes()[4], b' ');
    }

    #[test]
    fn test_partial_chunk_is_padded() {
        // 4 + 3 = 7 bytes -> 16 chars, the last 4 of them padding
        let line = encode_line(b"abc").unwrap();
        assert_eq!(line.len(), 19);
        assert!(line.ends_with("===="));
    }

    #[test]
    fn test_encode_rejects_empty_chunk() {
        assert_eq!(encode_line(&[]), Err(FrameError::InvalidChunk { len: 0 }));
    }

    #[test]
    fn test_decode_without_separators() {
        let line = encode_line(b"hello world").unwrap();
        let compact = line.replace(' ', "");

        let frame = decode_line(compact.as_bytes()).unwrap();
        assert_eq!(frame.payload().as_ref(), b"hello world");
    }

    #[test]
    fn test_decode_lowercase_line() {
        let line = encode_line(b"hello").unwrap().to_ascii_lowercase();
        let frame = decode_line(line.as_bytes()).unwrap();
        assert_eq!(frame.payload().as_ref(), b"hello");
    }

    #[test]
    fn test_decode_malformed_text() {
        let result = decode_line(b"ABCD EFG1");
        assert!(matches!(result, Err(FrameError::MalformedText(_))));
    }

    #[test]
    fn test_decode_short_frame() {
        // 4 bytes decode cleanly but cannot carry a payload
        let line = group(&encode_text(&[1, 2, 3, 4]));
        let result = decode_line(line.as_bytes());
        assert_eq!(result, Err(FrameError::TooShort { len: 4 }));
    }

    #[test]
    fn test_decode_empty_line_is_short() {
        assert_eq!(decode_line(b""), Err(FrameError::TooShort { len: 0 }));
        assert_eq!(decode_line(b"   "), Err(FrameError::TooShort { len: 0 }));
    }

    #[test]
    fn test_decode_corrupted_checksum() {
        let mut bytes = Frame::seal(b"abcdefgh").unwrap().to_bytes();
        bytes[2] ^= 0x10;
        let line = group(&encode_text(&bytes));

        let result = decode_line(line.as_bytes());
        assert!(matches!(result, Err(FrameError::ChecksumMismatch { .. })));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn chunk_strategy() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(any::<u8>(), 1..=CHUNK_SIZE)
        }

        proptest! {
            /// Property: any chunk should roundtrip through one line
            #[test]
            fn prop_line_roundtrip(chunk in chunk_strategy()) {
                let line = encode_line(&chunk).unwrap();
                let frame = decode_line(line.as_bytes()).unwrap();
                prop_assert_eq!(frame.payload().as_ref(), chunk.as_slice());
            }

            /// Property: encoded text length is a multiple of 8 base32 chars
            #[test]
            fn prop_text_length_multiple_of_eight(chunk in chunk_strategy()) {
                let line = encode_line(&chunk).unwrap();
                let chars = line.bytes().filter(|&b| b != b' ').count();
                prop_assert_eq!(chars % 8, 0);
                prop_assert!(!line.starts_with(' '));
                prop_assert!(!line.ends_with(' '));
            }

            /// Property: spaces inserted anywhere don't change the result
            #[test]
            fn prop_space_tolerance(
                chunk in chunk_strategy(),
                inserts in prop::collection::vec((0usize..64, 1usize..4), 0..8),
            ) {
                let compact: Vec<u8> = encode_line(&chunk)
                    .unwrap()
                    .bytes()
                    .filter(|&b| b != b' ')
                    .collect();

                let mut noisy = compact.clone();
                for (pos, count) in inserts {
                    let at = pos % (noisy.len() + 1);
                    for _ in 0..count {
                        noisy.insert(at, b' ');
                    }
                }

                let frame = decode_line(&noisy).unwrap();
                prop_assert_eq!(frame.payload().as_ref(), chunk.as_slice());
            }

            /// Property: flipping any bit of the decoded frame is detected
            #[test]
            fn prop_bit_flip_detected(
                chunk in chunk_strategy(),
                bit in 0usize..(8 * (CHUNK_SIZE + 4)),
            ) {
                let mut bytes = Frame::seal(&chunk).unwrap().to_bytes();
                let bit = bit % (8 * bytes.len());
                bytes[bit / 8] ^= 1 << (bit % 8);
                let line = group(&encode_text(&bytes));

                let result = decode_line(line.as_bytes());
                prop_assert!(
                    matches!(result, Err(FrameError::ChecksumMismatch { .. })),
                    "single bit flip should fail checksum"
                );
            }
        }
    }
}
