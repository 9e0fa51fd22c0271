//! Frame checksum (CRC-32, IEEE polynomial)

/// Compute the checksum stored in front of a payload
///
/// Only the payload is hashed, never the checksum bytes themselves.
#[inline]
#[must_use]
pub fn checksum(payload: &[u8]) -> u32 {
    crc32fast::hash(payload)
}
