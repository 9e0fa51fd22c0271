//! Chunk reader

use std::io::{self, ErrorKind, Read};

/// Fill `buf` from `source` until it is full or the source is exhausted
///
/// Returns the number of bytes filled; `0` means the source was already at
/// end of input. Short reads are retried, as are reads interrupted by a
/// signal. Any other error is returned as-is, and bytes already filled into
/// `buf` are abandoned with it.
pub fn fill<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}
