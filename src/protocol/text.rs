//! Text alphabet
//!
//! Standard RFC 4648 base32 (`A`-`Z`, `2`-`7`) with `=` padding.

use std::sync::LazyLock;

use data_encoding::{BASE32, Encoding};

use super::FrameError;

/// Decoding engine: lowercase folds to uppercase, unused low bits of the last
/// symbol are ignored
static LENIENT_BASE32: LazyLock<Encoding> = LazyLock::new(|| {
    let mut spec = BASE32.specification();
    spec.check_trailing_bits = false;
    spec.translate.from.push_str("abcdefghijklmnopqrstuvwxyz");
    spec.translate.to.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    spec.encoding().expect("base32 specification is valid")
});

/// Encode frame bytes as padded base32
///
/// The result is always a multiple of 8 characters.
#[must_use]
pub fn encode_text(bytes: &[u8]) -> String {
    BASE32.encode(bytes)
}

/// Decode padded base32 back into frame bytes
///
/// Lowercase letters are accepted. Any other symbol outside the alphabet, a
/// bad length or bad padding is rejected. Unused low bits of the last symbol
/// are not checked.
pub fn decode_text(text: &[u8]) -> Result<Vec<u8>, FrameError> {
    Ok(LENIENT_BASE32.decode(text)?)
}
