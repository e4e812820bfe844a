//! Slice-based extractor implementation.

use super::{
    FromEntries,
    stream::{Error, Extractor},
};

/// Extract files from a slice of an archive, publishing to a receiver.
///
/// Bytes past the final complete block are ignored.
///
/// This method is also re-exported as `macadam::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromEntries) -> Result<(), Error> {
    Extractor::new().feed(r, o)
}
