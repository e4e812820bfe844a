//! Reader-based extractor implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use thiserror::Error;

use crate::sans::{block::BLOCK_LEN, header::FileHeaderError};

use super::{FromEntries, stream};

extern crate std;

/// Length of the scratch buffer filled per read.
const READ_LEN: usize = 8 * BLOCK_LEN;

/// Errors occurring while extracting from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A recognized header block failed validation.
    #[error("Invalid file header: {0}")]
    InvalidHeader(FileHeaderError),
}

impl From<stream::Error> for Error {
    fn from(err: stream::Error) -> Self {
        match err {
            stream::Error::InvalidHeader(inner) => Self::InvalidHeader(inner),
        }
    }
}

/// Extract files from a reader of an archive, publishing to a receiver.
///
/// Reads until the reader is exhausted; a trailing partial block is
/// ignored.
///
/// This method is also re-exported as `macadam::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromEntries) -> Result<(), Error> {
    let mut extractor = stream::Extractor::new();
    let mut buffer = [0; READ_LEN];

    loop {
        let n = r.read(&mut buffer)?;
        if n == 0 {
            return Ok(());
        }

        extractor.feed(&buffer[..n], o)?;
    }
}
