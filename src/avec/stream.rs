//! Chunk-based extractor implementation.

use core::mem;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    block::Accumulator,
    content::Content,
    header::{FileHeader, FileHeaderError, FileMeta},
};

use super::FromEntries;

/// Errors occurring while extracting from chunks.
#[derive(Debug, Error)]
pub enum Error {
    /// A recognized header block failed validation.
    #[error("Invalid file header: {0}")]
    InvalidHeader(#[from] FileHeaderError),
}

/// Whether the next block is a file header or file content.
#[derive(Debug)]
enum State {
    Header(FileHeader),
    Content(FileMeta, Content),
}

/// Extract files from an archive fed in chunks of any length.
///
/// The extractor holds one 512-byte block and a scalar position; it
/// allocates nothing. Chunk boundaries bear no relation to block
/// boundaries: a chunk may complete none, one, or several blocks, each
/// handed to the receiver as it completes.
#[derive(Debug)]
pub struct Extractor {
    staging: Accumulator,
    state: State,
}

impl Extractor {
    /// Create an extractor awaiting the start of an archive.
    pub const fn new() -> Self {
        Self {
            staging: Accumulator::new(),
            state: State::Header(FileHeader),
        }
    }

    /// Consume a chunk of archive data, publishing to a receiver.
    ///
    /// The receiver is invoked synchronously, zero or more times, before
    /// the call returns. Blocks without the ustar format markers are
    /// skipped while awaiting a header, so leading filler and the zero
    /// blocks terminating an archive pass through without error.
    ///
    /// On [`Error::InvalidHeader`] the offending block has been consumed
    /// and the extractor is left awaiting a header: feeding may continue at
    /// the next block boundary without a [`reset`](Self::reset). Bytes
    /// remaining in the erroring chunk are discarded.
    pub fn feed(&mut self, mut r: &[u8], o: &mut impl FromEntries) -> Result<(), Error> {
        loop {
            r = self.staging.fill(r);

            let Some(block) = self.staging.block() else {
                return Ok(());
            };

            let state = mem::replace(&mut self.state, State::Header(FileHeader));

            self.state = match state {
                State::Header(token) => match token.advance(block) {
                    Ok(Left((meta, Left(content)))) => State::Content(meta, content),
                    Ok(Left((meta, Right(header)))) => {
                        // A file of size zero has no content blocks.
                        o.add_content(&meta, &[]);
                        State::Header(header)
                    }
                    Ok(Right(header)) => State::Header(header),
                    Err(err) => {
                        self.staging.clear();
                        return Err(err.into());
                    }
                },
                State::Content(meta, token) => {
                    let (data, successor) = token.advance(block);
                    o.add_content(&meta, data);

                    match successor {
                        Left(header) => State::Header(header),
                        Right(content) => State::Content(meta, content),
                    }
                }
            };

            self.staging.clear();
        }
    }

    /// Return the extractor to its just-constructed state.
    ///
    /// Any partially staged block and any file mid-content are discarded.
    pub fn reset(&mut self) {
        self.staging.clear();
        self.state = State::Header(FileHeader);
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
