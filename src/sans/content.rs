//! State processing content blocks.

use either::Either::{self, Left, Right};

use super::{
    block::{BLOCK_LEN, Block},
    header::FileHeader,
};

/// State token to consume a file's content.
#[derive(Debug)]
pub struct Content {
    pub(super) remaining: usize,
}

impl Content {
    /// Transition to another state by consuming a block of content.
    ///
    /// Returns the meaningful prefix of the block and a successor state
    /// token. A file's final block carries padding that is never part of
    /// the content, so the prefix may be shorter than the block. The slice
    /// borrows from the block; copy out any bytes that must outlive it.
    pub fn advance<'b>(self, r: &'b Block) -> (&'b [u8], Either<FileHeader, Content>) {
        let take = usize::min(self.remaining, BLOCK_LEN);
        let remaining = self.remaining - take;

        let successor = if remaining != 0 {
            Right(Content { remaining })
        } else {
            Left(FileHeader)
        };

        (&r.bytes()[..take], successor)
    }
}
